//! Implement `formfields::InputTemplate` by way of the `handlebars` crate.
//!
//! The template is rendered with the JSON serialization of a
//! [`formfields::Field`](../formfields/field/struct.Field.html) extended
//! with `errors`, an array of the messages for the field.  E.g.
//! ```text
//! <label>{{label}}</label>
//! <input type="{{type}}" name="{{name}}" value="{{value}}">
//! {{#each errors}}<p>{{this}}</p>{{/each}}
//! ```
//! `footer`, `attrs`, and `select_type` are trusted markup and should be
//! rendered with triple braces.

use ::formfields::{Error, Field, InputTemplate};
use ::serde_json::{json, Value as JsonValue};
use ::std::path::Path;

/// The file read by [`HbInputTemplate::new(None)`
/// ](struct.HbInputTemplate.html#method.new).
///
pub const DEFAULT_TEMPL_FILE: &str = "templates/form_input.hbs";

/// A Bootstrap styled input template, used if no other is available.
///
pub const BUILTIN_TEMPLATE: &str = include_str!("form_input.hbs");

const TEMPL_NAME: &str = "form_input";

pub struct HbInputTemplate(handlebars::Handlebars<'static>);

impl HbInputTemplate {
    /// Read the input template from `templ_file`, default
    /// [`DEFAULT_TEMPL_FILE`](constant.DEFAULT_TEMPL_FILE.html).
    ///
    /// If the file cannot be read or parsed, log a warning and use the
    /// [`BUILTIN_TEMPLATE`](constant.BUILTIN_TEMPLATE.html).
    ///
    pub fn new(templ_file: Option<&Path>) -> Self {
        let path = templ_file.unwrap_or(Path::new(DEFAULT_TEMPL_FILE));
        match std::fs::read_to_string(path)
            .map_err(Error::template)
            .and_then(|src| Self::from_template_str(&src))
        {
            Ok(eng) => {
                log::debug!("input template {}", path.display());
                eng
            }
            Err(e) => {
                log::warn!(
                    "{}: {}, using the built-in input template",
                    path.display(),
                    e,
                );
                Self::builtin()
            }
        }
    }

    /// Use the [`BUILTIN_TEMPLATE`](constant.BUILTIN_TEMPLATE.html).
    ///
    pub fn builtin() -> Self {
        Self::from_template_str(BUILTIN_TEMPLATE)
            .expect("the built-in input template should parse")
    }

    /// Use `src` as the input template.
    ///
    /// ```
    /// use formfields::Error;
    /// use formfields_handlebars::HbInputTemplate;
    ///
    /// assert!(HbInputTemplate::from_template_str("{{label}}").is_ok());
    /// assert!(matches!(
    ///     HbInputTemplate::from_template_str("{{#if label}}{{/each}}"),
    ///     Err(Error::Template(_)),
    /// ));
    /// ```
    ///
    pub fn from_template_str(src: &str) -> Result<Self, Error> {
        let mut hb = handlebars::Handlebars::new();
        hb.register_template_string(TEMPL_NAME, src)
            .map_err(Error::template)?;
        Ok(Self(hb))
    }
}

impl Default for HbInputTemplate {
    fn default() -> Self {
        Self::new(None)
    }
}

impl InputTemplate for HbInputTemplate {
    fn render_input(
        &self,
        field: &Field,
        errors: &[String],
    ) -> Result<String, Error> {
        let mut data = serde_json::to_value(field).map_err(Error::render)?;
        if let JsonValue::Object(map) = &mut data {
            map.insert("errors".to_string(), json!(errors));
        }
        self.0.render(TEMPL_NAME, &data).map_err(Error::render)
    }
}
