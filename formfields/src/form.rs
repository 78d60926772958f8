//! Render the fields of a record using an input template.

use crate::{fields, Error, ErrorIndex, Field, FieldValue, Selections};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::error::Error as StdError;

/// An input template, rendering one field.
///
/// `errors` are the messages for the field, see [`ErrorIndex`
/// ](../errors/struct.ErrorIndex.html).  The returned string is trusted
/// markup.
///
/// Implemented for closures.  See also the `formfields_handlebars` crate.
///
pub trait InputTemplate {
    fn render_input(
        &self,
        field: &Field,
        errors: &[String],
    ) -> Result<String, Error>;
}

impl<F> InputTemplate for F
where
    F: Fn(&Field, &[String]) -> Result<String, Error>,
{
    fn render_input(
        &self,
        field: &Field,
        errors: &[String],
    ) -> Result<String, Error> {
        self(field, errors)
    }
}

/// Renders records as HTML form inputs, one [`InputTemplate`
/// ](trait.InputTemplate.html) invocation per field.
///
/// ```
/// use formfields::{Error, Field, FieldError, Form, FormFields};
///
/// #[derive(FormFields)]
/// struct Signup {
///     #[form = "label=Full Name"]
///     pub name: String,
///     #[form = "type=email"]
///     pub email: String,
///     #[form = "type=hidden"]
///     pub token: String,
/// }
///
/// let mut form = Form::new(|f: &Field, errs: &[String]| {
///     Ok::<_, Error>(format!(
///         "<input type=\"{}\" name=\"{}\" placeholder=\"{}\">{}",
///         f.input_type,
///         f.name,
///         f.placeholder,
///         errs.join(","),
///     ))
/// });
/// form.skip("token");
/// let taken = FieldError::new("email", "is taken");
/// let html = form
///     .render(
///         &Signup {
///             name: String::new(),
///             email: "bob@example.com".to_string(),
///             token: "x".to_string(),
///         },
///         &[&taken],
///     )
///     .unwrap();
/// assert_eq!(
///     html,
///     "<input type=\"text\" name=\"name\" placeholder=\"Full Name\">\
///      <input type=\"email\" name=\"email\" placeholder=\"email\">is taken",
/// );
/// ```
///
pub struct Form<T: InputTemplate> {
    template: T,
    selections: Selections,
    skips: HashSet<String>,
}

impl<T: InputTemplate> Form<T> {
    /// A form rendering each field with `template`.
    ///
    pub fn new(template: T) -> Self {
        Self {
            template,
            selections: Selections::new(),
            skips: HashSet::new(),
        }
    }

    /// The fields of `value` that are not [skipped](#method.skip), with
    /// registered [options](#method.select).
    ///
    /// # Panics
    ///
    /// If `value` is not a record, see [`fields()`
    /// ](../walker/fn.fields.html).
    ///
    pub fn inputs<V: FieldValue + ?Sized>(&self, value: &V) -> Vec<Field> {
        fields(value)
            .into_iter()
            .filter(|field| {
                let skip = self.skips.contains(&field.name);
                if skip {
                    log::trace!("skipping field {}", field.name);
                }
                !skip
            })
            .map(|mut field| {
                self.selections.enrich(&mut field);
                field
            })
            .collect()
    }

    /// Render the [`inputs()`](#method.inputs) of `value` with the messages
    /// for each field from `errors`, and concatenate the results.
    ///
    /// If the template fails for any field the error is returned and
    /// nothing else.
    ///
    /// # Panics
    ///
    /// If `value` is not a record, see [`fields()`
    /// ](../walker/fn.fields.html).
    ///
    pub fn render<V: FieldValue + ?Sized>(
        &self,
        value: &V,
        errors: &[&(dyn StdError + 'static)],
    ) -> Result<String, Error> {
        let index = ErrorIndex::new(errors.iter().copied());
        let mut html = String::new();
        for field in self.inputs(value) {
            html += &self
                .template
                .render_input(&field, index.get(&field.name))?;
        }
        log::debug!("rendered {} bytes of form inputs", html.len());
        Ok(html)
    }

    /// Register (or replace) the `(label, value)` options for the `select`
    /// or `checkbox` field `name`.
    ///
    pub fn select<V>(&mut self, name: &str, options: &[(&str, V)])
    where
        V: Clone + Into<JsonValue>,
    {
        self.selections.register(name, options);
    }

    /// Never render the field `name`.
    ///
    pub fn skip(&mut self, name: &str) {
        self.skips.insert(name.to_string());
    }

    /// The input template.
    ///
    pub fn template(&self) -> &T {
        &self.template
    }
}
