//! The flattened, renderable representation of one leaf field.

use crate::{from_camel_case, Tags, RESERVED_KEYS};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One choice of a `select` or `checkbox` field.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectOption {
    /// The text shown to the user.
    pub label: String,
    /// The value submitted.
    pub value: JsonValue,
    /// `value` equals the field's current value.
    pub selected: bool,
}

/// A field descriptor, one per visible leaf field of a record.
///
/// Serializes to JSON with the Rust field names, except `input_type` that
/// serializes as `type`.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Field {
    /// The dotted path to the field (e.g. `Address.City`) or the `name` tag.
    pub name: String,
    /// Defaults to the field identifier with spaces inserted, see
    /// [`from_camel_case()`](../naming/fn.from_camel_case.html).
    pub label: String,
    /// Defaults to the label.
    pub placeholder: String,
    /// `text`, `email`, `password`, `textarea`, `checkbox`, `select`,
    /// `hidden`, or anything given by a `type` tag.
    #[serde(rename = "type")]
    pub input_type: String,
    /// An HTML id, or empty.
    pub id: String,
    /// The current value of the field.
    pub value: JsonValue,
    /// For `select` and `checkbox` fields: the label of the first registered
    /// option whose value equals `value`, or `null`.
    pub select_value: JsonValue,
    /// For `select` and `checkbox` fields: the registered options.
    pub items: Vec<SelectOption>,
    /// Trusted markup to show below the input.
    pub footer: String,
    /// A CSS class, or empty.
    pub class: String,
    /// Trusted markup, `key="value"` for each tag key that has no other use.
    pub attrs: String,
    /// For `select` and `checkbox` fields: the `select` tag, e.g.
    /// `multiple`.
    pub select_type: String,
}

impl Field {
    /// The field types that may have [`items`](#structfield.items).
    ///
    pub const SELECT_TYPES: [&'static str; 2] = ["select", "checkbox"];

    /// A descriptor for the field `ident` at `path` with `value`, defaults
    /// overridden by `tags`.
    ///
    /// `name`, `label`, `placeholder`, `type`, `id`, `footer`, and `class`
    /// set the eponymous descriptor attributes.  `label` also sets the
    /// placeholder, which a `placeholder` tag overrides.  On `select` and
    /// `checkbox` fields, `select` sets `select_type`.  Remaining keys end up
    /// in `attrs` with HTML-escaped values.
    ///
    /// ```
    /// use formfields::{Field, Tags};
    /// use serde_json::json;
    ///
    /// let field = Field::new(
    ///     &["Person".to_string()],
    ///     "FullName",
    ///     json!("Michael"),
    ///     &Tags::parse("label=Name;maxlength=30;data-x=<a>"),
    /// );
    /// assert_eq!(field.name, "Person.FullName");
    /// assert_eq!(field.label, "Name");
    /// assert_eq!(field.placeholder, "Name");
    /// assert_eq!(field.input_type, "text");
    /// assert_eq!(field.attrs, r#"maxlength="30" data-x="&lt;a&gt;""#);
    /// ```
    ///
    pub fn new(
        path: &[String],
        ident: &str,
        value: JsonValue,
        tags: &Tags,
    ) -> Self {
        let human = from_camel_case(ident);
        let mut result = Self {
            name: path
                .iter()
                .map(|s| s.as_str())
                .chain(std::iter::once(ident))
                .join("."),
            label: human.clone(),
            placeholder: human,
            input_type: "text".to_string(),
            value,
            ..Default::default()
        };
        result.apply_tags(tags);
        result
    }

    /// The field is of a type that may have [`items`](#structfield.items).
    ///
    pub fn is_select(&self) -> bool {
        Self::SELECT_TYPES.contains(&self.input_type.as_str())
    }

    fn apply_tags(&mut self, tags: &Tags) {
        if let Some(v) = tags.get("name") {
            self.name = v.to_string();
        }
        if let Some(v) = tags.get("label") {
            self.label = v.to_string();
            // must precede the placeholder check
            self.placeholder = v.to_string();
        }
        if let Some(v) = tags.get("placeholder") {
            self.placeholder = v.to_string();
        }
        if let Some(v) = tags.get("type") {
            self.input_type = v.to_string();
        }
        if let Some(v) = tags.get("id") {
            self.id = v.to_string();
        }
        if let Some(v) = tags.get("footer") {
            self.footer = v.to_string();
        }
        if let Some(v) = tags.get("class") {
            self.class = v.to_string();
        }
        let mut consumed = RESERVED_KEYS.to_vec();
        if self.is_select() {
            if let Some(v) = tags.get("select") {
                self.select_type = v.to_string();
                consumed.push("select");
            }
        }
        self.attrs = tags
            .unreserved(&consumed)
            .map(|(k, v)| format!(r#"{}="{}""#, k, v_htmlescape::escape(v)))
            .join(" ");
    }
}
