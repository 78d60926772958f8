//! Choices for `select` and `checkbox` fields.

use crate::{Field, SelectOption};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Registered options by field name.
///
/// Populate it before rendering; it is only read while rendering.
///
/// ```
/// use formfields::{Field, Selections};
/// use serde_json::json;
///
/// let mut selections = Selections::new();
/// selections.register("State", &[("California", "CA"), ("Texas", "TX")]);
///
/// let mut field = Field {
///     name: "State".to_string(),
///     input_type: "select".to_string(),
///     value: json!("TX"),
///     ..Default::default()
/// };
/// selections.enrich(&mut field);
/// assert_eq!(field.items.len(), 2);
/// assert!(field.items[1].selected);
/// assert_eq!(field.select_value, json!("Texas"));
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct Selections(HashMap<String, Vec<(String, JsonValue)>>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the `(label, value)` options for the field
    /// `name`.
    ///
    pub fn register<V>(&mut self, name: &str, options: &[(&str, V)])
    where
        V: Clone + Into<JsonValue>,
    {
        self.0.insert(
            name.to_string(),
            options
                .iter()
                .map(|(label, val)| (label.to_string(), val.clone().into()))
                .collect(),
        );
    }

    /// The options registered for `name`, if any.
    ///
    pub fn get(&self, name: &str) -> Option<&[(String, JsonValue)]> {
        self.0.get(name).map(|opts| opts.as_slice())
    }

    /// If `field` is a `select` or `checkbox` field with registered options,
    /// set its [`items`](../field/struct.Field.html#structfield.items) and
    /// [`select_value`
    /// ](../field/struct.Field.html#structfield.select_value).
    ///
    pub fn enrich(&self, field: &mut Field) {
        if !field.is_select() {
            return;
        }
        let options = match self.get(&field.name) {
            Some(opts) => opts,
            None => return,
        };
        field.items = options
            .iter()
            .map(|(label, value)| SelectOption {
                label: label.clone(),
                value: value.clone(),
                selected: *value == field.value,
            })
            .collect();
        field.select_value = field
            .items
            .iter()
            .find(|item| item.selected)
            .map(|item| JsonValue::String(item.label.clone()))
            .unwrap_or(JsonValue::Null);
    }
}
