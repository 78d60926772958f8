//! Derive macro for `formfields` records.

use ::proc_macro::TokenStream;

mod form_fields;

/// Derives [`formfields::FormFields`
/// ](../formfields/walker/trait.FormFields.html) and [`formfields::FieldValue`
/// ](../formfields/walker/trait.FieldValue.html).
///
/// ## Generated Code
///
/// `FormFields::walk()` visits the fields in declaration order, calling
/// `Walker::field()` with the field identifier, the tag string and a
/// reference to the field value.
///
/// `FieldValue::walk_field()` makes the struct usable as a nested record in
/// another struct, so its fields are flattened with dotted names.
///
/// ## Field attributes
///
/// ```text
/// #[form = "key=value;key=value;..."]
/// ```
/// The tag string, see [`formfields::Tags`
/// ](../formfields/tags/struct.Tags.html). A field whose tag has a bare `-`
/// segment is not visited at all, and its type need not implement
/// `FieldValue`.
///
/// ### Restrictions imposed by the derive macro
///
/// The item that derives `FormFields` must be a `struct` with named fields.
///
/// Only fields that are not private (`pub`, `pub(crate)` and so on) are
/// visited. Private fields are silently skipped.
///
/// The types of visited fields must implement `FieldValue`.
///
#[proc_macro_derive(FormFields, attributes(form))]
pub fn form_fields_derive(input: TokenStream) -> TokenStream {
    form_fields::form_fields_impl(input)
}
