//! Reflect records (structs) into HTML form input fields.
//!
//! A record deriving [`FormFields`](walker/trait.FormFields.html) is
//! flattened into an ordered list of [`Field`](field/struct.Field.html)
//! descriptors by [`fields()`](walker/fn.fields.html).  A [`Form`
//! ](form/struct.Form.html) renders each descriptor with an [`InputTemplate`
//! ](form/trait.InputTemplate.html), supplying the messages of any
//! [`FieldError`](error/struct.FieldError.html)s for that field, and
//! concatenates the results.
//!
//! Field configuration is a tag string in a `form` attribute:
//! ```text
//! #[form = "label=Full Name;placeholder=Enter name;type=text"]
//! ```
//! See [`Tags`](tags/struct.Tags.html) and [`Field::new()`
//! ](field/struct.Field.html#method.new).

extern crate self as formfields;

pub mod error;
pub mod errors;
pub mod field;
pub mod form;
pub mod naming;
pub mod select;
pub mod tags;
pub mod walker;

pub use error::{Error, FieldError};
pub use errors::ErrorIndex;
pub use field::{Field, SelectOption};
pub use form::{Form, InputTemplate};
pub use formfields_derive::FormFields;
pub use naming::from_camel_case;
pub use select::Selections;
pub use tags::{Tags, EXCLUDE, RESERVED_KEYS};
pub use walker::{
    fields, try_fields, FieldMeta, FieldValue, FormFields, Walker,
};
