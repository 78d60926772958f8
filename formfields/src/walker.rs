//! Flatten a record into an ordered list of field descriptors.
//!
//! A record is a type implementing [`FormFields`](trait.FormFields.html),
//! usually by way of the [`FormFields` derive
//! ](../../formfields_derive/derive.FormFields.html).  Each field of a
//! record must implement [`FieldValue`](trait.FieldValue.html), deciding
//! whether it is a leaf or a nested record.
//!
//! # Example
//!
//! ```
//! use formfields::{fields, FormFields};
//! use serde_json::json;
//!
//! #[derive(Default, FormFields)]
//! struct Address {
//!     pub street: String,
//!     #[form = "label=Postal Code"]
//!     pub zip: String,
//! }
//!
//! #[derive(FormFields)]
//! struct Person {
//!     #[form = "label=Full Name;id=name"]
//!     pub name: String,
//!     #[form = "type=password;footer=Something super secret!"]
//!     pub password: String,
//!     pub address: Option<Address>,
//!     #[form = "-"]
//!     pub admin: bool,
//!     secret: String,
//! }
//!
//! let person = Person {
//!     name: "Michael Scott".to_string(),
//!     password: String::new(),
//!     address: None,
//!     admin: true,
//!     secret: "hidden".to_string(),
//! };
//! let flat = fields(&person);
//! assert_eq!(
//!     flat.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
//!     vec!["name", "password", "address.street", "address.zip"],
//! );
//! assert_eq!(flat[0].placeholder, "Full Name");
//! assert_eq!(flat[0].value, json!("Michael Scott"));
//! assert_eq!(flat[1].input_type, "password");
//! assert_eq!(flat[3].label, "Postal Code");
//! assert_eq!(flat[3].value, json!(""));
//! # let _ = person.secret;
//! ```

use crate::{Error, Field, Tags};
use serde_json::Value as JsonValue;

/// A record, i.e. a type with named fields that are flattened into
/// [`Field`](../field/struct.Field.html)s.
///
/// Derive it, or implement it by hand as an explicit schema:
/// ```
/// use formfields::{fields, FieldMeta, FieldValue, FormFields, Walker};
///
/// struct Login {
///     user: String,
///     password: String,
/// }
///
/// impl FormFields for Login {
///     fn walk(&self, walker: &mut Walker) {
///         walker.field("User", "", &self.user);
///         walker.field("Password", "type=password", &self.password);
///     }
/// }
///
/// impl FieldValue for Login {
///     fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
///         walker.record(meta, self);
///     }
/// }
///
/// let flat = fields(&Login {
///     user: "bob".to_string(),
///     password: String::new(),
/// });
/// assert_eq!(flat[1].name, "Password");
/// assert_eq!(flat[1].input_type, "password");
/// ```
///
pub trait FormFields {
    /// Call [`Walker::field()`](struct.Walker.html#method.field) for each
    /// field, in declaration order.
    ///
    fn walk(&self, walker: &mut Walker);
}

/// A type that can be a record field.
///
/// Scalars call [`Walker::scalar()`](struct.Walker.html#method.scalar),
/// records call [`Walker::record()`](struct.Walker.html#method.record).
///
/// Implemented for strings, `bool`, `char`, numbers, `serde_json::Value`,
/// `chrono` dates and times, references, `Box`, and `Option<T>` where `T:
/// Default`.  `None` is walked as `T::default()`, so an absent nested record
/// yields the same fields as a default one.
///
pub trait FieldValue {
    fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker);
}

/// What the walker knows about the field being visited.
///
#[derive(Clone, Debug, Default)]
pub struct FieldMeta {
    ident: String,
    tags: Tags,
}

impl FieldMeta {
    /// The field identifier.
    ///
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The parsed tag.
    ///
    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Collects the [`Field`](../field/struct.Field.html)s of a record.
///
#[derive(Debug, Default)]
pub struct Walker {
    path: Vec<String>,
    fields: Vec<Field>,
    at_root: bool,
    invalid_root: Option<String>,
}

impl Walker {
    /// Visit the field `ident` with the tag string `tag` and the value
    /// `value`, unless the tag excludes it.
    ///
    pub fn field<V: FieldValue + ?Sized>(
        &mut self,
        ident: &str,
        tag: &str,
        value: &V,
    ) {
        let tags = Tags::parse(tag);
        if tags.excluded() {
            log::trace!("excluded field {}", self.path_to(ident));
            return;
        }
        value.walk_field(
            &FieldMeta {
                ident: ident.to_string(),
                tags,
            },
            self,
        );
    }

    /// Visit the fields of the nested `record` with the field identifier
    /// appended to the name path.  Tags other than exclusion are ignored.
    ///
    pub fn record<R: FormFields + ?Sized>(
        &mut self,
        meta: &FieldMeta,
        record: &R,
    ) {
        if std::mem::replace(&mut self.at_root, false) {
            record.walk(self);
        } else {
            self.path.push(meta.ident.clone());
            record.walk(self);
            self.path.pop();
        }
    }

    /// Add a [`Field`](../field/struct.Field.html) with `value`.
    ///
    pub fn scalar(&mut self, meta: &FieldMeta, value: JsonValue) {
        if self.at_root {
            self.invalid_root = Some(value.to_string());
            return;
        }
        self.fields
            .push(Field::new(&self.path, &meta.ident, value, &meta.tags));
    }

    fn path_to(&self, ident: &str) -> String {
        let mut path = self.path.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path + ident
    }
}

/// The fields of `value`, depth first in declaration order.
///
/// # Panics
///
/// If `value` is not a record, possibly behind references, `Box`, or
/// `Option`.  See [`try_fields()`](fn.try_fields.html).
///
pub fn fields<V: FieldValue + ?Sized>(value: &V) -> Vec<Field> {
    match try_fields(value) {
        Ok(flat) => flat,
        Err(err) => {
            panic!("invalid value; only records are supported: {}", err)
        }
    }
}

/// Like [`fields()`](fn.fields.html), but returns
/// `Err(Error::InvalidInputKind)` if `value` is not a record.
///
/// ```
/// use formfields::{try_fields, Error};
///
/// assert!(matches!(try_fields(&42), Err(Error::InvalidInputKind(_))));
/// assert!(matches!(
///     try_fields(&Some("text")),
///     Err(Error::InvalidInputKind(_)),
/// ));
/// ```
///
pub fn try_fields<V: FieldValue + ?Sized>(
    value: &V,
) -> Result<Vec<Field>, Error> {
    let mut walker = Walker {
        at_root: true,
        ..Default::default()
    };
    value.walk_field(&FieldMeta::default(), &mut walker);
    if let Some(scalar) = walker.invalid_root {
        return Err(Error::invalid_input_kind(scalar));
    }
    log::debug!("flattened {} fields", walker.fields.len());
    Ok(walker.fields)
}

// --- FieldValue implementations --------------------------------------------

macro_rules! scalar_field_value {
    ($( $typ:ty ),* $(,)?) => {
    $(
        impl FieldValue for $typ {
            fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
                walker.scalar(meta, JsonValue::from(self.clone()));
            }
        }
    )*
    };
}

scalar_field_value!(
    String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32,
    f64, JsonValue,
);

macro_rules! display_field_value {
    ($( $typ:ty ),* $(,)?) => {
    $(
        impl FieldValue for $typ {
            fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
                walker.scalar(meta, JsonValue::String(self.to_string()));
            }
        }
    )*
    };
}

display_field_value!(
    str,
    char,
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::NaiveTime,
);

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
        (**self).walk_field(meta, walker);
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
        self.as_ref().walk_field(meta, walker);
    }
}

impl<T: FieldValue + Default> FieldValue for Option<T> {
    fn walk_field(&self, meta: &FieldMeta, walker: &mut Walker) {
        match self {
            Some(val) => val.walk_field(meta, walker),
            None => T::default().walk_field(meta, walker),
        }
    }
}
