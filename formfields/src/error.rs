//! The formfields error types.
//!

use std::fmt::Display;

/// The error type returned by the walker and the render driver.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root value given to the walker is not a record.  This is a
    /// programming error, and [`fields()`](../walker/fn.fields.html) panics
    /// rather than returning it.
    ///
    InvalidInputKind(String),

    /// Unspecified error.
    ///
    Other(String),

    /// Executing an input template failed.
    ///
    Render(String),

    /// An input template could not be registered.
    ///
    Template(String),
}

impl Error {
    /// Create an `Error::InvalidInputKind`.
    ///
    pub fn invalid_input_kind<T: Display>(text: T) -> Self {
        Self::InvalidInputKind(text.to_string())
    }

    /// Create an `Error::Other`.
    ///
    pub fn other<T: Display>(text: T) -> Self {
        Self::Other(text.to_string())
    }

    /// Create an `Error::Render`.
    ///
    pub fn render<T: Display>(text: T) -> Self {
        Self::Render(text.to_string())
    }

    /// Create an `Error::Template`.
    ///
    pub fn template<T: Display>(text: T) -> Self {
        Self::Template(text.to_string())
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (variant, text) = match self {
            Self::InvalidInputKind(text) => ("InvalidInputKind", text),
            Self::Other(text) => ("Other", text),
            Self::Render(text) => ("Render", text),
            Self::Template(text) => ("Template", text),
        };
        if text.is_empty() {
            write!(f, "error--{}", variant)
        } else {
            write!(f, "error--{}--{}", variant, text)
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

/// An error concerning one form field.
///
/// `field` should be the [`name`](../field/struct.Field.html#structfield.name)
/// of the field, i.e. the dotted path (`Address.City`) or the name given by a
/// `name=` tag.
///
/// [`ErrorIndex`](../errors/struct.ErrorIndex.html) finds a `FieldError`
/// anywhere in the [`source()`
/// ](https://doc.rust-lang.org/std/error/trait.Error.html#method.source)
/// chain of an error.
///
/// ```
/// use formfields::FieldError;
///
/// let err = FieldError::new("Email", "is taken");
/// assert_eq!(err.field, "Email");
/// assert_eq!(err.to_string(), "Email: is taken");
/// ```
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    /// The name of the field.
    pub field: String,
    /// The message to show with the field.
    pub message: String,
}

impl FieldError {
    pub fn new<F: Display, M: Display>(field: F, message: M) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::error::Error for FieldError {}

impl Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
