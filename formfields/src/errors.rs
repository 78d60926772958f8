//! Associate error messages with fields.

use crate::FieldError;
use std::collections::HashMap;
use std::error::Error as StdError;

/// Error messages by field name.
///
/// Built from any errors; those that are, or have as a [`source()`
/// ](https://doc.rust-lang.org/std/error/trait.Error.html#method.source), a
/// [`FieldError`](../error/struct.FieldError.html) contribute their message.
/// Other errors are ignored.
///
/// ```
/// use formfields::{ErrorIndex, FieldError};
/// use std::error::Error;
///
/// let taken = FieldError::new("Email", "taken");
/// let invalid = FieldError::new("Email", "invalid");
/// let unrelated = std::fmt::Error;
/// let index = ErrorIndex::new([
///     &taken as &(dyn Error + 'static),
///     &invalid,
///     &unrelated,
/// ]);
/// assert_eq!(index.get("Email"), ["taken", "invalid"]);
/// assert!(index.get("Name").is_empty());
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct ErrorIndex(HashMap<String, Vec<String>>);

impl ErrorIndex {
    /// Collect the field messages in `errors`, keeping their order and any
    /// duplicates.
    ///
    pub fn new<'a, I>(errors: I) -> Self
    where
        I: IntoIterator<Item = &'a (dyn StdError + 'static)>,
    {
        let mut result = Self::default();
        for err in errors {
            match Self::find_field_error(err) {
                Some(fe) => result
                    .0
                    .entry(fe.field.clone())
                    .or_default()
                    .push(fe.message.clone()),
                None => log::trace!("not a field error: {}", err),
            }
        }
        result
    }

    /// The messages for the field `name`, empty if none.
    ///
    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn find_field_error<'a>(
        err: &'a (dyn StdError + 'static),
    ) -> Option<&'a FieldError> {
        let mut current = Some(err);
        while let Some(e) = current {
            if let Some(fe) = e.downcast_ref::<FieldError>() {
                return Some(fe);
            }
            current = e.source();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        context: &'static str,
        inner: Box<dyn StdError + 'static>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}: {}", self.context, self.inner)
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.inner.as_ref())
        }
    }

    fn wrap(context: &'static str, err: impl StdError + 'static) -> Wrapped {
        Wrapped {
            context,
            inner: Box::new(err),
        }
    }

    #[test]
    fn test_grouping_and_order() {
        let errs: Vec<Box<dyn StdError>> = vec![
            Box::new(FieldError::new("Email", "taken")),
            Box::new(FieldError::new("Name", "is required")),
            Box::new(FieldError::new("Email", "invalid")),
            Box::new(FieldError::new("Email", "taken")),
        ];
        let index = ErrorIndex::new(errs.iter().map(|e| e.as_ref()));
        assert_eq!(index.get("Email"), ["taken", "invalid", "taken"]);
        assert_eq!(index.get("Name"), ["is required"]);
    }

    #[test]
    fn test_wrapped() {
        let once = wrap("wrapped", FieldError::new("Name", "is required"));
        let twice = wrap(
            "first",
            wrap("second", FieldError::new("Email", "is taken")),
        );
        let index = ErrorIndex::new([
            &once as &(dyn StdError + 'static),
            &twice,
        ]);
        assert_eq!(index.get("Name"), ["is required"]);
        assert_eq!(index.get("Email"), ["is taken"]);
    }

    #[test]
    fn test_unrelated_ignored() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let wrapped_io = wrap("context", fmt::Error);
        let index = ErrorIndex::new([
            &io as &(dyn StdError + 'static),
            &wrapped_io,
        ]);
        assert!(index.is_empty());
        let none: Vec<&(dyn StdError + 'static)> = Vec::new();
        assert!(ErrorIndex::new(none).get("anything").is_empty());
    }
}
