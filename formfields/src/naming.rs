//! Turn field identifiers into labels.

use regex::Regex;
use std::sync::OnceLock;

/// Insert spaces at the word boundaries of a camel case identifier.
///
/// Three rules are applied in order:
/// 1. Before an uppercase letter followed by one lowercase letter and
///    digits, if preceded by a character that is not uppercase.
/// 2. Between a lowercase letter or digit and an uppercase letter.
/// 3. Between letters and digits.
///
/// Nothing else is changed.
///
/// ```
/// use formfields::from_camel_case;
///
/// assert_eq!(from_camel_case("Name"), "Name");
/// assert_eq!(from_camel_case("firstName"), "first Name");
/// assert_eq!(from_camel_case("Street1"), "Street 1");
/// assert_eq!(from_camel_case("UserID2"), "User ID 2");
/// assert_eq!(from_camel_case("AddressLine2"), "Address Line 2");
/// ```
///
pub fn from_camel_case(ident: &str) -> String {
    static FIRST_CAP: OnceLock<Regex> = OnceLock::new();
    static ALL_CAP: OnceLock<Regex> = OnceLock::new();
    static NUMBERS: OnceLock<Regex> = OnceLock::new();
    let first_cap = FIRST_CAP
        .get_or_init(|| Regex::new(r"([^A-Z])([A-Z][a-z][0-9]+)").unwrap());
    let all_cap =
        ALL_CAP.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
    let numbers =
        NUMBERS.get_or_init(|| Regex::new(r"([A-Za-z]+)([0-9]+)").unwrap());
    let spaced = first_cap.replace_all(ident, "${1} ${2}");
    let spaced = all_cap.replace_all(&spaced, "${1} ${2}");
    numbers.replace_all(&spaced, "${1} ${2}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_boundaries() {
        assert_eq!(from_camel_case("Name"), "Name");
        assert_eq!(from_camel_case("email"), "email");
        assert_eq!(from_camel_case(""), "");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(from_camel_case("FirstName"), "First Name");
        assert_eq!(from_camel_case("PostalCode"), "Postal Code");
        assert_eq!(from_camel_case("Ab1"), "Ab 1");
        assert_eq!(from_camel_case("xAb12"), "x Ab 12");
        assert_eq!(from_camel_case("HTMLParser"), "HTMLParser");
        assert_eq!(from_camel_case("Zip5Code"), "Zip 5 Code");
    }

    #[test]
    fn test_idempotent_on_spaced() {
        for ident in ["UserID2", "Street1", "FirstName", "firstName"] {
            let once = from_camel_case(ident);
            assert_eq!(from_camel_case(&once), once);
        }
    }

    #[test]
    fn test_case_preserved() {
        let ident = "someMixedCASE9";
        let spaced = from_camel_case(ident);
        assert_eq!(spaced.replace(' ', ""), ident);
    }
}
