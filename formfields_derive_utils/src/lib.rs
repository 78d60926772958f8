//! Only for use by the `formfields_derive` macros.

use ::proc_macro2::Span;
use ::syn::{
    ext::IdentExt, punctuated::Punctuated, token::Comma, Attribute, Data,
    DeriveInput, Field, Fields, Ident, LitStr,
};

/// The name of the field attribute carrying the tag string.
///
pub const TAG_ATTR: &str = "form";

#[doc(hidden)]
pub fn get_string_from_attr<F>(
    attrs: &[Attribute],
    attr_name: &str,
    id: &Ident,
    default: F,
) -> String
where
    F: Fn(&Ident) -> String,
{
    use ::syn::{Lit, Meta};
    let error_msg = format!("expected #[{} = \"key=value;...\"]", attr_name);
    match attrs.iter().filter(|a| a.path.is_ident(attr_name)).last() {
        Some(attr) => match attr.parse_meta().expect(&error_msg) {
            Meta::NameValue(value) => match value.lit {
                Lit::Str(tag) => tag.value(),
                _ => panic!("{}", error_msg),
            },
            _ => panic!("{}", error_msg),
        },
        None => default(id),
    }
}

#[doc(hidden)]
pub fn id_to_litstr(id: &Ident) -> LitStr {
    LitStr::new(&id.unraw().to_string(), Span::call_site())
}

// Must agree with formfields::Tags::parse().
#[doc(hidden)]
pub fn is_excluded_tag(tag: &str) -> bool {
    tag.split(';').any(|segment| segment.trim() == "-")
}

#[doc(hidden)]
pub fn named_fields(
    struct_tokens: &DeriveInput,
) -> Result<Punctuated<Field, Comma>, String> {
    if let Data::Struct(data_struct) = &struct_tokens.data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            Ok(fields_named.named.clone())
        } else {
            Err("fields must be named".to_string())
        }
    } else {
        Err("must be a struct".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_excluded_tag() {
        assert!(is_excluded_tag("-"));
        assert!(is_excluded_tag(" - "));
        assert!(is_excluded_tag("label=Name;-"));
        assert!(!is_excluded_tag(""));
        assert!(!is_excluded_tag("label=-"));
        assert!(!is_excluded_tag("label=a-b;type=text"));
    }

    #[test]
    fn test_named_fields() {
        let named: DeriveInput =
            ::syn::parse_str("struct S { a: String, b: u32 }").unwrap();
        assert_eq!(named_fields(&named).unwrap().len(), 2);
        let tuple: DeriveInput =
            ::syn::parse_str("struct T(String);").unwrap();
        assert_eq!(
            named_fields(&tuple).unwrap_err(),
            "fields must be named",
        );
        let enm: DeriveInput = ::syn::parse_str("enum E { A }").unwrap();
        assert_eq!(named_fields(&enm).unwrap_err(), "must be a struct");
    }

    #[test]
    fn test_get_string_from_attr() {
        let input: DeriveInput = ::syn::parse_str(
            r#"struct S {
                #[form = "type=email"] email: String,
                name: String,
            }"#,
        )
        .unwrap();
        let fields = named_fields(&input).unwrap();
        let tags: Vec<String> = fields
            .iter()
            .map(|f| {
                get_string_from_attr(
                    &f.attrs,
                    TAG_ATTR,
                    f.ident.as_ref().unwrap(),
                    |_| String::new(),
                )
            })
            .collect();
        assert_eq!(tags, vec!["type=email".to_string(), String::new()]);
    }

    #[test]
    fn test_id_to_litstr_unraws() {
        let id: Ident = ::syn::parse_str("r#type").unwrap();
        assert_eq!(id_to_litstr(&id).value(), "type");
    }
}
