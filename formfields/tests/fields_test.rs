#![allow(non_snake_case)]

use ::formfields::{fields, Field, FormFields};
use ::serde_json::{json, Value as JsonValue};

#[derive(Clone, Debug, Default, FormFields)]
struct Address {
    pub Street1: String,
}

#[derive(Clone, Debug, Default, FormFields)]
struct AddressWithTags {
    #[form = "name=street"]
    pub Street1: String,
}

fn field(name: &str, label: &str, value: JsonValue) -> Field {
    Field {
        name: name.to_string(),
        label: label.to_string(),
        placeholder: label.to_string(),
        input_type: "text".to_string(),
        value,
        ..Default::default()
    }
}

fn names(flat: &[Field]) -> Vec<&str> {
    flat.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_simple_and_empty() {
    #[derive(FormFields)]
    struct Simple {
        pub Name: String,
    }
    assert_eq!(
        fields(&Simple {
            Name: String::new()
        }),
        vec![field("Name", "Name", json!(""))],
    );
    assert_eq!(
        fields(&Simple {
            Name: "Michael Scott".to_string()
        }),
        vec![field("Name", "Name", json!("Michael Scott"))],
    );
}

#[test]
fn test_ignored_and_private() {
    #[derive(FormFields)]
    struct WithIgnored {
        pub Name: String,
        #[form = "-"]
        pub Ignored: String,
        #[form = "label=Not Shown;-"]
        pub AlsoIgnored: Vec<String>,
        Private: String,
    }
    let value = WithIgnored {
        Name: String::new(),
        Ignored: "secret info".to_string(),
        AlsoIgnored: vec![],
        Private: "private".to_string(),
    };
    assert_eq!(fields(&value), vec![field("Name", "Name", json!(""))]);
    assert_eq!(value.Private, "private");
}

#[test]
fn test_all_excluded() {
    #[derive(FormFields)]
    struct Nothing {
        #[form = "-"]
        pub A: String,
        #[form = "-"]
        pub B: Address,
    }
    assert!(fields(&Nothing {
        A: String::new(),
        B: Address::default(),
    })
    .is_empty());
}

#[test]
fn test_excluded_subtree() {
    #[derive(FormFields)]
    struct Outer {
        pub Name: String,
        #[form = "-"]
        pub Address: Address,
        #[form = "-"]
        pub Shipping: Option<Address>,
    }
    assert_eq!(
        names(&fields(&Outer {
            Name: String::new(),
            Address: Address::default(),
            Shipping: None,
        })),
        vec!["Name"],
    );
}

#[test]
fn test_nested_order() {
    #[derive(Default, FormFields)]
    struct Inner {
        pub C: u32,
        pub D: bool,
    }
    #[derive(FormFields)]
    struct Outer {
        pub A: String,
        pub B: Inner,
        pub E: f64,
    }
    let flat = fields(&Outer {
        A: "x".to_string(),
        B: Inner { C: 7, D: true },
        E: 1.5,
    });
    assert_eq!(names(&flat), vec!["A", "B.C", "B.D", "E"]);
    assert_eq!(
        flat.iter().map(|f| f.value.clone()).collect::<Vec<_>>(),
        vec![json!("x"), json!(7), json!(true), json!(1.5)],
    );
    assert_eq!(flat[1].label, "C");
}

#[test]
fn test_nested_with_values() {
    #[derive(FormFields)]
    struct Person {
        pub Name: String,
        pub Address: Address,
    }
    assert_eq!(
        fields(&Person {
            Name: "Michael Scott".to_string(),
            Address: Address {
                Street1: "123 Test St".to_string(),
            },
        }),
        vec![
            field("Name", "Name", json!("Michael Scott")),
            field("Address.Street1", "Street 1", json!("123 Test St")),
        ],
    );
}

#[test]
fn test_nested_with_tags() {
    #[derive(FormFields)]
    struct Person {
        #[form = "label=Full Name;id=name"]
        pub Name: String,
        #[form = "type=password;footer=Something super secret!"]
        pub Password: String,
        pub Address: AddressWithTags,
    }
    let flat = fields(&Person {
        Name: "Michael Scott".to_string(),
        Password: String::new(),
        Address: AddressWithTags {
            Street1: "123 Test St".to_string(),
        },
    });
    assert_eq!(
        flat,
        vec![
            Field {
                id: "name".to_string(),
                ..field("Name", "Full Name", json!("Michael Scott"))
            },
            Field {
                input_type: "password".to_string(),
                footer: "Something super secret!".to_string(),
                ..field("Password", "Password", json!(""))
            },
            field("street", "Street 1", json!("123 Test St")),
        ],
    );
}

#[test]
fn test_nil_nested_same_shape() {
    #[derive(FormFields)]
    struct Person {
        pub Name: String,
        pub Address: Option<Box<Address>>,
    }
    let nil = fields(&Person {
        Name: "Michael Scott".to_string(),
        Address: None,
    });
    let zero = fields(&Person {
        Name: "Michael Scott".to_string(),
        Address: Some(Box::new(Address::default())),
    });
    assert_eq!(nil, zero);
    assert_eq!(
        nil,
        vec![
            field("Name", "Name", json!("Michael Scott")),
            field("Address.Street1", "Street 1", json!("")),
        ],
    );
}

#[test]
fn test_deep_nil_nested() {
    #[derive(Default, FormFields)]
    struct Middle {
        pub Home: Option<Address>,
        pub Zip: Option<u32>,
    }
    #[derive(FormFields)]
    struct Top {
        pub Middle: Option<Middle>,
    }
    let flat = fields(&Top { Middle: None });
    assert_eq!(names(&flat), vec!["Middle.Home.Street1", "Middle.Zip"]);
    assert_eq!(flat[1].value, json!(0));
}

#[test]
fn test_custom_class_and_attrs() {
    #[derive(FormFields)]
    struct Styled {
        #[form = "class=custom-css-class;maxlength=40;data-tip=a \"b\""]
        pub Name: String,
    }
    let flat = fields(&Styled {
        Name: "Michael Scott".to_string(),
    });
    assert_eq!(flat[0].class, "custom-css-class");
    assert_eq!(flat[0].attrs, r#"maxlength="40" data-tip="a &quot;b&quot;""#);
}

#[test]
fn test_snake_case_and_raw_identifiers() {
    #[derive(FormFields)]
    struct Rusty {
        pub first_name: String,
        pub r#type: String,
    }
    let flat = fields(&Rusty {
        first_name: String::new(),
        r#type: String::new(),
    });
    assert_eq!(names(&flat), vec!["first_name", "type"]);
    assert_eq!(flat[0].label, "first_name");
}

#[test]
fn test_generic_record() {
    #[derive(FormFields)]
    struct Wrapper<T: ::formfields::FieldValue> {
        pub Inner: T,
        pub Note: String,
    }
    let flat = fields(&Wrapper {
        Inner: Address {
            Street1: "Main".to_string(),
        },
        Note: String::new(),
    });
    assert_eq!(names(&flat), vec!["Inner.Street1", "Note"]);
}

#[test]
fn test_label_placeholder_precedence() {
    #[derive(FormFields)]
    struct Precedence {
        #[form = "label=Full Name"]
        pub A: String,
        #[form = "label=Full Name;placeholder=Enter name"]
        pub B: String,
        #[form = "placeholder=Enter name;label=Full Name;name=full"]
        pub C: String,
    }
    let flat = fields(&Precedence {
        A: String::new(),
        B: String::new(),
        C: String::new(),
    });
    assert_eq!(flat[0].placeholder, "Full Name");
    assert_eq!(flat[1].placeholder, "Enter name");
    assert_eq!(flat[2].placeholder, "Enter name");
    assert_eq!(flat[2].label, "Full Name");
    assert_eq!(flat[2].name, "full");
}

#[test]
fn test_fresh_per_call() {
    let value = Address {
        Street1: "x".to_string(),
    };
    let mut first = fields(&value);
    first[0].label = "changed".to_string();
    assert_eq!(fields(&value)[0].label, "Street 1");
}
