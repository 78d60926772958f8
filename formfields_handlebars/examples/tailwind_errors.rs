//! Render a nested form with a Tailwind styled input template and field
//! errors.  Run with `RUST_LOG=debug` to see what the walker does.

use ::formfields::{FieldError, Form, FormFields};
use ::formfields_handlebars::HbInputTemplate;
use std::error::Error as StdError;

const INPUT_TEMPL: &str = concat!(
    "\n<div class=\"mb-4\">\n",
    "  <label class=\"block text-grey-darker text-sm font-bold mb-2\"",
    "{{#if id}} for=\"{{id}}\"{{/if}}>\n",
    "    {{label}}\n",
    "  </label>\n",
    "  <input class=\"shadow appearance-none border rounded w-full",
    " py-2 px-3{{#if errors}} border-red{{/if}}\"",
    "{{#if id}} id=\"{{id}}\"{{/if}} type=\"{{type}}\"",
    " name=\"{{name}}\" placeholder=\"{{placeholder}}\"",
    "{{#if value}} value=\"{{value}}\"{{/if}}>\n",
    "  {{#each errors}}\n",
    "  <p class=\"text-red pt-2 text-xs italic\">{{this}}</p>\n",
    "  {{/each}}\n",
    "  {{#if footer}}\n",
    "  <p class=\"text-grey pt-2 text-xs italic\">{{{footer}}}</p>\n",
    "  {{/if}}\n",
    "</div>",
);

#[allow(non_snake_case)]
#[derive(Default, FormFields)]
struct Address {
    pub Street1: String,
    pub Street2: String,
    pub City: String,
    pub State: String,
    #[form = "label=Postal Code"]
    pub Zip: String,
}

#[allow(non_snake_case)]
#[derive(FormFields)]
struct NestedForm {
    pub Name: String,
    #[form = "type=email"]
    pub Email: String,
    pub Address: Option<Address>,
}

fn main() {
    env_logger::init();
    let form = Form::new(
        HbInputTemplate::from_template_str(INPUT_TEMPL)
            .expect("the tailwind template should parse"),
    );
    let errors = [
        FieldError::new("Email", "is already taken"),
        FieldError::new("Address.Street1", "is required"),
        FieldError::new("Address.City", "is required"),
        FieldError::new("Address.State", "must be a US state"),
        FieldError::new("Address.Zip", "must be 5 digits"),
        FieldError::new("Address.Zip", "is required"),
    ];
    let error_refs: Vec<&(dyn StdError + 'static)> = errors
        .iter()
        .map(|e| e as &(dyn StdError + 'static))
        .collect();
    match form.render(
        &NestedForm {
            Name: "Michael Scott".to_string(),
            Email: "michael@dunder.com".to_string(),
            Address: None,
        },
        &error_refs,
    ) {
        Ok(html) => println!(
            "<form action=\"/\" method=\"post\">{}\n</form>",
            html,
        ),
        Err(e) => eprintln!("{}", e),
    }
}
