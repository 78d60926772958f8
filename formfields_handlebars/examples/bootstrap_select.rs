//! Render a form with the built-in Bootstrap template, including a select
//! field with registered options.  A `templates/form_input.hbs` in the
//! working directory replaces the built-in template.

use ::formfields::{Form, FormFields};
use ::formfields_handlebars::HbInputTemplate;

#[allow(non_snake_case)]
#[derive(FormFields)]
struct Customer {
    #[form = "label=Full Name;placeholder=Michael Scott;id=name"]
    pub Name: String,
    #[form = "type=email;id=email;footer=We will <b>never</b> share it"]
    pub Email: String,
    #[form = "type=select;id=state;placeholder=Select a state"]
    pub State: String,
    #[form = "type=textarea;maxlength=500"]
    pub Notes: String,
    #[form = "type=hidden"]
    pub Csrf: String,
    #[form = "-"]
    pub Internal: u64,
}

fn main() {
    env_logger::init();
    let mut form = Form::new(HbInputTemplate::default());
    form.select(
        "State",
        &[("California", "CA"), ("Nevada", "NV"), ("Texas", "TX")],
    );
    let customer = Customer {
        Name: String::new(),
        Email: "michael@dunder.com".to_string(),
        State: "NV".to_string(),
        Notes: String::new(),
        Csrf: "abc123".to_string(),
        Internal: 42,
    };
    match form.render(&customer, &[]) {
        Ok(html) => println!("{}", html),
        Err(e) => eprintln!("{}", e),
    }
    form.skip("Csrf");
    for field in form.inputs(&customer) {
        println!(
            "{:<10} {:<8} value={} selected={}",
            field.name, field.input_type, field.value, field.select_value,
        );
    }
}
