//! When steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use eyre::WrapErr;
use portfolio::contact::domain::ContactForm;
use rstest_bdd_macros::when;

fn submit(world: &mut ContactWorld, form: ContactForm) {
    let result = run_async(world.service.submit(form));
    world.last_result = Some(result);
}

#[when(r#"a visitor submits name "{name}", email "{email}" and message "{message}""#)]
fn visitor_submits(world: &mut ContactWorld, name: String, email: String, message: String) {
    submit(world, ContactForm::new(name, email, message));
}

#[when(r#"a visitor submits an empty name with email "{email}" and message "{message}""#)]
fn visitor_submits_empty_name(world: &mut ContactWorld, email: String, message: String) {
    submit(world, ContactForm::new("", email, message));
}

#[when(r#"a visitor submits name "{name}" and email "{email}" without a message"#)]
fn visitor_submits_without_message(world: &mut ContactWorld, name: String, email: String) {
    let form = ContactForm {
        name: Some(name),
        email: Some(email),
        message: None,
    };
    submit(world, form);
}

#[when("the submissions are listed")]
fn submissions_listed(world: &mut ContactWorld) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list_submissions()).wrap_err("list submissions")?;
    world.listed = Some(listed);
    Ok(())
}
