//! Given steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use eyre::WrapErr;
use portfolio::contact::domain::ContactForm;
use rstest_bdd_macros::given;

#[given("an empty contact store")]
fn empty_contact_store(world: &mut ContactWorld) -> Result<(), eyre::Report> {
    if !world.repository.is_empty().wrap_err("read store")? {
        return Err(eyre::eyre!("expected a fresh store in the scenario world"));
    }
    Ok(())
}

#[given(r#"a submission from "{name}" has been accepted"#)]
fn submission_accepted(world: &mut ContactWorld, name: String) -> Result<(), eyre::Report> {
    let email = format!("{}@example.com", name.to_lowercase());
    run_async(
        world
            .service
            .submit(ContactForm::new(name, email, "Hello")),
    )
    .wrap_err("seed submission for scenario")?;
    Ok(())
}
