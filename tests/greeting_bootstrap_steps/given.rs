//! Given steps for greeting bootstrap BDD scenarios.

use super::world::{GreetingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty greeting store")]
fn empty_greeting_store(world: &mut GreetingWorld) -> Result<(), eyre::Report> {
    let count = run_async(world.repository.count()).wrap_err("count greetings")?;
    if count != 0 {
        return Err(eyre::eyre!("expected an empty store, found {count} greetings"));
    }
    Ok(())
}

#[given(r#"a stored greeting "{text}""#)]
fn stored_greeting(world: &mut GreetingWorld, text: String) -> Result<(), eyre::Report> {
    run_async(world.repository.insert(&text)).wrap_err("insert greeting")?;
    Ok(())
}

#[given("an unreachable greeting store")]
fn unreachable_greeting_store(world: &mut GreetingWorld) {
    *world = GreetingWorld::unreachable();
}
