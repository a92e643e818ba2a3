//! When steps for greeting bootstrap BDD scenarios.

use super::world::{GreetingWorld, run_async};
use portfolio::bootstrap;
use rstest_bdd_macros::when;

#[when("the service bootstraps")]
fn service_bootstraps(world: &mut GreetingWorld) {
    let report = run_async(bootstrap::run(world.schema.as_ref(), &world.service));
    world.reports.push(report);
}
