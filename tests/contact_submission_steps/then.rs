//! Then steps for contact submission BDD scenarios.

use super::world::{ContactWorld, run_async};
use chrono::{Duration, Utc};
use eyre::WrapErr;
use portfolio::contact::{
    domain::{ContactDomainError, ContactSubmission},
    services::ContactServiceError,
};
use rstest_bdd_macros::then;

fn last_result(
    world: &ContactWorld,
) -> Result<&Result<ContactSubmission, ContactServiceError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no submission was made in this scenario"))
}

#[then("the submission is accepted")]
fn submission_accepted(world: &ContactWorld) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected acceptance, got {err}")),
    }
}

#[then("the submission is rejected for missing fields")]
fn submission_rejected(world: &ContactWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(ContactServiceError::Validation(
            ContactDomainError::MissingFields(_)
        ))
    ) {
        return Err(eyre::eyre!("expected a missing-fields error, got {result:?}"));
    }
    Ok(())
}

#[then("the submission count is {count:u64}")]
fn store_holds(world: &ContactWorld, count: u64) -> Result<(), eyre::Report> {
    let stored = u64::try_from(world.repository.len().wrap_err("read store")?).wrap_err("store size")?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored submissions, found {stored}"));
    }
    Ok(())
}

#[then("the stored submission has a server-set timestamp")]
fn stored_submission_timestamped(world: &ContactWorld) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list_submissions()).wrap_err("list submissions")?;
    let submission = listed
        .first()
        .ok_or_else(|| eyre::eyre!("store is empty"))?;

    let age = Utc::now() - submission.created_at();
    if age < Duration::zero() || age > Duration::minutes(1) {
        return Err(eyre::eyre!(
            "timestamp {} is not close to now",
            submission.created_at()
        ));
    }
    Ok(())
}

#[then(r#"the first listed submission is from "{name}""#)]
fn first_listed_is_from(world: &ContactWorld, name: String) -> Result<(), eyre::Report> {
    let first = world
        .listed
        .as_ref()
        .and_then(|listed| listed.first())
        .ok_or_else(|| eyre::eyre!("no submissions were listed"))?;
    if first.name() != name {
        return Err(eyre::eyre!("expected {name} first, found {}", first.name()));
    }
    Ok(())
}

#[then("the listing is ordered newest first")]
fn listing_newest_first(world: &ContactWorld) -> Result<(), eyre::Report> {
    let listed = world
        .listed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no submissions were listed"))?;
    let ordered = listed.windows(2).all(|pair| match pair {
        [newer, older] => (newer.created_at(), newer.id()) >= (older.created_at(), older.id()),
        _ => true,
    });
    if !ordered {
        return Err(eyre::eyre!("listing is not newest first: {listed:?}"));
    }
    Ok(())
}
