//! Contact submission storage against a real server.

use super::helpers::{
    BoxError, TestDatabase, boxed, migrated_database, test_runtime, unreachable_pool,
};
use chrono::{Duration, Utc};
use portfolio::contact::{
    adapters::postgres::PostgresContactRepository,
    domain::{ContactSubmission, NewContactSubmission},
    ports::{ContactRepository, ContactRepositoryError},
};
use rstest::rstest;

fn submission(name: &str) -> Result<NewContactSubmission, BoxError> {
    NewContactSubmission::new(name, format!("{name}@example.com"), "Hello").map_err(boxed)
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn append_assigns_id_and_timestamp(
    migrated_database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let database = migrated_database?;
    let repository = PostgresContactRepository::new(database.pool.clone());
    let runtime = test_runtime()?;
    let before = Utc::now();

    let stored = runtime
        .block_on(repository.append(&submission("Ann")?))
        .map_err(boxed)?;

    assert!(stored.id().value() > 0);
    assert_eq!(stored.name(), "Ann");
    assert_eq!(stored.email(), "Ann@example.com");
    assert_eq!(stored.message(), "Hello");
    assert!(stored.created_at() >= before - Duration::seconds(5));
    assert!(stored.created_at() <= Utc::now() + Duration::seconds(5));
    assert_eq!(database.count_rows("contact_submissions")?, 1);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn listing_is_newest_first(
    migrated_database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let database = migrated_database?;
    let repository = PostgresContactRepository::new(database.pool.clone());
    let runtime = test_runtime()?;

    for name in ["first", "second", "third"] {
        runtime
            .block_on(repository.append(&submission(name)?))
            .map_err(boxed)?;
    }
    let listed = runtime
        .block_on(repository.list_newest_first())
        .map_err(boxed)?;

    let names: Vec<&str> = listed.iter().map(ContactSubmission::name).collect();
    assert_eq!(names, ["third", "second", "first"]);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn empty_table_lists_nothing(
    migrated_database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let database = migrated_database?;
    let repository = PostgresContactRepository::new(database.pool.clone());

    let listed = test_runtime()?
        .block_on(repository.list_newest_first())
        .map_err(boxed)?;

    assert!(listed.is_empty());
    Ok(())
}

#[test]
fn unreachable_store_reports_unavailable() -> Result<(), BoxError> {
    let repository = PostgresContactRepository::new(unreachable_pool()?);

    let result = test_runtime()?.block_on(repository.append(&submission("Ann")?));

    assert!(matches!(result, Err(ContactRepositoryError::Unavailable(_))));
    Ok(())
}
