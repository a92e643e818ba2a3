//! Schema creation, seeding and degraded startup against a real server.

use super::helpers::{
    BoxError, TestDatabase, boxed, empty_database, migrated_database, test_runtime,
    unreachable_pool,
};
use portfolio::bootstrap::{self, SchemaManager, SeedStatus};
use portfolio::greeting::{
    adapters::postgres::PostgresGreetingRepository, domain::DEFAULT_GREETING,
    services::GreetingService,
};
use portfolio::store::PostgresSchema;
use rstest::rstest;
use std::sync::Arc;

fn greeting_service(database: &TestDatabase) -> GreetingService<PostgresGreetingRepository> {
    GreetingService::new(Arc::new(PostgresGreetingRepository::new(
        database.pool.clone(),
    )))
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn ensure_schema_twice_equals_once(
    empty_database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    let database = empty_database?;
    let schema = PostgresSchema::new(database.pool.clone());
    let runtime = test_runtime()?;

    runtime.block_on(schema.ensure_schema()).map_err(boxed)?;
    runtime.block_on(schema.ensure_schema()).map_err(boxed)?;

    assert_eq!(database.count_rows("messages")?, 0);
    assert_eq!(database.count_rows("contact_submissions")?, 0);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn bootstrap_seeds_once(empty_database: Result<TestDatabase, BoxError>) -> Result<(), BoxError> {
    let database = empty_database?;
    let schema = PostgresSchema::new(database.pool.clone());
    let greetings = greeting_service(&database);
    let runtime = test_runtime()?;

    let first = runtime.block_on(bootstrap::run(&schema, &greetings));
    let second = runtime.block_on(bootstrap::run(&schema, &greetings));

    assert_eq!(first.seed, SeedStatus::Seeded);
    assert_eq!(second.seed, SeedStatus::AlreadyPresent);
    assert_eq!(database.count_rows("messages")?, 1);

    let current = runtime.block_on(greetings.current());
    assert!(!current.is_fallback());
    assert_eq!(current.text(), DEFAULT_GREETING);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL cluster"]
fn existing_rows_survive_a_rerun(
    migrated_database: Result<TestDatabase, BoxError>,
) -> Result<(), BoxError> {
    use diesel::connection::SimpleConnection;

    let database = migrated_database?;
    database
        .connect()?
        .batch_execute(
            "INSERT INTO contact_submissions (name, email, message) VALUES ('Ann', 'ann@x.com', 'Hi')",
        )
        .map_err(boxed)?;
    let schema = PostgresSchema::new(database.pool.clone());

    test_runtime()?
        .block_on(schema.ensure_schema())
        .map_err(boxed)?;

    assert_eq!(database.count_rows("contact_submissions")?, 1);
    Ok(())
}

#[test]
fn unreachable_store_leaves_service_degraded() -> Result<(), BoxError> {
    let pool = unreachable_pool()?;
    let schema = PostgresSchema::new(pool.clone());
    let greetings = GreetingService::new(Arc::new(PostgresGreetingRepository::new(pool)));
    let runtime = test_runtime()?;

    let report = runtime.block_on(bootstrap::run(&schema, &greetings));
    let current = runtime.block_on(greetings.current());

    assert!(!report.schema_ready);
    assert_eq!(report.seed, SeedStatus::Skipped);
    assert!(current.is_fallback());
    Ok(())
}
