//! Diesel row models for greetings.

use super::schema::messages;
use crate::greeting::domain::{Greeting, GreetingId};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for greetings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GreetingRow {
    /// Store-assigned identifier.
    pub id: i32,
    /// Greeting text.
    pub text: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<GreetingRow> for Greeting {
    fn from(row: GreetingRow) -> Self {
        Self::new(GreetingId::new(row.id), row.text, row.created_at)
    }
}
