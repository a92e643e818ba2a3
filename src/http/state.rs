//! Shared handler state.

use crate::config::Environment;
use crate::contact::{ports::ContactRepository, services::ContactService};
use crate::greeting::{ports::GreetingRepository, services::GreetingService};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    contacts: ContactService<dyn ContactRepository>,
    greetings: GreetingService<dyn GreetingRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    environment: Environment,
}

impl AppState {
    /// Assembles handler state from its services.
    #[must_use]
    pub const fn new(
        contacts: ContactService<dyn ContactRepository>,
        greetings: GreetingService<dyn GreetingRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        environment: Environment,
    ) -> Self {
        Self {
            contacts,
            greetings,
            clock,
            environment,
        }
    }

    pub(crate) const fn contacts(&self) -> &ContactService<dyn ContactRepository> {
        &self.contacts
    }

    pub(crate) const fn greetings(&self) -> &GreetingService<dyn GreetingRepository> {
        &self.greetings
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    pub(crate) const fn environment(&self) -> &Environment {
        &self.environment
    }
}
