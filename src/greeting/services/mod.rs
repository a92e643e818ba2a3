//! Application services for the landing-page greeting.

mod greeting;

pub use greeting::{GreetingService, SeedOutcome};
