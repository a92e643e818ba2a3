//! Domain model for the landing-page greeting.

mod greeting;

pub use greeting::{CurrentGreeting, DEFAULT_GREETING, Greeting, GreetingId};
