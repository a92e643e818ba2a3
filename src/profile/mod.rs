//! Fixed portfolio content served by the read-only endpoints.
//!
//! Everything here is compiled into the binary and never touches the store.
//! Documents that carry a `lastUpdated` stamp are wrapped in [`Stamped`] at
//! request time so the timestamp comes from the caller's clock.

mod content;
mod model;

pub use content::{
    BLOG_POSTS, BLOG_SUMMARIES, CONTACT_INFO, EXPERIENCE, PROFILE, PROJECTS, SKILLS,
    TESTIMONIALS,
};
pub use model::{
    Availability, BlogPost, BlogPostSummary, ContactInfo, Experience, Location, Profile,
    ProfileStats, Project, Skill, SocialLinks, Stamped, Testimonial,
};

use chrono::{DateTime, Utc};

/// Returns the contact card stamped with `now`.
#[must_use]
pub fn contact_info(now: DateTime<Utc>) -> Stamped<ContactInfo> {
    Stamped::new(&CONTACT_INFO, now)
}

/// Returns the profile stamped with `now`.
#[must_use]
pub fn profile(now: DateTime<Utc>) -> Stamped<Profile> {
    Stamped::new(&PROFILE, now)
}

/// Looks up a full blog post by its path segment.
///
/// Segments that are not a plain non-negative integer never match.
#[must_use]
pub fn blog_post(id: &str) -> Option<&'static BlogPost> {
    let id = id.parse::<u32>().ok()?;
    BLOG_POSTS.iter().find(|post| post.id == id)
}
