//! Serializable shapes of the portfolio documents.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A static document paired with the time it was served.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamped<T: 'static> {
    #[serde(flatten)]
    content: &'static T,
    last_updated: DateTime<Utc>,
}

impl<T: 'static> Stamped<T> {
    /// Pairs `content` with `last_updated`.
    #[must_use]
    pub const fn new(content: &'static T, last_updated: DateTime<Utc>) -> Self {
        Self {
            content,
            last_updated,
        }
    }

    /// Returns the wrapped document.
    #[must_use]
    pub const fn content(&self) -> &'static T {
        self.content
    }

    /// Returns the serving timestamp.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

/// Where the owner is based.
#[derive(Debug, Serialize)]
pub struct Location {
    /// City name.
    pub city: &'static str,
    /// Country name.
    pub country: &'static str,
    /// UTC offset label.
    pub timezone: &'static str,
}

/// Current availability for new work.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Short status line.
    pub status: &'static str,
    /// Working hours with timezone.
    pub working_hours: &'static str,
    /// Expected reply delay.
    pub response_time: &'static str,
}

/// Contact card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Email address.
    pub email: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// Location details.
    pub location: Location,
    /// Availability details.
    pub availability: Availability,
    /// Preferred channel.
    pub preferred_contact: &'static str,
    /// Spoken languages.
    pub languages: &'static [&'static str],
}

/// Social profile links.
#[derive(Debug, Serialize)]
pub struct SocialLinks {
    /// GitHub profile.
    pub github: &'static str,
    /// `LinkedIn` profile.
    pub linkedin: &'static str,
    /// Personal website.
    pub website: &'static str,
}

/// Headline numbers shown on the profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Delivered projects.
    pub projects_completed: u32,
    /// Years of professional experience.
    pub years_experience: u32,
    /// Distinct technologies used.
    pub technologies_used: u32,
    /// Satisfied clients.
    pub clients_satisfied: u32,
}

/// Owner profile.
#[derive(Debug, Serialize)]
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// Job title.
    pub title: &'static str,
    /// Email address.
    pub email: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// City and country.
    pub location: &'static str,
    /// Short biography.
    pub bio: &'static str,
    /// Avatar image URL.
    pub avatar: &'static str,
    /// Social links.
    pub social: SocialLinks,
    /// Headline numbers.
    pub stats: ProfileStats,
}

/// A skill with a self-assessed level from 0 to 100.
#[derive(Debug, Serialize)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    /// Emoji icon.
    pub icon: &'static str,
    /// Grouping label.
    pub category: &'static str,
}

/// Portfolio project.
#[derive(Debug, Serialize)]
pub struct Project {
    /// Project identifier.
    pub id: u32,
    /// Project title.
    pub title: &'static str,
    /// Project summary.
    pub description: &'static str,
    /// Technologies used.
    pub tech: &'static [&'static str],
    /// Delivery status.
    pub status: &'static str,
    /// Repository URL.
    pub github: &'static str,
    /// Live demo URL, when one exists.
    pub demo: Option<&'static str>,
    /// Cover image URL.
    pub image: &'static str,
}

/// Employment history entry.
#[derive(Debug, Serialize)]
pub struct Experience {
    /// Entry identifier.
    pub id: u32,
    /// Job title.
    pub title: &'static str,
    /// Employer.
    pub company: &'static str,
    /// Date range label.
    pub period: &'static str,
    /// Work location.
    pub location: &'static str,
    /// Role summary.
    pub description: &'static str,
    /// Notable results.
    pub achievements: &'static [&'static str],
}

/// Blog post as shown in the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    /// Post identifier.
    pub id: u32,
    /// Post title.
    pub title: &'static str,
    /// One-line teaser.
    pub excerpt: &'static str,
    /// Opening paragraph.
    pub content: &'static str,
    /// Author name.
    pub author: &'static str,
    /// Publication date, `YYYY-MM-DD`.
    pub published_date: &'static str,
    /// Topic tags.
    pub tags: &'static [&'static str],
    /// Reading time label.
    pub read_time: &'static str,
    /// Whether the post is highlighted.
    pub featured: bool,
}

/// Full blog post with Markdown content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Post identifier.
    pub id: u32,
    /// Post title.
    pub title: &'static str,
    /// Markdown body.
    pub content: &'static str,
    /// Author name.
    pub author: &'static str,
    /// Publication date, `YYYY-MM-DD`.
    pub published_date: &'static str,
    /// Topic tags.
    pub tags: &'static [&'static str],
    /// Reading time label.
    pub read_time: &'static str,
}

/// Client testimonial.
#[derive(Debug, Serialize)]
pub struct Testimonial {
    /// Testimonial identifier.
    pub id: u32,
    /// Author name.
    pub name: &'static str,
    /// Author role.
    pub position: &'static str,
    /// Author employer.
    pub company: &'static str,
    /// Quoted text.
    pub message: &'static str,
    /// Rating out of five.
    pub rating: u8,
    /// Avatar image URL.
    pub avatar: &'static str,
    /// Date given, `YYYY-MM-DD`.
    pub date: &'static str,
}
