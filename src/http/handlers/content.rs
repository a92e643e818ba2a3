//! Read-only portfolio content.

use crate::http::{ApiError, AppState};
use crate::profile::{
    BLOG_SUMMARIES, BlogPost, BlogPostSummary, ContactInfo, EXPERIENCE, Experience,
    PROJECTS, Profile, Project, SKILLS, Skill, Stamped, TESTIMONIALS, Testimonial,
};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

/// `GET /api/contact-info`
pub async fn contact_info(State(state): State<AppState>) -> Json<Stamped<ContactInfo>> {
    Json(crate::profile::contact_info(state.now()))
}

/// `GET /api/profile`
pub async fn profile(State(state): State<AppState>) -> Json<Stamped<Profile>> {
    Json(crate::profile::profile(state.now()))
}

/// `GET /api/skills`
pub async fn skills() -> Json<&'static [Skill]> {
    Json(SKILLS.as_slice())
}

/// `GET /api/projects`
pub async fn projects() -> Json<&'static [Project]> {
    Json(PROJECTS.as_slice())
}

/// `GET /api/experience`
pub async fn experience() -> Json<&'static [Experience]> {
    Json(EXPERIENCE.as_slice())
}

/// `GET /api/blog`
pub async fn blog_posts() -> Json<&'static [BlogPostSummary]> {
    Json(BLOG_SUMMARIES.as_slice())
}

/// `GET /api/blog/:id`
pub async fn blog_post(Path(id): Path<String>) -> Result<Json<&'static BlogPost>, ApiError> {
    crate::profile::blog_post(&id).map(Json).ok_or_else(|| {
        debug!(id = %id, "blog post not found");
        ApiError::BlogPostNotFound
    })
}

/// `GET /api/testimonials`
pub async fn testimonials() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS.as_slice())
}
