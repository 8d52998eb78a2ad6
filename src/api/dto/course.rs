//! DTOs for course endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::rejection::JsonRejection,
    http::{HeaderMap, header},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Course;

/// Externally visible shape of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub id: i64,
    pub title: String,
}

impl From<Course> for CourseItem {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
        }
    }
}

/// Request body for `POST /courses` and `PUT /courses/{id}`.
///
/// `title` is optional at the JSON level so a missing field is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CourseInputRequest {
    #[serde(default)]
    #[validate(required(message = "No title"), length(min = 1, message = "No title"))]
    pub title: Option<String>,
}

impl CourseInputRequest {
    /// Parses a raw request body.
    ///
    /// An empty body, or one not declared as JSON, carries no fields and
    /// yields an empty request, which then fails validation as a missing
    /// title. A declared JSON body that cannot be decoded is rejected.
    pub fn from_body(headers: &HeaderMap, body: &Bytes) -> Result<Self, JsonRejection> {
        if body.is_empty() || !is_json_content_type(headers) {
            return Ok(Self::default());
        }

        Json::<Self>::from_bytes(body).map(|Json(request)| request)
    }
}

/// Matches `application/json` and `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Query parameters for `GET /courses`.
#[derive(Debug, Default, Deserialize)]
pub struct ListCoursesQuery {
    /// Case-sensitive substring the title must contain.
    pub title: Option<String>,
}
