//! Handlers for course endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::course::{CourseInputRequest, CourseItem, ListCoursesQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists courses in creation order.
///
/// # Endpoint
///
/// `GET /courses?title={substring}`
///
/// When `title` is present only courses whose title contains it
/// (case-sensitive) are returned.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<Vec<CourseItem>>, AppError> {
    let courses = state.course_service.list_courses(query.title).await?;

    Ok(Json(courses.into_iter().map(CourseItem::from).collect()))
}

/// Returns a single course.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn get_course_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CourseItem>, AppError> {
    let course = state.course_service.get_course(id).await?;

    Ok(Json(course.into()))
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Request Body
///
/// ```json
/// { "title": "Rust basics" }
/// ```
///
/// # Errors
///
/// Returns 400 if `title` is missing or empty, including when the body is
/// absent or not sent as JSON.
pub async fn create_course_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CourseItem>), AppError> {
    let payload = CourseInputRequest::from_body(&headers, &body)?;
    payload.validate()?;

    let course = state.course_service.create_course(payload.title).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Replaces the title of a course and returns the updated record.
///
/// # Endpoint
///
/// `PUT /courses/{id}`
///
/// # Errors
///
/// Returns 400 if `title` is missing or empty (checked first), including
/// when the body is absent or not sent as JSON.
/// Returns 404 if the course does not exist.
pub async fn update_course_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CourseItem>, AppError> {
    let payload = CourseInputRequest::from_body(&headers, &body)?;
    payload.validate()?;

    let course = state
        .course_service
        .update_course(id, payload.title)
        .await?;

    Ok(Json(course.into()))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist, including when it was
/// already deleted.
pub async fn delete_course_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
