//! API route configuration.

use crate::api::handlers::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    reset_data_handler, update_course_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Course CRUD routes.
///
/// # Endpoints
///
/// - `GET    /courses`        - List courses (optional `?title=` substring filter)
/// - `POST   /courses`        - Create a course
/// - `GET    /courses/{id}`   - Fetch a course
/// - `PUT    /courses/{id}`   - Replace a course title
/// - `DELETE /courses/{id}`   - Delete a course
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
}

/// Routes used by end-to-end test harnesses.
///
/// # Endpoints
///
/// - `DELETE /__test__/data` - Clear the course store
pub fn test_routes() -> Router<AppState> {
    Router::new().route("/__test__/data", delete(reset_data_handler))
}
