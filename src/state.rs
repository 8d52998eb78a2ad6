//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CourseService;
use crate::infrastructure::persistence::InMemoryCourseRepository;

/// State cloned into every request handler.
///
/// Holds the one course service (and through it the one store) of the
/// process. Tests build their own instance to get an isolated store.
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService<InMemoryCourseRepository>>,
}

impl AppState {
    pub fn new(course_service: Arc<CourseService<InMemoryCourseRepository>>) -> Self {
        Self { course_service }
    }
}
