//! Repository trait for course storage.

use crate::domain::entities::{Course, CourseFilter, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the course store.
///
/// The store is an ordered sequence: [`list`](CourseRepository::list) returns
/// courses in insertion order. Every method is a single atomic operation on
/// the underlying sequence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCourseRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists courses matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError>;

    /// Finds a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Assigns a fresh id and appends the course to the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Replaces the title of the course with the given id.
    ///
    /// Returns `None` when no course has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn update_title(&self, id: i64, title: String) -> Result<Option<Course>, AppError>;

    /// Removes the course with the given id.
    ///
    /// Returns `false` when no course has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Removes every course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn clear(&self) -> Result<(), AppError>;

    /// Returns the number of stored courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn count(&self) -> Result<usize, AppError>;
}
