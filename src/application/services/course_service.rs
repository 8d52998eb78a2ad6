//! Course catalogue service.

use crate::domain::entities::{Course, CourseFilter, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Service implementing the course CRUD operations.
///
/// Validates input before touching the store, so rejected requests never
/// mutate it, and turns missing records into [`AppError::NotFound`].
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists courses, optionally restricted to titles containing `title`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    pub async fn list_courses(&self, title: Option<String>) -> Result<Vec<Course>, AppError> {
        let filter = CourseFilter {
            title: title.filter(|t| !t.is_empty()),
        };

        self.repository.list(&filter).await
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    pub async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    /// Creates a course and appends it to the end of the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is missing or empty.
    pub async fn create_course(&self, title: Option<String>) -> Result<Course, AppError> {
        let title = validate_title(title)?;

        let course = self.repository.create(NewCourse { title }).await?;
        info!(course_id = course.id, title = %course.title, "Course created");

        Ok(course)
    }

    /// Replaces the title of an existing course.
    ///
    /// The title is checked before the course is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is missing or empty.
    /// Returns [`AppError::NotFound`] if no course has this id.
    pub async fn update_course(&self, id: i64, title: Option<String>) -> Result<Course, AppError> {
        let title = validate_title(title)?;

        let course = self
            .repository
            .update_title(id, title)
            .await?
            .ok_or_else(|| course_not_found(id))?;
        info!(course_id = course.id, title = %course.title, "Course updated");

        Ok(course)
    }

    /// Removes a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(course_not_found(id));
        }

        info!(course_id = id, "Course deleted");
        Ok(())
    }

    /// Removes every course. Used by end-to-end test harnesses.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.repository.clear().await?;
        info!("Course store reset");
        Ok(())
    }

    /// Returns the number of stored courses.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Loads the given titles into the store, in order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any title is empty; titles before
    /// it are kept.
    pub async fn seed<I, S>(&self, titles: I) -> Result<Vec<Course>, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut created = Vec::new();
        for title in titles {
            let title = validate_title(Some(title.into()))?;
            created.push(self.repository.create(NewCourse { title }).await?);
        }

        info!(count = created.len(), "Course store seeded");
        Ok(created)
    }
}

fn validate_title(title: Option<String>) -> Result<String, AppError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        Some(_) => Err(AppError::bad_request(
            "No title",
            json!({"field": "title", "reason": "must not be empty"}),
        )),
        None => Err(AppError::bad_request(
            "No title",
            json!({"field": "title", "reason": "is required"}),
        )),
    }
}

fn course_not_found(id: i64) -> AppError {
    AppError::not_found("Course not found", json!({"id": id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCourseRepository;
    use mockall::predicate::eq;

    fn course(id: i64, title: &str) -> Course {
        Course::new(id, title.to_string())
    }

    #[tokio::test]
    async fn test_list_courses_without_filter() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_list()
            .withf(|filter| filter.title.is_none())
            .times(1)
            .returning(|_| Ok(vec![course(1, "front"), course(2, "back")]));

        let service = CourseService::new(Arc::new(mock_repo));

        let courses = service.list_courses(None).await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "front");
    }

    #[tokio::test]
    async fn test_list_courses_passes_title_filter() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_list()
            .withf(|filter| filter.title.as_deref() == Some("ful"))
            .times(1)
            .returning(|_| Ok(vec![course(3, "full")]));

        let service = CourseService::new(Arc::new(mock_repo));

        let courses = service.list_courses(Some("ful".to_string())).await.unwrap();

        assert_eq!(courses, vec![course(3, "full")]);
    }

    #[tokio::test]
    async fn test_list_courses_empty_filter_is_ignored() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_list()
            .withf(|filter| filter.title.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CourseService::new(Arc::new(mock_repo));

        assert!(service.list_courses(Some(String::new())).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_course_success() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(Some(course(2, "back"))));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.get_course(2).await;

        assert_eq!(result.unwrap(), course(2, "back"));
    }

    #[tokio::test]
    async fn test_get_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.get_course(99999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_course_success() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_course| new_course.title == "Hello")
            .times(1)
            .returning(|new_course| Ok(Course::new(10, new_course.title)));

        let service = CourseService::new(Arc::new(mock_repo));

        let created = service.create_course(Some("Hello".to_string())).await.unwrap();

        assert_eq!(created, course(10, "Hello"));
    }

    #[tokio::test]
    async fn test_create_course_empty_title() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_create().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.create_course(Some(String::new())).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_course_missing_title() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_create().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.create_course(None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_course_success() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_update_title()
            .withf(|id, title| *id == 1 && title == "Hello new title")
            .times(1)
            .returning(|id, title| Ok(Some(Course::new(id, title))));

        let service = CourseService::new(Arc::new(mock_repo));

        let updated = service
            .update_course(1, Some("Hello new title".to_string()))
            .await
            .unwrap();

        assert_eq!(updated, course(1, "Hello new title"));
    }

    #[tokio::test]
    async fn test_update_course_validates_before_lookup() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_update_title().never();
        mock_repo.expect_find_by_id().never();

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.update_course(-100, Some(String::new())).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_update_title()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.update_course(-100, Some("Hello".to_string())).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_course_success() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_delete()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(true));

        let service = CourseService::new(Arc::new(mock_repo));

        assert!(service.delete_course(4).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.delete_course(4).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reset_clears_repository() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo.expect_clear().times(1).returning(|| Ok(()));

        let service = CourseService::new(Arc::new(mock_repo));

        assert!(service.reset().await.is_ok());
    }

    #[tokio::test]
    async fn test_seed_creates_in_order() {
        let mut mock_repo = MockCourseRepository::new();
        let mut seq = mockall::Sequence::new();

        for (id, title) in [(1, "front"), (2, "back")] {
            mock_repo
                .expect_create()
                .withf(move |new_course| new_course.title == title)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |new_course| Ok(Course::new(id, new_course.title)));
        }

        let service = CourseService::new(Arc::new(mock_repo));

        let seeded = service.seed(["front", "back"]).await.unwrap();

        assert_eq!(seeded, vec![course(1, "front"), course(2, "back")]);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut mock_repo = MockCourseRepository::new();

        mock_repo
            .expect_count()
            .times(1)
            .returning(|| Err(AppError::internal("Course store is unavailable", json!({}))));

        let service = CourseService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.count().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
