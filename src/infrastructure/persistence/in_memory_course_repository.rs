//! In-memory implementation of the course repository.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::domain::entities::{Course, CourseFilter, NewCourse};
use crate::domain::id_generator::{IdGenerator, MAX_SAFE_ID};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// Process-memory course store.
///
/// Courses live in a `Vec` kept in insertion order. Each repository call takes
/// the lock once and releases it before returning, so every operation is atomic
/// with respect to the others. Contents are lost when the process exits.
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryCourseRepository {
    /// Creates an empty store that draws ids from `ids`.
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            courses: Mutex::new(Vec::new()),
            ids,
        }
    }

    /// Poisons the store lock, as a panic inside an operation would.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.courses.lock();
            panic!("course store poisoned");
        }));
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Course>>, AppError> {
        self.courses
            .lock()
            .map_err(|_| AppError::internal("Course store is unavailable", json!({})))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let courses = self.lock()?;

        Ok(courses
            .iter()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let courses = self.lock()?;

        Ok(courses.iter().find(|course| course.id == id).cloned())
    }

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut courses = self.lock()?;

        let id = self.ids.next_id().ok_or_else(|| {
            AppError::internal("Course id space exhausted", json!({"max_id": MAX_SAFE_ID}))
        })?;
        let course = Course::new(id, new_course.title);
        courses.push(course.clone());
        debug!(course_id = course.id, total = courses.len(), "Course stored");

        Ok(course)
    }

    async fn update_title(&self, id: i64, title: String) -> Result<Option<Course>, AppError> {
        let mut courses = self.lock()?;

        Ok(courses.iter_mut().find(|course| course.id == id).map(|course| {
            course.title = title;
            course.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut courses = self.lock()?;

        let before = courses.len();
        courses.retain(|course| course.id != id);

        Ok(courses.len() < before)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut courses = self.lock()?;

        debug!(removed = courses.len(), "Course store cleared");
        courses.clear();

        Ok(())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}
