//! Domain entity representing a course in the catalogue.

/// A course record held by the store.
///
/// Courses are identified by a numeric id handed out by an
/// [`IdGenerator`](crate::domain::id_generator::IdGenerator) at creation time.
/// Only the title can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
}

impl Course {
    /// Creates a new Course instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let course = Course::new(1, "front".to_string());
    /// ```
    pub fn new(id: i64, title: String) -> Self {
        Self { id, title }
    }
}

/// Input data for creating a new course.
///
/// The id is assigned by the repository when the course is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
}

/// Filter applied when listing courses.
///
/// `title` matches as a case-sensitive substring. `None` and an empty
/// string both select every course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub title: Option<String>,
}

impl CourseFilter {
    /// Builds a filter matching titles that contain `title`.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Returns whether `course` passes this filter.
    pub fn matches(&self, course: &Course) -> bool {
        match self.title.as_deref() {
            Some(needle) => course.title.contains(needle),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(7, "devops".to_string());

        assert_eq!(course.id, 7);
        assert_eq!(course.title, "devops");
    }

    #[test]
    fn test_filter_default_matches_everything() {
        let filter = CourseFilter::default();

        assert!(filter.matches(&Course::new(1, "front".to_string())));
        assert!(filter.matches(&Course::new(2, "back".to_string())));
    }

    #[test]
    fn test_filter_by_title_substring() {
        let filter = CourseFilter::by_title("ack");

        assert!(filter.matches(&Course::new(1, "back".to_string())));
        assert!(filter.matches(&Course::new(2, "full stack".to_string())));
        assert!(!filter.matches(&Course::new(3, "front".to_string())));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filter = CourseFilter::by_title("Front");

        assert!(!filter.matches(&Course::new(1, "front".to_string())));
        assert!(filter.matches(&Course::new(2, "Frontend".to_string())));
    }

    #[test]
    fn test_filter_empty_string_matches_everything() {
        let filter = CourseFilter::by_title("");

        assert!(filter.matches(&Course::new(1, "anything".to_string())));
    }
}
