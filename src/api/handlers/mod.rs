//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod health;
pub mod testing;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use health::health_handler;
pub use testing::reset_data_handler;
