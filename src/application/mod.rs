//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply validation and business rules,
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::course_service::CourseService`] - Course catalogue CRUD

pub mod services;
