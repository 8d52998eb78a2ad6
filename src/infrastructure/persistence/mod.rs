//! Repository implementations.
//!
//! - [`InMemoryCourseRepository`] - Ordered course store held in process memory

pub mod in_memory_course_repository;

pub use in_memory_course_repository::InMemoryCourseRepository;
