//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct ([`NewCourse`]) so that ids are only ever
//! assigned by the store.

pub mod course;

pub use course::{Course, CourseFilter, NewCourse};
