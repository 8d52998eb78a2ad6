//! # Course Store
//!
//! A small REST service keeping a catalogue of courses in process memory,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Course entity, id generation and repository trait
//! - **Application Layer** ([`application`]) - Validation and CRUD orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! export SEED_COURSES=false        # Optional, start empty
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CourseService;
    pub use crate::domain::entities::{Course, CourseFilter, NewCourse};
    pub use crate::domain::id_generator::{IdGenerator, SequentialIdGenerator};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryCourseRepository;
    pub use crate::state::AppState;
}
