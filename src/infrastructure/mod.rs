//! Infrastructure layer.
//!
//! Implements the storage interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Course store implementations

pub mod persistence;
