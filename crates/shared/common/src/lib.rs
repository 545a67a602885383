//! Common utilities shared across the workspace.
//!
//! This crate provides the unified error type for the data-access layer.

pub mod error;

pub use error::{OperationError, OperationResult};
