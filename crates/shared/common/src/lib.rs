//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for stores and services
//! - The per-call `Context` threaded through every operation
//! - Configuration structures

pub mod config;
pub mod context;
pub mod error;

pub use config::*;
pub use context::Context;
pub use error::{AppError, AppResult, OptionExt};
