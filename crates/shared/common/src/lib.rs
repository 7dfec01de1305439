//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The closed store error taxonomy and the application error type
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt, StoreError};
