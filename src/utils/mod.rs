//! Utility module - errors, logging and validation helpers
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`logger`] - tracing setup
//! - [`validation`] - payload checks run before any store access

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ErrorBody};
