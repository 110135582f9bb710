//! Shared domain types for Jornada.
//!
//! Business calendar windows, the validated request, HTTP payloads,
//! configuration and error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod request;
