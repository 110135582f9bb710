//! HTTP/REST API layer for Jornada.
//!
//! Axum-based REST API exposing the business-time calculation at
//! `/api/working-days`, with a flat `{ "error", "message" }` error format and
//! CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
