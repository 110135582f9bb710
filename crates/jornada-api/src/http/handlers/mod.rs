//! HTTP request handlers for the REST API.

pub mod working_days;
