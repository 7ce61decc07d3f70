//! HTTP middleware for request processing.
//!
//! Provides cross-origin access control and request tracing.

pub mod cors;
pub mod tracing;
