//! Utility functions for code generation, input parsing and request handling.
//!
//! - [`code_generator`] - Short code generation and alias validation
//! - [`url_validator`] - Destination URL checks
//! - [`timestamp`] - ISO-8601 expiration parsing
//! - [`client_ip`] - Client IP resolution from headers and peer address

pub mod client_ip;
pub mod code_generator;
pub mod timestamp;
pub mod url_validator;
