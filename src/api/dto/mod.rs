//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase keys; request bodies are checked with
//! `validator` before they reach a service.

pub mod analytics;
pub mod health;
pub mod link;
pub mod response;
pub mod shorten;
pub mod stats;
