//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code allocation, link lifecycle and click recording
//! - [`services::analytics_service::AnalyticsService`] - Per-link and global click analytics

pub mod services;
