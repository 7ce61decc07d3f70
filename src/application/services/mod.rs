//! Business logic services for the application layer.

pub mod analytics_service;
pub mod link_service;

pub use analytics_service::AnalyticsService;
pub use link_service::{LinkService, RegistrySettings};
