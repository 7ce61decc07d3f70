//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Links, clicks and the analytics views derived from them
//! - [`repositories`] - Store trait definitions
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the live link for a code
//! 2. [`crate::application::services::LinkService::record_click`] hands the
//!    click to [`repositories::LinkRepository::record_click`], which bumps the
//!    counter and appends the event to the ledger in one atomic step
//! 3. Analytics read the events back through [`repositories::ClickRepository`]

pub mod entities;
pub mod repositories;
