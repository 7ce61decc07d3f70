//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping owned by the registry
//! - [`Click`] - An immutable click event owned by the ledger
//! - [`LinkSummary`], [`LinkTraffic`], [`DetailedInfo`] - Analytics views
//!
//! # Design Pattern
//!
//! Stored entities have a separate creation struct (`NewLink`, `NewClick`)
//! that carries everything except the store-assigned identifier.

pub mod analytics;
pub mod click;
pub mod link;

pub use analytics::{DetailedInfo, LinkSummary, LinkTraffic};
pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
