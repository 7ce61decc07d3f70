//! Repository trait definitions for the domain layer.
//!
//! These traits are the abstract store the registry and the analytics engine
//! are written against. Concrete stores live in `crate::infrastructure`.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link records keyed by short code
//! - [`ClickRepository`] - Append-only click ledger
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests; see
//! `tests/repository_*.rs` for store-level tests.

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
