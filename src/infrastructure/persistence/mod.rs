//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against the schema in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, lookup and atomic click counting
//! - [`PgClickRepository`] - Append-only click ledger

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
