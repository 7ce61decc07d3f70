//! In-memory repository implementations.
//!
//! Process-local stores on `dashmap::DashMap`. Data is lost on restart; used
//! for development, tests and the default `memory` storage backend.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Link records keyed by short code
//! - [`InMemoryClickRepository`] - Click ledger keyed by short code

pub mod memory_click_repository;
pub mod memory_link_repository;

pub use memory_click_repository::InMemoryClickRepository;
pub use memory_link_repository::InMemoryLinkRepository;
