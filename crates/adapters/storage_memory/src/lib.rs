//! # scoreboard-adapter-storage-memory
//!
//! Process-local persistence for the scoreboard.
//!
//! ## Responsibilities
//! - Implement the `MatchStore` port trait defined in `scoreboard-app::ports`
//! - Keep matches in insertion order and hand out point-in-time copies
//!
//! ## Dependency rule
//! Depends on `scoreboard-app` (for port traits) and `scoreboard-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod match_store;

pub use match_store::InMemoryMatchStore;
