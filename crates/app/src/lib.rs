//! # scoreboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `MatchStore` — keyed collection of matches in insertion order
//!   - `EventPublisher` — fan-out of scoreboard events
//! - Define the **driving/inbound** use-case:
//!   - `ScoreboardService` — start, update, finish, ranked summary
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `scoreboard-domain` only (plus `tokio::sync` for locking and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
