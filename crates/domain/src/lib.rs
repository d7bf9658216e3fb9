//! # scoreboard-domain
//!
//! Pure domain model for the live sporting-event scoreboard.
//!
//! ## Responsibilities
//! - Define the **Match** value (two teams, two non-negative scores)
//! - Define the **team-name policy** applied when a match is constructed
//! - Provide the **validation** rules checked before any state transition
//! - Define the **events** emitted when a match starts, changes score, or finishes
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod live_match;
pub mod team;
pub mod validation;
