//! # scoreboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** over the four scoreboard operations
//!   (`/api/matches`, `/api/matches/score`, `/api/summary`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map domain failures into HTTP status codes and structured error bodies
//!
//! ## Dependency rule
//! Depends on `scoreboard-app` (for port traits and services) and
//! `scoreboard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
