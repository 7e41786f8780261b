// src/relay/mod.rs

//! Relay layer: turns one detected modification into one reset request.
//!
//! - [`backend`] provides the `ReloadBackend` trait and the concrete
//!   `HttpReloadBackend` used in production. Tests can swap in a fake
//!   implementation that records requests instead of sending them.

pub mod backend;

pub use backend::{HttpReloadBackend, ReloadBackend};
