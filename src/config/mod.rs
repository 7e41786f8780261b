// src/config/mod.rs

//! Configuration for the reload relay.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate the endpoint and timeout (`validate.rs`).
//!
//! Without a config file the compiled-in defaults are used, which target a
//! local server on `http://localhost:8042` without authentication.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{Credentials, RelayConfig};
pub use validate::validate_config;
