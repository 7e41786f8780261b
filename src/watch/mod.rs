// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on a single
//!   directory, non-recursively.
//! - Deciding which notify events count as modifications of that directory's
//!   direct children, or of its listing (children created, removed, renamed).
//!
//! It does **not** know about HTTP; it only turns filesystem changes into
//! `RuntimeEvent::FileModified`.

pub mod event_handler;
pub mod path_utils;
pub mod watcher;

pub use event_handler::{is_listing_change, is_modification, modified_paths};
pub use watcher::{WatcherHandle, spawn_watcher};
