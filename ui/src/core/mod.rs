//! Platform-agnostic building blocks: the snapshot model, loading, formatting and theming.

pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod palette;
pub mod platform;
pub mod snapshot;
