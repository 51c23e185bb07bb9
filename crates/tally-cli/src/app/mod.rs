//! Application-level utilities for the Tally CLI.
//!
//! This module provides:
//! - Path resolution for config and database files
//! - A per-invocation context that opens the store on demand

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
