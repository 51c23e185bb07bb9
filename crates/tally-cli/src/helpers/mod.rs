//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Date, amount, and output format parsing (`parsing`)
//! - Category lookup and prompting (`category`)

mod category;
mod parsing;

// Re-export public API
pub use category::{prompt_category, resolve_category};
pub use parsing::{parse_amount, parse_date, parse_description, parse_output_format, OutputFormat};
