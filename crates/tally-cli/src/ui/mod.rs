//! UI primitives for the Tally CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and owo-colors styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Currency, percentages, truncation

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;

pub use theme::Badge;

pub use render::{badge, blank_line, header, hint, kv, print, receipt, simple_table, table, Column};

pub use format::{format_bytes, format_currency, format_percentage, truncate};
