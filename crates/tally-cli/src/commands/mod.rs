//! Command handlers, one module per subcommand group.

mod categories;
mod expenses;
mod export;
mod init;
mod maintenance;
mod misc;
mod summary;

pub use categories::{handle_categories_add, handle_categories_list};
pub use expenses::{handle_add, handle_list};
pub use export::handle_export;
pub use init::handle_init;
pub use maintenance::{handle_backup, handle_check};
pub use misc::handle_completions;
pub use summary::handle_summary;
