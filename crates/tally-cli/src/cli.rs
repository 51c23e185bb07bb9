use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tally_core::VERSION;

/// Tally - track personal expenses by category from the command line
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, env = "TALLY_PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII instead of unicode symbols
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, hide = true, env = "TALLY_TODAY")]
    pub today: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (e.g., 12.50 or 12,50)
    #[arg(value_name = "AMOUNT")]
    pub amount: String,

    /// What the money was spent on
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Category id or name
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long, conflicts_with_all = ["month", "category", "since"])]
    pub limit: Option<usize>,

    /// Show every expense instead of the most recent ones
    #[arg(long, conflicts_with_all = ["limit", "month", "category", "since"])]
    pub all: bool,

    /// Start date (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "until")]
    pub since: Option<String>,

    /// End date (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "since")]
    pub until: Option<String>,

    /// Only expenses dated in the current month
    #[arg(long, conflicts_with_all = ["since", "until", "category"])]
    pub month: bool,

    /// Filter by category id or name
    #[arg(short, long, conflicts_with_all = ["since", "until"])]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `categories list`
#[derive(Args)]
pub struct CategoriesListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `categories add`
#[derive(Args)]
pub struct CategoriesAddArgs {
    /// Category name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Display color (hex, e.g. #ff6b6b)
    #[arg(long, default_value = "#dddddd")]
    pub color: String,

    /// Display icon
    #[arg(long, default_value = "📦")]
    pub icon: String,
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List(CategoriesListArgs),

    /// Add a category
    Add(CategoriesAddArgs),
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Number of categories to show in the breakdown
    #[arg(long)]
    pub top: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Export encodings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Start date (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "until")]
    pub since: Option<String>,

    /// End date (YYYY-MM-DD, inclusive)
    #[arg(long, requires = "since")]
    pub until: Option<String>,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and config, seeding default categories
    Init(InitArgs),

    /// Record an expense
    Add(AddArgs),

    /// List expenses, most recent first
    List(ListArgs),

    /// Manage categories
    #[command(subcommand)]
    Categories(CategoryCommands),

    /// Show totals and the per-category breakdown
    Summary(SummaryArgs),

    /// Export expenses (json or jsonl)
    Export(ExportArgs),

    /// Check database integrity
    Check,

    /// Back up the database
    Backup(BackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["tally", "add", "12,50", "Pizza", "--category", "1"])
            .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.amount, "12,50");
                assert_eq!(args.description, "Pizza");
                assert_eq!(args.category.as_deref(), Some("1"));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_list_since_requires_until() {
        assert!(Cli::try_parse_from(["tally", "list", "--since", "2024-01-01"]).is_err());
    }

    #[test]
    fn test_list_limit_conflicts_with_filters() {
        for args in [
            vec!["tally", "list", "--month", "--limit", "3"],
            vec!["tally", "list", "--category", "1", "--limit", "3"],
            vec!["tally", "list", "--since", "2024-01-01", "--until", "2024-01-31", "--limit", "3"],
            vec!["tally", "list", "--month", "--all"],
            vec!["tally", "list", "--category", "1", "--all"],
        ] {
            let err = Cli::try_parse_from(args.clone()).err();
            assert!(
                matches!(err.map(|e| e.kind()), Some(clap::error::ErrorKind::ArgumentConflict)),
                "{:?} should conflict",
                args
            );
        }
        assert!(Cli::try_parse_from(["tally", "list", "--limit", "3"]).is_ok());
    }

    #[test]
    fn test_export_format_is_a_closed_set() {
        match Cli::try_parse_from(["tally", "export"]).unwrap().command {
            Some(Commands::Export(args)) => assert_eq!(args.format, ExportFormat::Json),
            _ => panic!("expected export command"),
        }
        match Cli::try_parse_from(["tally", "export", "--format", "jsonl"]).unwrap().command {
            Some(Commands::Export(args)) => assert_eq!(args.format, ExportFormat::Jsonl),
            _ => panic!("expected export command"),
        }

        let err = Cli::try_parse_from(["tally", "export", "--format", "csv"]).err();
        assert!(matches!(
            err.map(|e| e.kind()),
            Some(clap::error::ErrorKind::InvalidValue)
        ));
    }
}
