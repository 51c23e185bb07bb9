//! Tally CLI - track personal expenses by category from the terminal
//!
//! Thin command-line front end over `tally-core`: every command opens the
//! store, runs one or two operations, renders the result and exits.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use env_logger::Env;

use app::AppContext;
use cli::{CategoryCommands, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("TALLY_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log::debug!("Command failed: {:?}", err);
        errors::classify(&err).exit();
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Categories(CategoryCommands::List(args))) => {
            commands::handle_categories_list(&ctx, args)
        }
        Some(Commands::Categories(CategoryCommands::Add(args))) => {
            commands::handle_categories_add(&ctx, args)
        }
        Some(Commands::Summary(args)) => commands::handle_summary(&ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(&ctx, args),
        Some(Commands::Check) => commands::handle_check(&ctx),
        Some(Commands::Backup(args)) => commands::handle_backup(&ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
