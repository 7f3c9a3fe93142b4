//! Budget CLI - track income and expenses from the command line
//!
//! This is the command-line interface for Budget. It provides a user-friendly
//! interface to the core ledger, aggregation and filtering library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands, SummaryArgs};
use errors::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(&ctx, args),
        Some(Commands::Summary(args)) => commands::handle_summary(&ctx, args),
        Some(Commands::Chart(args)) => commands::handle_chart(&ctx, args),
        Some(Commands::Categories(args)) => commands::handle_categories(&ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => commands::handle_summary(&ctx, &SummaryArgs::default()),
    }
}
