// bmark/src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod bookmark_commands;
pub mod completion;
pub mod display;
pub mod error;

pub fn execute_command(cli: Cli, services: &mut ServiceContainer) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match cli.command {
        Some(Commands::Add { .. }) => bookmark_commands::add(services, cli),
        Some(Commands::AddCategory { .. }) => bookmark_commands::add_category(services, cli),
        Some(Commands::Delete { .. }) => bookmark_commands::delete(services, cli),
        Some(Commands::DeleteCategory { .. }) => {
            bookmark_commands::delete_category(services, cli)
        }
        Some(Commands::List) => bookmark_commands::list(services, &cli),
        Some(Commands::Categories) => bookmark_commands::categories(services),
        Some(Commands::Open { .. }) => bookmark_commands::open(services, cli),
        Some(Commands::Theme { .. }) => bookmark_commands::theme(services, cli),
        Some(Commands::Completion { shell }) => Ok(completion::generate_completion(&shell)?),
        None => bookmark_commands::list(services, &cli),
    }
}
