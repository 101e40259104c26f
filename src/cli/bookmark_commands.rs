// bmark/src/cli/bookmark_commands.rs
use itertools::Itertools;
use tracing::instrument;

use crate::application::services::theme_service::Theme;
use crate::cli::args::{Cli, Commands};
use crate::cli::display;
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip(services, cli))]
pub fn add(services: &mut ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::Add {
        name,
        url,
        category,
    }) = cli.command
    {
        let bookmark = services.bookmark_service.add_bookmark(
            &name,
            &url,
            category.as_deref().unwrap_or(""),
        )?;

        services
            .interaction
            .notify(&format!("Added bookmark: {} ({})", bookmark.name, bookmark.url));
        println!("{}", bookmark.id);
    }
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn add_category(services: &mut ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::AddCategory { name }) = cli.command {
        let category = services.bookmark_service.add_category(&name)?;
        services
            .interaction
            .notify(&format!("Added category: {}", category));
    }
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn delete(services: &mut ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::Delete { id }) = cli.command {
        let interaction = services.interaction.clone();

        match services.bookmark_service.get_bookmark(&id) {
            Some(bookmark) => {
                interaction.notify(&format!("Deleting: {} ({})", bookmark.name, bookmark.url));

                if interaction.confirm("Confirm delete?") {
                    if services.bookmark_service.delete_bookmark(&id)? {
                        interaction.notify(&format!("Deleted bookmark {}", id));
                    }
                } else {
                    interaction.notify("Deletion cancelled");
                }
            }
            None => interaction.notify(&format!("Bookmark with ID {} not found", id)),
        }
    }
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn delete_category(services: &mut ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::DeleteCategory { name }) = cli.command {
        let interaction = services.interaction.clone();

        let exists = services
            .bookmark_service
            .categories()
            .iter()
            .any(|c| c.value() == name);
        if !exists {
            interaction.notify(&format!("Category '{}' not found", name));
            return Ok(());
        }

        let member_count = services
            .bookmark_service
            .bookmarks()
            .iter()
            .filter(|b| b.category == name)
            .count();

        let prompt = format!(
            "Delete category '{}'? Its {} bookmark(s) will be deleted as well.",
            name, member_count
        );
        if interaction.confirm(&prompt) {
            let removed = services.bookmark_service.delete_category(&name)?;
            interaction.notify(&format!(
                "Deleted category '{}' ({} bookmarks removed)",
                name, removed
            ));
        } else {
            interaction.notify("Deletion cancelled");
        }
    }
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn list(services: &ServiceContainer, cli: &Cli) -> CliResult<()> {
    let groups = services.bookmark_service.grouped_view();
    display::show_grouped_view(&groups, cli.no_color);
    Ok(())
}

#[instrument(skip(services))]
pub fn categories(services: &ServiceContainer) -> CliResult<()> {
    let names = services
        .bookmark_service
        .categories()
        .iter()
        .map(|c| c.value())
        .join("\n");
    println!("{}", names);
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn open(services: &ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::Open { id }) = cli.command {
        match services.bookmark_service.get_bookmark(&id) {
            Some(bookmark) => {
                open::that(&bookmark.url)
                    .map_err(|e| CliError::CommandFailed(format!("Failed to open URL: {}", e)))?;
                services
                    .interaction
                    .notify(&format!("Opened: {} ({})", bookmark.name, bookmark.url));
            }
            None => services
                .interaction
                .notify(&format!("Bookmark with ID {} not found", id)),
        }
    }
    Ok(())
}

#[instrument(skip(services, cli))]
pub fn theme(services: &ServiceContainer, cli: Cli) -> CliResult<()> {
    if let Some(Commands::Theme { theme }) = cli.command {
        let theme = match theme {
            Some(value) => {
                let theme: Theme = value.parse().map_err(CliError::InvalidInput)?;
                services.theme_service.set(theme)?;
                theme
            }
            None => services.theme_service.toggle()?,
        };
        println!("{}", theme);
    }
    Ok(())
}
