// src/main.rs
use bmark::application::error::ApplicationError;
use bmark::cli::args::Cli;
use bmark::cli::error::CliError;
use bmark::config::{load_settings, Settings};
use bmark::domain::error::DomainError;
use bmark::exitcode;
use bmark::infrastructure::di::ServiceContainer;
use clap::Parser;
use crossterm::style::Stylize;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug, cli.no_color);

    // Load configuration with CLI overrides
    let config_path_ref = cli.config.as_deref();
    let settings = load_settings(config_path_ref).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    // Create service container (single composition root); this loads the
    // persisted collections and seeds defaults on first run.
    let mut services = match ServiceContainer::new(&settings) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("{}: {}", "Failed to initialize bookmark store".red(), e);
            std::process::exit(exit_code_for_application_error(&e));
        }
    };

    if let Err(e) = bmark::cli::execute_command(cli, &mut services) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(exit_code_for_cli_error(&e));
    }
}

fn exit_code_for_application_error(err: &ApplicationError) -> i32 {
    match err {
        ApplicationError::Domain(DomainError::DuplicateCategory(_)) => exitcode::DUP,
        _ => exitcode::USAGE,
    }
}

fn exit_code_for_cli_error(err: &CliError) -> i32 {
    match err {
        CliError::Application(app) => exit_code_for_application_error(app),
        CliError::OperationAborted => exitcode::CANCEL,
        _ => exitcode::USAGE,
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_command_when_verify_then_debug_asserts_pass() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
