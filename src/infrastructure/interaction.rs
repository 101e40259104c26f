// bmark/src/infrastructure/interaction.rs
use std::io::{self, Write};

use crate::domain::services::interaction::InteractionService;

/// Terminal implementation of the interaction port: confirmation prompts on
/// stdin, messages on stderr so stdout stays pipeable.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl InteractionService for TerminalInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} (y/N): ", prompt);
        let _ = io::stderr().flush();

        let mut user_input = String::new();
        if io::stdin().read_line(&mut user_input).is_err() {
            return false;
        }

        matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
