// bmark/src/domain/services/interaction.rs

/// Port for user interaction required by destructive operations.
///
/// Keeps the command handlers decoupled from the terminal: tests inject a
/// scripted implementation instead of reading stdin.
pub trait InteractionService: Send + Sync {
    /// Ask the user to confirm an action; false aborts it.
    fn confirm(&self, prompt: &str) -> bool;

    /// Show a human-readable message to the user.
    fn notify(&self, message: &str);
}
