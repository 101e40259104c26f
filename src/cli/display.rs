// bmark/src/cli/display.rs

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::domain::category::CategoryGroup;
use crate::util::helper::is_stdout_piped;

/// Render the grouped view: one labeled block per non-empty category, one
/// line per bookmark with id, name and url.
pub fn show_grouped_view(groups: &[CategoryGroup], no_color: bool) {
    if groups.is_empty() {
        eprintln!("No bookmarks to display");
        return;
    }

    let color_choice = if no_color || is_stdout_piped() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let mut stdout = StandardStream::stdout(color_choice);

    for group in groups {
        // Category header (green, bold)
        if let Err(e) = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
        {
            eprintln!("Error setting color: {}", e);
        }
        if let Err(e) = writeln!(
            &mut stdout,
            "{} ({})",
            group.category,
            group.bookmarks.len()
        ) {
            eprintln!("Error writing to stdout: {}", e);
        }

        for bookmark in &group.bookmarks {
            // Id (yellow)
            if let Err(e) = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow))) {
                eprintln!("Error setting color: {}", e);
            }
            if let Err(e) = write!(&mut stdout, "  {}", bookmark.id) {
                eprintln!("Error writing to stdout: {}", e);
            }

            // Name (default color)
            if let Err(e) = stdout.reset() {
                eprintln!("Error resetting color: {}", e);
            }
            if let Err(e) = write!(&mut stdout, "  {}", bookmark.name) {
                eprintln!("Error writing to stdout: {}", e);
            }

            // Url (cyan)
            if let Err(e) = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan))) {
                eprintln!("Error setting color: {}", e);
            }
            if let Err(e) = writeln!(&mut stdout, "  {}", bookmark.url) {
                eprintln!("Error writing to stdout: {}", e);
            }
        }

        if let Err(e) = stdout.reset() {
            eprintln!("Error resetting color: {}", e);
        }
        if let Err(e) = writeln!(&mut stdout) {
            eprintln!("Error writing to stdout: {}", e);
        }
    }
}
