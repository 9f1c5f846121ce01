//! Pure formatting functions for UI output.
//!
//! Every `format_*` function returns the text; the matching `display_*`
//! function prints it. Styling goes through `console`, which drops colors
//! when the output is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::SemVer;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Format the change from `original` to `updated`.
///
/// `written` distinguishes a real update from a dry run.
pub fn format_version_change(original: &SemVer, updated: &SemVer, written: bool) -> String {
    let heading = if written {
        "Updated version:"
    } else {
        "Dry run, version would change:"
    };
    format!(
        "{}\n  From: {}\n  To:   {}",
        style(heading).bold(),
        style(original).red(),
        style(updated).green()
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Display the proposed or applied version change.
pub fn display_version_change(original: &SemVer, updated: &SemVer, written: bool) {
    println!("{}", format_version_change(original, updated, written));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_messages_keep_text() {
        assert!(format_error("bad input").contains("bad input"));
        assert!(format_success("done").contains("done"));
        assert!(format_status("working").contains("working"));
    }

    #[test]
    fn test_format_boundary_warning() {
        let warning = BoundaryWarning::InheritedVersion {
            location: "child/VERSION".to_string(),
        };
        let text = format_boundary_warning(&warning);
        assert!(text.contains("WARNING"));
        assert!(text.contains("child/VERSION"));
    }

    #[test]
    fn test_format_version_change() {
        let text = format_version_change(&SemVer::new(1, 2, 3), &SemVer::new(1, 3, 0), true);
        assert!(text.contains("Updated version"));
        assert!(text.contains("1.2.3"));
        assert!(text.contains("1.3.0"));

        let text = format_version_change(&SemVer::new(1, 2, 3), &SemVer::new(1, 3, 0), false);
        assert!(text.contains("Dry run"));
    }
}
