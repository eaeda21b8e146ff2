//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Blue: the committed choice of a segmented control
//! - Cyan: title, result figure, keybinding hints
//! - Reversed: the highlight of the focused control
//! - Dim: unselected options, captions, help

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// App title.
pub const STYLE_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Control label ("Day of the Month").
pub const STYLE_LABEL: Style = Style::new().fg(Color::Gray);

/// Label of the focused control.
pub const STYLE_LABEL_FOCUSED: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Unselected option of a segmented control.
pub const STYLE_OPTION: Style = Style::new().fg(Color::Gray);

/// Committed option of a segmented control.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD);

/// Highlight inside the focused control.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Border of the focused control.
pub const STYLE_FOCUS_BORDER: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused control.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// The animated allowance figure.
pub const STYLE_RESULT: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
        assert_eq!(STYLE_SELECTED.bg, Some(Color::Blue));
    }

    #[test]
    fn result_style_is_bold() {
        assert!(STYLE_RESULT.add_modifier.contains(Modifier::BOLD));
        assert!(STYLE_IMPORTANT.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }
}
