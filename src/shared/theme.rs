//! Color themes for the UI.

use ratatui::style::Color;

/// Application theme.
///
/// `Pro` is the dark green-on-black terminal look; `Noob` is a light
/// palette. The command prompt in the system bar is only shown in `Pro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark terminal theme.
    Pro,
    /// Light theme.
    Noob,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Pro => Theme::Noob,
            Theme::Noob => Theme::Pro,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Pro => "pro",
            Theme::Noob => "noob",
        }
    }

    /// Whether the command prompt is shown in this theme.
    pub fn prompt_visible(self) -> bool {
        matches!(self, Theme::Pro)
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Warning color (reserved for future use).
    #[allow(dead_code)]
    pub warning: Color,
    /// Error color, used for failure notices in the status line.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Pro => Self {
                bg: Color::Rgb(13, 17, 23),
                text: Color::Rgb(74, 222, 128),
                heading: Color::Rgb(250, 204, 21),
                label: Color::Rgb(34, 197, 94),
                value: Color::Rgb(229, 231, 235),
                border: Color::Rgb(55, 65, 81),
                cursor_fg: Color::Rgb(13, 17, 23),
                cursor_bg: Color::Rgb(250, 204, 21),
                status_fg: Color::Rgb(74, 222, 128),
                status_bg: Color::Rgb(22, 27, 34),
                warning: Color::Rgb(251, 191, 36),
                error: Color::Rgb(248, 113, 113),
            },
            Theme::Noob => Self {
                bg: Color::Rgb(248, 250, 252),
                text: Color::Rgb(31, 41, 55),
                heading: Color::Rgb(29, 78, 216),
                label: Color::Rgb(21, 128, 61),
                value: Color::Rgb(55, 65, 81),
                border: Color::Rgb(203, 213, 225),
                cursor_fg: Color::Rgb(248, 250, 252),
                cursor_bg: Color::Rgb(29, 78, 216),
                status_fg: Color::Rgb(31, 41, 55),
                status_bg: Color::Rgb(226, 232, 240),
                warning: Color::Rgb(180, 83, 9),
                error: Color::Rgb(185, 28, 28),
            },
        }
    }
}
