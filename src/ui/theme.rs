//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the tile preview screen.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme selection persisted in the configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Dark terminal backgrounds
    #[default]
    Dark,
    /// Light terminal backgrounds
    Light,
}

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for tile titles
    pub title: Color,
    /// Color for prominent numbers
    pub number: Color,
    /// Color for captions and subtitles
    pub caption: Color,
    /// Color for link affordances
    pub link: Color,
    /// Color for skeleton placeholders
    pub skeleton: Color,
    /// Color for tile card borders
    pub border: Color,
    /// Color for the diagnostic tile shown for unknown tags
    pub error: Color,
    /// Color for the search cursor and key hints
    pub cursor: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            title: Color::White,
            number: Color::Cyan,
            caption: Color::Gray,
            link: Color::Blue,
            skeleton: Color::DarkGray,
            border: Color::DarkGray,
            error: Color::Red,
            cursor: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Create a light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            title: Color::Black,
            number: Color::Blue,
            caption: Color::DarkGray,
            link: Color::Blue,
            skeleton: Color::Gray,
            border: Color::Gray,
            error: Color::Red,
            cursor: Color::Blue,
            dimmed: Color::Gray,
        }
    }

    /// Select a theme from its configured choice
    #[must_use]
    pub const fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Style for tile titles
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for prominent numbers
    #[must_use]
    pub fn number_style(&self) -> Style {
        Style::default()
            .fg(self.number)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for captions and subtitles
    #[must_use]
    pub fn caption_style(&self) -> Style {
        Style::default().fg(self.caption)
    }

    /// Style for link affordances
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default().fg(self.link)
    }

    /// Style for skeleton placeholders
    #[must_use]
    pub fn skeleton_style(&self) -> Style {
        Style::default().fg(self.skeleton)
    }

    /// Style for tile card borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the diagnostic tile body and border
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for the search cursor and key hints
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed/inactive text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for plain tile text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }
}
