//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query, in bytes
    cursor: usize,
    /// Whether the current query resolved to a set
    matched: bool,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, matched: bool, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            matched,
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.matched {
            " Lookup "
        } else {
            " Lookup (no match) "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(">", self.theme.cursor_style()),
            Span::raw(" "),
        ];

        if self.query.is_empty() {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        } else {
            let (before, after) = self.query.split_at(self.cursor);
            spans.push(Span::raw(before.to_string()));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after.to_string()));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
