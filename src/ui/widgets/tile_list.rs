//! Tile list widget
//!
//! Draws the resolved tiles top to bottom, one bordered card per tile,
//! starting at the state's scroll offset. Cards that do not fit the
//! remaining height are clipped at the bottom, matching how a terminal
//! page naturally truncates.

use super::tile::{is_diagnostic, tile_lines};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Scrollable list of tile cards
pub struct TileList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> TileList<'a> {
    /// Create a new tile list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let shown = state.resolution.tiles.len();
        let title = if state.resolution.is_match() {
            format!(" {} ({shown} tile(s)) ", state.resolution.label)
        } else {
            " no set resolved ".to_string()
        };

        Self {
            state,
            theme,
            title,
        }
    }
}

impl Widget for TileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        for tile in self.state.resolution.tiles.iter().skip(self.state.scroll_offset) {
            if y >= bottom {
                break;
            }

            let lines = tile_lines(tile, self.theme);
            // card height: body plus top and bottom border
            #[allow(clippy::cast_possible_truncation)]
            let height = ((lines.len() as u16).saturating_add(2)).min(bottom - y);
            let card_area = Rect::new(inner.x, y, inner.width, height);

            let border_style = if is_diagnostic(tile) {
                self.theme.error_style()
            } else {
                self.theme.border_style()
            };
            let card = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let body = card.inner(card_area);
            card.render(card_area, buf);
            Paragraph::new(lines).render(body, buf);

            y += height;
        }
    }
}
