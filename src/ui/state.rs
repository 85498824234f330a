//! Application state for the ratatui TUI
//!
//! The only interactive state is the current query text. Every edit
//! re-resolves the query against the sample registry from scratch and the
//! resolved tiles are redrawn in full; there is no caching layer. A
//! unique match snaps the visible query text to the canonical set name,
//! mirroring the resolved label written back into the search input.

use crate::resolve::{self, Resolution};
use crate::samples::SampleRegistry;

/// Application state for the tile preview screen
#[derive(Debug)]
pub struct AppState {
    /// Read-only sample data, shared by every resolution
    registry: SampleRegistry,
    /// Current search query
    pub query: String,
    /// Cursor position within the query string, in bytes
    pub query_cursor: usize,
    /// Result of resolving the current query
    pub resolution: Resolution,
    /// Index of the first visible tile in the list
    pub scroll_offset: usize,
    /// Height of the visible tile list area (set during render)
    pub visible_height: usize,
    /// Whether the screen should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create new application state, resolving the initial query
    #[must_use]
    pub fn new(registry: SampleRegistry, initial_query: &str) -> Self {
        let mut state = Self {
            registry,
            query: String::new(),
            query_cursor: 0,
            resolution: Resolution {
                label: String::new(),
                tiles: Vec::new(),
            },
            scroll_offset: 0,
            visible_height: 20,
            should_exit: false,
        };
        state.set_query(initial_query.to_string());
        state
    }

    /// Replace the query and recompute the resolution
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.query_cursor = self.query.len();
        self.refresh();
    }

    /// Re-resolve the current query and snap on a unique match
    fn refresh(&mut self) {
        self.resolution = resolve::resolve(&self.registry, &self.query);
        if self.resolution.is_match() && self.query != self.resolution.label {
            // Snap the visible text to the canonical set name
            self.query = self.resolution.label.clone();
            self.query_cursor = self.query.len();
        }
        self.scroll_offset = 0;
    }

    /// Insert a character at the query cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.refresh();
    }

    /// Delete the character before the query cursor
    pub fn query_backspace(&mut self) {
        if let Some(prev) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= prev.len_utf8();
            self.query.remove(self.query_cursor);
            self.refresh();
        }
    }

    /// Delete the character at the query cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
            self.refresh();
        }
    }

    /// Clear the whole query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.refresh();
    }

    /// Move the query cursor one character left
    pub fn query_cursor_left(&mut self) {
        if let Some(prev) = self.query[..self.query_cursor].chars().next_back() {
            self.query_cursor -= prev.len_utf8();
        }
    }

    /// Move the query cursor one character right
    pub fn query_cursor_right(&mut self) {
        if let Some(next) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += next.len_utf8();
        }
    }

    /// Scroll the tile list up one tile
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the tile list down one tile
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.resolution.tiles.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the first tile
    pub fn jump_to_start(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the last tile
    pub fn jump_to_end(&mut self) {
        self.scroll_offset = self.resolution.tiles.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleRegistry;

    fn make_state(initial: &str) -> AppState {
        AppState::new(SampleRegistry::builtin(), initial)
    }

    #[test]
    fn test_initial_query_resolves() {
        let state = make_state("all");
        assert_eq!(state.resolution.label, "all");
        assert_eq!(state.resolution.tiles.len(), 8);
    }

    #[test]
    fn test_unique_prefix_snaps_to_canonical_name() {
        let mut state = make_state("");
        state.query_push('g');
        assert_eq!(state.query, "google");
        assert_eq!(state.query_cursor, "google".len());
        assert_eq!(state.resolution.label, "google");
        assert!(state.resolution.is_match());
    }

    #[test]
    fn test_ambiguous_query_keeps_typed_text() {
        let mut state = make_state("");
        // Empty query prefixes every key: no resolution
        assert_eq!(state.resolution.label, "");
        assert!(state.resolution.tiles.is_empty());

        state.query_push('z');
        assert_eq!(state.query, "z");
        assert!(!state.resolution.is_match());
    }

    #[test]
    fn test_backspace_and_delete_edit_the_query() {
        let mut state = make_state("zzz");
        state.query_backspace();
        assert_eq!(state.query, "zz");
        state.query_cursor = 0;
        state.query_delete();
        assert_eq!(state.query, "z");
        state.query_clear();
        assert_eq!(state.query, "");
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let mut state = make_state("cl");
        assert_eq!(state.resolution.tiles.len(), 4);

        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        for _ in 0..10 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_offset, 3);

        state.jump_to_start();
        assert_eq!(state.scroll_offset, 0);
        state.jump_to_end();
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_edits_reset_scroll() {
        let mut state = make_state("all");
        state.scroll_down();
        assert_eq!(state.scroll_offset, 1);
        state.query_backspace();
        assert_eq!(state.scroll_offset, 0);
    }
}
