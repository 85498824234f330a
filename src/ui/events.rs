//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to state transitions. Query edits
//! trigger a fresh resolution inside the state; everything else is
//! navigation or exit.

use super::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the screen
    Exit,
    /// No action taken
    Ignored,
}

/// Handle a single key event
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }

        // Tile list navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.scroll_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.scroll_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) | (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) | (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::Continue
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_cursor >= state.query.len() {
                EventResult::Ignored
            } else {
                state.query_delete();
                EventResult::Continue
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroll_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.scroll_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
/// Returns an I/O error when the terminal event stream fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleRegistry;

    fn make_state() -> AppState {
        AppState::new(SampleRegistry::builtin(), "all")
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_exits() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, press(KeyCode::Esc)), EventResult::Exit);
        assert!(state.should_exit);
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut state = make_state();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, key), EventResult::Exit);
    }

    #[test]
    fn test_typing_edits_the_query() {
        let mut state = make_state();
        state.query_clear();
        handle_key(&mut state, press(KeyCode::Char('c')));
        // "c" uniquely prefixes "cl", so the query snaps to it
        assert_eq!(state.query, "cl");
        assert_eq!(state.resolution.label, "cl");
    }

    #[test]
    fn test_backspace_on_empty_query_is_ignored() {
        let mut state = make_state();
        state.query_clear();
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Backspace)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_arrows_scroll_the_tile_list() {
        let mut state = make_state();
        handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(state.scroll_offset, 1);
        handle_key(&mut state, press(KeyCode::Up));
        assert_eq!(state.scroll_offset, 0);
        handle_key(&mut state, press(KeyCode::End));
        assert_eq!(state.scroll_offset, 7);
        handle_key(&mut state, press(KeyCode::Home));
        assert_eq!(state.scroll_offset, 0);
    }
}
