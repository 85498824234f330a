//! Ratatui-based tile preview interface
//!
//! Wires user input to the query resolver and the resolved tiles to the
//! tile renderers. The shell holds exactly one piece of interactive
//! state, the current query; every change re-resolves and redraws.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Lookup                    > all│     │   SearchBar
//! ├──────────────────────────────────────┤
//! │ ┌──────────────────────────────────┐ │
//! │ │ Simple text tile                 │ │   TileList
//! │ └──────────────────────────────────┘ │   (one card per tile)
//! │ ┌──────────────────────────────────┐ │
//! │ │ Corporate Lending ...            │ │
//! └──────────────────────────────────────┘
//!   type:lookup set  ↑/↓:scroll  ESC:quit    HelpBar
//! ```

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::App;
pub use events::{handle_key, poll_and_handle, EventResult};
pub use state::AppState;
pub use theme::{Theme, ThemeChoice};
