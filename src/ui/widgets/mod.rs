//! Widgets for the tile preview TUI

mod help_bar;
mod search_bar;
pub mod tile;
mod tile_list;

pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
pub use tile_list::TileList;
