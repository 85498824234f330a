//! Plain-text tile rendering for CLI display
//!
//! Renders tiles to colored terminal text for the one-shot `render`
//! command. The dispatch mirrors the TUI renderer: one branch per tile
//! variant plus the diagnostic branch for unknown tags. Rendering never
//! fails and never mutates its input.

use crate::samples::SampleRegistry;
use crate::tile::{self, skeleton, TileData};
use colored::Colorize;

/// Marker shown after link-like affordances
pub const LINK_MARK: &str = "↗";

/// Render one tile to a multi-line string
#[must_use]
pub fn render_tile(tile: &TileData) -> String {
    match tile {
        TileData::Text(t) => t.text.clone(),
        TileData::BigNumber(t) => {
            format!("{}\n{}", t.number.bold(), t.title.dimmed())
        }
        TileData::Definition(t) => {
            let link = t.link.as_deref().unwrap_or("See more");
            format!(
                "{}\n{}\n{}\n{} {LINK_MARK}  {}",
                t.title.bold(),
                t.subtitle.dimmed(),
                t.text,
                link.cyan(),
                "Use as filter".cyan(),
            )
        }
        TileData::QuerySummary(t) => {
            let mut out = format!(
                "{}\n{}\n{}",
                t.title.bold(),
                t.preview_number.bold(),
                t.preview_title.dimmed(),
            );
            for alt in &t.alternatives {
                out.push_str(&format!("\n  {alt}"));
            }
            out
        }
        TileData::EntitySummary(t) => {
            let mut out = format!(
                "{}\n{}\n{}",
                tile::or_skeleton(&t.title, skeleton::MEDIUM).bold(),
                tile::or_skeleton(&t.preview_number, skeleton::THOUSAND).bold(),
                tile::or_skeleton(&t.preview_title, skeleton::MEDIUM).dimmed(),
            );
            if t.has_parent() {
                out.push_str(&format!(
                    "\n{}\n{}\n{} {LINK_MARK}",
                    tile::or_skeleton(t.parent_title.as_deref().unwrap_or(""), skeleton::MEDIUM),
                    tile::or_skeleton(t.parent_number.as_deref().unwrap_or(""), skeleton::THOUSAND),
                    tile::or_skeleton(t.parent_link.as_deref().unwrap_or(""), skeleton::LONG)
                        .cyan(),
                ));
            }
            for alt in &t.alternatives {
                out.push_str(&format!("\n  {alt}"));
            }
            // The link row is always present, even with nothing to show
            let link = t.link.as_deref().unwrap_or("");
            out.push_str(&format!("\n  {} {LINK_MARK}", link.cyan()));
            out
        }
        TileData::Unknown(t) => format!("Unsupported tile type: {}", t.tag).red().to_string(),
    }
}

/// Render a resolved set of tiles, separated by blank lines
#[must_use]
pub fn render_tiles(tiles: &[TileData]) -> String {
    tiles
        .iter()
        .map(render_tile)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format one registry entry for the `list` command
#[must_use]
pub fn set_with_count(name: &str, count: usize, quiet: bool) -> String {
    if quiet {
        name.to_string()
    } else {
        format!("  {name} ({count} tile(s))")
    }
}

/// Format the whole registry listing
#[must_use]
pub fn list_sets(registry: &SampleRegistry, quiet: bool) -> String {
    registry
        .sets()
        .iter()
        .map(|s| set_with_count(&s.name, s.tiles.len(), quiet))
        .collect::<Vec<_>>()
        .join("\n")
}
