//! Integration tests for vitrine
//!
//! These tests drive the public API end to end: registry construction,
//! query resolution, both renderer backends, and the JSON wire shape of
//! the tile data.

use vitrine::output;
use vitrine::resolve::resolve;
use vitrine::samples::{SampleRegistry, ALL};
use vitrine::tile::{skeleton, TileData, Unknown};
use vitrine::ui::widgets::tile::tile_lines;
use vitrine::ui::{AppState, Theme};

fn no_color() {
    colored::control::set_override(false);
}

#[test]
fn test_resolve_and_render_a_set() {
    no_color();
    let registry = SampleRegistry::builtin();

    let resolution = resolve(&registry, "go");
    assert_eq!(resolution.label, "google");
    assert_eq!(resolution.tiles.len(), 1);

    let text = output::render_tiles(&resolution.tiles);
    assert!(text.contains("Google LLC"));
    assert!(text.contains("Alphabet Inc."));
    assert!(text.contains("See all 22"));
}

#[test]
fn test_all_set_renders_every_tile() {
    no_color();
    let registry = SampleRegistry::builtin();
    let resolution = resolve(&registry, ALL);
    assert_eq!(resolution.tiles.len(), 8);

    let text = output::render_tiles(&resolution.tiles);
    assert!(text.contains("Simple text tile"));
    assert!(text.contains("Corporate Lending Total Exposure"));
    assert!(text.contains("Barclays Group"));
    // the blank barclays entry renders skeletons
    assert!(text.contains(&skeleton::placeholder(skeleton::MEDIUM)));
}

#[test]
fn test_unresolved_queries_echo_and_render_nothing() {
    let registry = SampleRegistry::builtin();

    let none = resolve(&registry, "zzz");
    assert_eq!((none.label.as_str(), none.tiles.len()), ("zzz", 0));

    let ambiguous = resolve(&registry, "");
    assert_eq!((ambiguous.label.as_str(), ambiguous.tiles.len()), ("", 0));

    assert_eq!(output::render_tiles(&none.tiles), "");
}

#[test]
fn test_unknown_tile_degrades_in_both_backends() {
    no_color();
    let tile: TileData = serde_json::from_str(r#"{"type":"Bogus","text":"?"}"#).unwrap();
    assert_eq!(tile, TileData::Unknown(Unknown { tag: "Bogus".into() }));

    let text = output::render_tile(&tile);
    assert!(text.contains("Bogus"));

    let theme = Theme::dark();
    let lines = tile_lines(&tile, &theme);
    let rendered: String = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .map(|s| s.content.as_ref())
        .collect();
    assert!(rendered.contains("Bogus"));
}

#[test]
fn test_wire_shape_round_trips_through_json() {
    let registry = SampleRegistry::builtin();
    let tiles = registry.get(ALL);

    let json = serde_json::to_string_pretty(tiles).unwrap();
    assert!(json.contains(r#""type": "EntitySummary""#));
    assert!(json.contains(r#""previewNumber""#));
    assert!(json.contains(r#""parentTitle""#));

    let back: Vec<TileData> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), tiles);
}

#[test]
fn test_app_state_drives_resolution_like_the_screen() {
    let state = AppState::new(SampleRegistry::builtin(), "all");
    assert_eq!(state.resolution.label, "all");
    assert_eq!(state.resolution.tiles.len(), 8);

    let mut state = AppState::new(SampleRegistry::builtin(), "bar");
    // unique prefix snaps the visible query to the canonical name
    assert_eq!(state.query, "barclays");
    assert_eq!(state.resolution.tiles.len(), 2);

    state.query_push('x');
    assert_eq!(state.query, "barclaysx");
    assert!(state.resolution.tiles.is_empty());
}
