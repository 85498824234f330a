//! Per-variant tile line renderers
//!
//! Pure functions from tile data to styled lines, consumed by the
//! [`TileList`](super::TileList) widget. One renderer per variant, plus
//! the diagnostic renderer for unknown tags. The dispatch is exhaustive,
//! so a new variant cannot be added without choosing its renderer.

use crate::tile::{
    self, skeleton, BigNumber, Definition, EntitySummary, QuerySummary, Text, TileData, Unknown,
};
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};

/// Marker shown after link-like affordances
const LINK_MARK: &str = "↗";

/// Render a tile's body to styled lines
#[must_use]
pub fn tile_lines(data: &TileData, theme: &Theme) -> Vec<Line<'static>> {
    match data {
        TileData::Text(t) => text_lines(t, theme),
        TileData::BigNumber(t) => big_number_lines(t, theme),
        TileData::Definition(t) => definition_lines(t, theme),
        TileData::QuerySummary(t) => query_summary_lines(t, theme),
        TileData::EntitySummary(t) => entity_summary_lines(t, theme),
        TileData::Unknown(t) => unknown_lines(t, theme),
    }
}

/// Whether the tile should be drawn with the error border
#[must_use]
pub fn is_diagnostic(data: &TileData) -> bool {
    matches!(data, TileData::Unknown(_))
}

fn text_lines(data: &Text, theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::styled(data.text.clone(), theme.normal_style())]
}

fn big_number_lines(data: &BigNumber, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled(data.number.clone(), theme.number_style()),
        Line::styled(data.title.clone(), theme.caption_style()),
    ]
}

fn definition_lines(data: &Definition, theme: &Theme) -> Vec<Line<'static>> {
    let link = data.link.clone().unwrap_or_else(|| "See more".to_string());
    vec![
        Line::styled(data.title.clone(), theme.title_style()),
        Line::styled(data.subtitle.clone(), theme.caption_style()),
        Line::styled(data.text.clone(), theme.normal_style()),
        Line::from(vec![
            Span::styled(format!("{link} {LINK_MARK}"), theme.link_style()),
            Span::raw("  "),
            Span::styled("Use as filter", theme.link_style()),
        ]),
    ]
}

fn query_summary_lines(data: &QuerySummary, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(data.title.clone(), theme.title_style()),
        Line::styled(data.preview_number.clone(), theme.number_style()),
        Line::styled(data.preview_title.clone(), theme.caption_style()),
    ];
    lines.extend(alternative_rows(&data.alternatives, theme));
    lines
}

fn entity_summary_lines(data: &EntitySummary, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        field_line(&data.title, skeleton::MEDIUM, theme.title_style(), theme),
        field_line(
            &data.preview_number,
            skeleton::THOUSAND,
            theme.number_style(),
            theme,
        ),
        field_line(
            &data.preview_title,
            skeleton::MEDIUM,
            theme.caption_style(),
            theme,
        ),
    ];

    if data.has_parent() {
        let parent_title = data.parent_title.clone().unwrap_or_default();
        let parent_number = data.parent_number.clone().unwrap_or_default();
        let parent_link = data.parent_link.clone().unwrap_or_default();
        lines.push(field_line(
            &parent_title,
            skeleton::MEDIUM,
            theme.title_style(),
            theme,
        ));
        lines.push(field_line(
            &parent_number,
            skeleton::THOUSAND,
            theme.number_style(),
            theme,
        ));
        lines.push(match tile::non_empty(Some(&parent_link)) {
            Some(v) => Line::styled(format!("{v} {LINK_MARK}"), theme.link_style()),
            None => Line::from(vec![
                Span::styled(skeleton::placeholder(skeleton::LONG), theme.skeleton_style()),
                Span::styled(format!(" {LINK_MARK}"), theme.link_style()),
            ]),
        });
    }

    lines.extend(alternative_rows(&data.alternatives, theme));
    // One extra row for the link, reserved even when the link is absent
    let link = data.link.clone().unwrap_or_default();
    lines.push(Line::styled(
        format!("  {link} {LINK_MARK}"),
        theme.link_style(),
    ));
    lines
}

fn unknown_lines(data: &Unknown, theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::styled(
        format!("Unsupported tile type: {}", data.tag),
        theme.error_style(),
    )]
}

/// One row per alternative, keyed by position
fn alternative_rows(alternatives: &[String], theme: &Theme) -> Vec<Line<'static>> {
    alternatives
        .iter()
        .map(|alt| Line::styled(format!("  {alt}"), theme.normal_style()))
        .collect()
}

/// A field value line, or its skeleton placeholder when blank
fn field_line(
    value: &str,
    token: &str,
    value_style: ratatui::style::Style,
    theme: &Theme,
) -> Line<'static> {
    match tile::non_empty(Some(value)) {
        Some(v) => Line::styled(v.to_string(), value_style),
        None => Line::styled(skeleton::placeholder(token), theme.skeleton_style()),
    }
}
