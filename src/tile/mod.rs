//! Tile data model
//!
//! A tile is one renderable unit of dashboard information, keyed by a
//! closed variant tag. The wire shape is an internally-tagged JSON object
//! (`"type"` discriminant, camelCase fields), matching the sample data the
//! dashboard consumes. Decoding is fail-open: an unrecognized tag lands in
//! [`TileData::Unknown`] instead of failing, so future tile types degrade
//! to a visible diagnostic instead of a decode error.

pub mod skeleton;

use serde::{Deserialize, Serialize};

/// Closed union of all tile data shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TileData {
    /// A plain block of text
    Text(Text),
    /// A single prominent number with a caption
    BigNumber(BigNumber),
    /// A term definition with optional drill-down link
    Definition(Definition),
    /// A saved-query summary with alternative phrasings
    QuerySummary(QuerySummary),
    /// An entity summary with optional parent roll-up
    EntitySummary(EntitySummary),
    /// Catch-all for tags outside the known set
    #[serde(untagged)]
    Unknown(Unknown),
}

impl TileData {
    /// The variant tag as it appears on the wire
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Text(_) => "Text",
            Self::BigNumber(_) => "BigNumber",
            Self::Definition(_) => "Definition",
            Self::QuerySummary(_) => "QuerySummary",
            Self::EntitySummary(_) => "EntitySummary",
            Self::Unknown(u) => &u.tag,
        }
    }
}

/// Plain text tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

/// Large numeric summary tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigNumber {
    pub number: String,
    pub title: String,
}

/// Definition tile with optional drill-down link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Saved-query summary tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySummary {
    pub title: String,
    pub preview_number: String,
    pub preview_title: String,
    /// Alternative query phrasings, in display order
    pub alternatives: Vec<String>,
}

/// Entity summary tile with optional parent roll-up block
///
/// Any of the preview/parent fields may still be loading; renderers
/// substitute skeleton placeholders for fields that are absent or empty
/// (the two are deliberately not distinguished).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub title: String,
    pub preview_number: String,
    pub preview_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_link: Option<String>,
    /// Alternative entity names, in display order
    pub alternatives: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl EntitySummary {
    /// Whether the parent roll-up block should be rendered
    #[must_use]
    pub fn has_parent(&self) -> bool {
        non_empty(self.parent_title.as_deref()).is_some()
            || non_empty(self.parent_number.as_deref()).is_some()
    }
}

/// Tile data whose tag is outside the known variant set
///
/// Only the tag is retained; the remaining fields cannot be interpreted
/// and are dropped at the decode boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unknown {
    #[serde(rename = "type")]
    pub tag: String,
}

/// Treat empty strings as absent, collapsing the missing/empty distinction
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// A field value, or the skeleton placeholder for its size class
#[must_use]
pub fn or_skeleton(value: &str, token: &str) -> String {
    match non_empty(Some(value)) {
        Some(v) => v.to_string(),
        None => skeleton::placeholder(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tag_round_trip() {
        let tile = TileData::BigNumber(BigNumber {
            number: "42 M".into(),
            title: "Total Exposure".into(),
        });
        let json = serde_json::to_string(&tile).unwrap();
        assert!(json.contains(r#""type":"BigNumber""#));
        let back: TileData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tile);
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let tile = TileData::QuerySummary(QuerySummary {
            title: "t".into(),
            preview_number: "1".into(),
            preview_title: "p".into(),
            alternatives: vec!["a".into(), "b".into()],
        });
        let json = serde_json::to_string(&tile).unwrap();
        assert!(json.contains(r#""previewNumber":"1""#));
        assert!(json.contains(r#""previewTitle":"p""#));
    }

    #[test]
    fn test_unrecognized_tag_decodes_to_unknown() {
        let tile: TileData =
            serde_json::from_str(r#"{"type":"Sparkline","points":[1,2,3]}"#).unwrap();
        assert_eq!(tile, TileData::Unknown(Unknown { tag: "Sparkline".into() }));
        assert_eq!(tile.tag(), "Sparkline");
    }

    #[test]
    fn test_absent_optional_fields_stay_off_the_wire() {
        let tile = TileData::Definition(Definition {
            title: "CL".into(),
            subtitle: "Attribute".into(),
            text: "Risk Domicile".into(),
            link: None,
        });
        let json = serde_json::to_string(&tile).unwrap();
        assert!(!json.contains("link"));
    }

    #[test]
    fn test_has_parent_ignores_empty_strings() {
        let mut entity = EntitySummary {
            title: String::new(),
            preview_number: String::new(),
            preview_title: String::new(),
            parent_title: Some(String::new()),
            parent_number: None,
            parent_link: None,
            alternatives: vec![],
            link: None,
        };
        assert!(!entity.has_parent());
        entity.parent_number = Some("100 M".into());
        assert!(entity.has_parent());
    }

    #[test]
    fn test_or_skeleton_substitutes_for_blank_fields() {
        assert_eq!(or_skeleton("Google LLC", skeleton::MEDIUM), "Google LLC");
        assert_eq!(or_skeleton("", skeleton::MEDIUM), "xxxxxx xxxxx");
        assert_eq!(or_skeleton("", skeleton::THOUSAND), "xxxx");
    }
}
