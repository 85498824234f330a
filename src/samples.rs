//! Sample set registry
//!
//! Named, ordered collections of tiles used to preview the dashboard
//! without a live data source. The registry is built once from literal
//! data and is read-only afterwards; one derived entry, `"all"`, is the
//! concatenation of every authored set in declaration order and is
//! computed exactly once during construction.

use crate::tile::{BigNumber, Definition, EntitySummary, QuerySummary, Text, TileData};

/// Key of the derived set that concatenates every authored set
pub const ALL: &str = "all";

/// One named, ordered collection of tiles
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Lookup key, case-sensitive
    pub name: String,
    /// Tiles in display order
    pub tiles: Vec<TileData>,
}

impl SampleSet {
    fn new(name: &str, tiles: Vec<TileData>) -> Self {
        Self {
            name: name.to_string(),
            tiles,
        }
    }
}

/// Registry of sample sets, in declaration order with `"all"` last
#[derive(Debug, Clone)]
pub struct SampleRegistry {
    sets: Vec<SampleSet>,
}

impl SampleRegistry {
    /// Build a registry from authored sets, appending the derived `"all"`
    ///
    /// `"all"` is computed here, after every authored set is present, and
    /// never recomputed.
    #[must_use]
    pub fn new(sets: Vec<SampleSet>) -> Self {
        let all: Vec<TileData> = sets.iter().flat_map(|s| s.tiles.iter().cloned()).collect();
        let mut sets = sets;
        sets.push(SampleSet::new(ALL, all));
        Self { sets }
    }

    /// The built-in preview data
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            SampleSet::new(
                "text",
                vec![TileData::Text(Text {
                    text: "Simple text tile".into(),
                })],
            ),
            SampleSet::new(
                "cl",
                vec![
                    TileData::QuerySummary(QuerySummary {
                        title: "Corporate Lending".into(),
                        preview_number: "42 M".into(),
                        preview_title: "Total Exposure".into(),
                        alternatives: vec![
                            "corporate lending total exposure".into(),
                            "corporate lending total exposure by industry".into(),
                        ],
                    }),
                    TileData::Definition(Definition {
                        title: "Corporate Lending".into(),
                        subtitle: "Portfolio".into(),
                        text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
                               sed do eiusmod tempor incididunt ut labore et dolore magna \
                               aliqua.Ut enim ad minim veniam, quis nostrud exercitation \
                               ullamco laboris nisi ut aliquip ex ea commodo consequat."
                            .into(),
                        link: None,
                    }),
                    TileData::Definition(Definition {
                        title: "CL".into(),
                        subtitle: "Attribute".into(),
                        text: "Risk Domicile, Legal Domicile, Ultimate Parent Risk Domicile..."
                            .into(),
                        link: Some("8 dimensions in Credit Risk IB".into()),
                    }),
                    TileData::BigNumber(BigNumber {
                        number: "42 M".into(),
                        title: "Corporate Lending Total Exposure".into(),
                    }),
                ],
            ),
            SampleSet::new(
                "google",
                vec![TileData::EntitySummary(EntitySummary {
                    title: "Google LLC".into(),
                    preview_number: "42 M".into(),
                    preview_title: "Exposure".into(),
                    parent_title: Some("Alphabet Inc.".into()),
                    parent_number: Some("100 M".into()),
                    parent_link: Some("Ultimate Parent".into()),
                    alternatives: vec!["Google Inc.".into(), "Google UK".into(), "Google".into()],
                    link: Some("See all 22".into()),
                })],
            ),
            SampleSet::new(
                "barclays",
                vec![
                    TileData::EntitySummary(EntitySummary {
                        title: "Barclays Group".into(),
                        preview_number: "123 M".into(),
                        preview_title: "Exposure".into(),
                        parent_title: None,
                        parent_number: None,
                        parent_link: None,
                        alternatives: vec![
                            "Barclays".into(),
                            "Barclays US".into(),
                            "Barclays UK".into(),
                        ],
                        link: Some("See all 8".into()),
                    }),
                    // Loading state: every preview field still blank
                    TileData::EntitySummary(EntitySummary {
                        title: String::new(),
                        preview_number: String::new(),
                        preview_title: String::new(),
                        parent_title: None,
                        parent_number: None,
                        parent_link: None,
                        alternatives: vec![
                            "Barclays".into(),
                            "Barclays US".into(),
                            "Barclays UK".into(),
                        ],
                        link: Some("See all 8".into()),
                    }),
                ],
            ),
        ])
    }

    /// All sets in declaration order, `"all"` last
    #[must_use]
    pub fn sets(&self) -> &[SampleSet] {
        &self.sets
    }

    /// Set names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    /// Tiles for a set name, or an empty slice when the name is unknown
    #[must_use]
    pub fn get(&self, name: &str) -> &[TileData] {
        self.sets
            .iter()
            .find(|s| s.name == name)
            .map_or(&[], |s| s.tiles.as_slice())
    }
}
