//! Query resolution
//!
//! Maps a free-text query to a sample set by unambiguous prefix match:
//! the query must be a case-insensitive prefix of exactly one registry
//! key. Zero or several matching keys both resolve to nothing: guessing
//! between candidates would make the result depend on declaration order,
//! so ambiguity is rejected instead.

use crate::samples::SampleRegistry;
use crate::tile::TileData;

/// Outcome of resolving a query against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The matched set name, or the query verbatim when unresolved
    pub label: String,
    /// Tiles of the matched set, empty when unresolved
    pub tiles: Vec<TileData>,
}

impl Resolution {
    /// Whether the query matched exactly one set
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.tiles.is_empty()
    }
}

/// Resolve a query to a sample set by case-insensitive prefix
///
/// An empty query is a prefix of every key, so it only resolves when the
/// registry holds a single set.
#[must_use]
pub fn resolve(registry: &SampleRegistry, query: &str) -> Resolution {
    let needle = query.to_lowercase();
    let mut matches = registry
        .names()
        .filter(|name| name.to_lowercase().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(name), None) => Resolution {
            label: name.to_string(),
            tiles: registry.get(name).to_vec(),
        },
        _ => Resolution {
            label: query.to_string(),
            tiles: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleSet;
    use crate::tile::{Text, TileData};

    fn text_tile(text: &str) -> TileData {
        TileData::Text(Text { text: text.into() })
    }

    #[test]
    fn test_unique_prefix_resolves() {
        let registry = SampleRegistry::builtin();
        let resolution = resolve(&registry, "go");
        assert_eq!(resolution.label, "google");
        assert_eq!(resolution.tiles, registry.get("google"));
        assert!(resolution.is_match());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let registry = SampleRegistry::builtin();
        let resolution = resolve(&registry, "GoO");
        assert_eq!(resolution.label, "google");
    }

    #[test]
    fn test_no_match_echoes_query() {
        let registry = SampleRegistry::builtin();
        let resolution = resolve(&registry, "zzz");
        assert_eq!(resolution.label, "zzz");
        assert!(resolution.tiles.is_empty());
    }

    #[test]
    fn test_ambiguous_prefix_resolves_to_nothing() {
        let registry = SampleRegistry::builtin();
        // Empty query prefixes every key
        let resolution = resolve(&registry, "");
        assert_eq!(resolution.label, "");
        assert!(resolution.tiles.is_empty());
    }

    #[test]
    fn test_empty_query_resolves_in_singleton_registry() {
        let registry = SampleRegistry::new(vec![SampleSet {
            name: "only".into(),
            tiles: vec![text_tile("one")],
        }]);
        // "only" plus the derived "all" makes two keys, so still ambiguous
        assert!(!resolve(&registry, "").is_match());
        // but a unique prefix still works
        assert_eq!(resolve(&registry, "o").label, "only");
        assert_eq!(resolve(&registry, "a").label, "all");
    }

    #[test]
    fn test_exact_key_resolves_to_itself() {
        let registry = SampleRegistry::builtin();
        let resolution = resolve(&registry, "barclays");
        assert_eq!(resolution.label, "barclays");
        assert_eq!(resolution.tiles.len(), 2);
    }
}
