//! The closed set of search sources and their enabled/disabled flags.
//!
//! [`SearchSource::ALL`] is the single source of truth for both the state keys
//! and the render order of the source toggles: the set never grows or shrinks
//! at runtime, only the per-source flags flip.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One of the fixed topic filters attached to the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchSource {
    Wikipedia,
    Stackoverflow,
    ArXiv,
}

impl SearchSource {
    /// Every source, in state and render order.
    pub const ALL: [SearchSource; 3] = [Self::Wikipedia, Self::Stackoverflow, Self::ArXiv];

    /// Human-readable label, also used as the serialization key.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wikipedia => "Wikipedia",
            Self::Stackoverflow => "Stackoverflow",
            Self::ArXiv => "arXiv",
        }
    }

    /// Look a source up by label, ignoring case.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.label().eq_ignore_ascii_case(name.trim()))
    }

    const fn index(self) -> usize {
        match self {
            Self::Wikipedia => 0,
            Self::Stackoverflow => 1,
            Self::ArXiv => 2,
        }
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Enabled/disabled flags for the fixed source set.
///
/// Starts all-false and is mutated only through [`FilterSet::toggle`] and
/// [`FilterSet::enable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSet {
    flags: [bool; SearchSource::ALL.len()],
}

impl FilterSet {
    /// An all-disabled filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for one source, leaving every other entry unchanged.
    pub fn toggle(&mut self, source: SearchSource) {
        self.flags[source.index()] = !self.flags[source.index()];
    }

    /// Force a source on, regardless of its current state.
    pub fn enable(&mut self, source: SearchSource) {
        self.flags[source.index()] = true;
    }

    /// Whether the given source is currently enabled.
    pub fn is_enabled(&self, source: SearchSource) -> bool {
        self.flags[source.index()]
    }

    /// The enabled sources, in the fixed source order.
    pub fn enabled(&self) -> impl Iterator<Item = SearchSource> + '_ {
        SearchSource::ALL
            .into_iter()
            .filter(|source| self.is_enabled(*source))
    }

    /// Every source paired with its flag, in the fixed source order.
    pub fn entries(&self) -> impl Iterator<Item = (SearchSource, bool)> + '_ {
        SearchSource::ALL
            .into_iter()
            .map(|source| (source, self.is_enabled(source)))
    }
}

impl Serialize for FilterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(SearchSource::ALL.len()))?;
        for (source, enabled) in self.entries() {
            map.serialize_entry(source.label(), &enabled)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_matches_parity_of_toggle_count() {
        let mut filters = FilterSet::new();
        for _ in 0..3 {
            filters.toggle(SearchSource::Wikipedia);
        }
        for _ in 0..2 {
            filters.toggle(SearchSource::ArXiv);
        }

        assert!(filters.is_enabled(SearchSource::Wikipedia));
        assert!(!filters.is_enabled(SearchSource::Stackoverflow));
        assert!(!filters.is_enabled(SearchSource::ArXiv));
    }

    #[test]
    fn double_toggle_restores_the_original_mapping() {
        let mut filters = FilterSet::new();
        filters.toggle(SearchSource::Stackoverflow);
        let before = filters;

        filters.toggle(SearchSource::ArXiv);
        filters.toggle(SearchSource::ArXiv);

        assert_eq!(filters, before);
    }

    #[test]
    fn key_set_is_fixed() {
        let filters = FilterSet::new();
        let keys: Vec<_> = filters.entries().map(|(source, _)| source).collect();
        assert_eq!(keys, SearchSource::ALL.to_vec());
    }

    #[test]
    fn by_name_ignores_case_and_whitespace() {
        assert_eq!(
            SearchSource::by_name(" wikipedia "),
            Some(SearchSource::Wikipedia)
        );
        assert_eq!(SearchSource::by_name("ARXIV"), Some(SearchSource::ArXiv));
        assert_eq!(SearchSource::by_name("reddit"), None);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut filters = FilterSet::new();
        filters.toggle(SearchSource::ArXiv);

        let json = serde_json::to_string(&filters).expect("serialize");
        assert_eq!(
            json,
            r#"{"Wikipedia":false,"Stackoverflow":false,"arXiv":true}"#
        );
    }
}
