//! Substring search over the loaded clause list.
//!
//! No ranking: matches are returned in dataset order and the first `limit`
//! win. Queries below the minimum length never scan the dataset.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::clause::{ClauseDataset, ClauseRecord};

pub const DEFAULT_MIN_QUERY_LEN: usize = 1;
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Which record fields a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFields {
    /// Identifier, category and abbreviation.
    #[default]
    Standard,
    /// [`Standard`](Self::Standard) plus the description.
    WithDescription,
}

impl MatchFields {
    fn fields<'a>(&self, record: &'a ClauseRecord) -> impl Iterator<Item = &'a str> {
        let description = match self {
            MatchFields::Standard => None,
            MatchFields::WithDescription => Some(record.description.as_str()),
        };
        [
            record.identifier.as_str(),
            record.category.as_str(),
            record.abbreviation.as_str(),
        ]
        .into_iter()
        .chain(description)
    }
}

impl fmt::Display for MatchFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchFields::Standard => "standard",
            MatchFields::WithDescription => "with-description",
        })
    }
}

impl FromStr for MatchFields {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(MatchFields::Standard),
            "with-description" | "all" => Ok(MatchFields::WithDescription),
            other => Err(format!(
                "unknown match field set `{other}` (expected `standard` or `with-description`)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Queries with fewer characters than this produce no search.
    pub min_query_len: usize,
    /// Maximum number of matches returned.
    pub limit: usize,
    pub fields: MatchFields,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            limit: DEFAULT_RESULT_LIMIT,
            fields: MatchFields::Standard,
        }
    }
}

/// A normalised query that passed the minimum-length gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and lowercase `raw`. Returns `None` when the result is shorter
    /// than `min_len` characters.
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let normalised = raw.trim().to_lowercase();
        if normalised.chars().count() < min_len.max(1) {
            return None;
        }
        Some(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Does any searchable field of `record` contain `query`?
pub fn matches(record: &ClauseRecord, query: &SearchQuery, fields: MatchFields) -> bool {
    fields
        .fields(record)
        .any(|field| field.to_lowercase().contains(query.as_str()))
}

/// First `config.limit` records matching `query`, in dataset order.
pub fn search(
    dataset: &ClauseDataset,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Vec<ClauseRecord> {
    let results: Vec<ClauseRecord> = dataset
        .records()
        .iter()
        .filter(|record| matches(record, query, config.fields))
        .take(config.limit)
        .cloned()
        .collect();
    debug!(query = %query, matched = results.len(), "search complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ClauseDataset {
        ClauseDataset::new(vec![
            ClauseRecord::new(
                "43.02",
                "Commercial 1 Zone",
                "C1Z",
                "Permit required for buildings",
            ),
            ClauseRecord::new("44.01", "Residential Zone", "R1Z", "Subdivide land"),
        ])
    }

    fn q(raw: &str) -> SearchQuery {
        SearchQuery::parse(raw, 1).unwrap()
    }

    #[test]
    fn identifier_query_matches_first_only() {
        let hits = search(&scenario(), &q("43"), &SearchConfig::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "43.02");
    }

    #[test]
    fn category_query_matches_both_in_order() {
        let hits = search(&scenario(), &q("zone"), &SearchConfig::default());
        let ids: Vec<&str> = hits.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["43.02", "44.01"]);
    }

    #[test]
    fn empty_query_is_below_threshold() {
        assert!(SearchQuery::parse("", 1).is_none());
        assert!(SearchQuery::parse("   ", 1).is_none());
    }

    #[test]
    fn threshold_counts_characters_after_trim() {
        assert!(SearchQuery::parse(" 4 ", 2).is_none());
        assert_eq!(SearchQuery::parse(" 43 ", 2).unwrap().as_str(), "43");
    }

    #[test]
    fn query_is_lowercased() {
        assert_eq!(q("  C1Z ").as_str(), "c1z");
        let hits = search(&scenario(), &q("C1Z"), &SearchConfig::default());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn abbreviation_matches() {
        let hits = search(&scenario(), &q("r1z"), &SearchConfig::default());
        assert_eq!(hits[0].identifier, "44.01");
    }

    #[test]
    fn description_excluded_by_default() {
        let hits = search(&scenario(), &q("subdivide"), &SearchConfig::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn description_included_when_configured() {
        let config = SearchConfig {
            fields: MatchFields::WithDescription,
            ..SearchConfig::default()
        };
        let hits = search(&scenario(), &q("subdivide"), &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "44.01");
    }

    #[test]
    fn result_cap_keeps_dataset_order() {
        let records: Vec<ClauseRecord> = (0..20)
            .map(|i| ClauseRecord::new(format!("45.{i:02}"), "Overlay", "DDO", "d"))
            .collect();
        let dataset = ClauseDataset::new(records);
        let hits = search(&dataset, &q("ddo"), &SearchConfig::default());
        assert_eq!(hits.len(), DEFAULT_RESULT_LIMIT);
        let ids: Vec<&str> = hits.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["45.00", "45.01", "45.02", "45.03", "45.04"]);
    }

    #[test]
    fn every_hit_contains_query() {
        let dataset = scenario();
        let query = q("1");
        for hit in search(&dataset, &query, &SearchConfig::default()) {
            assert!(matches(&hit, &query, MatchFields::Standard));
        }
    }

    #[test]
    fn match_fields_parse() {
        assert_eq!("standard".parse::<MatchFields>(), Ok(MatchFields::Standard));
        assert_eq!(
            "With-Description".parse::<MatchFields>(),
            Ok(MatchFields::WithDescription)
        );
        assert!("everything".parse::<MatchFields>().is_err());
    }
}
