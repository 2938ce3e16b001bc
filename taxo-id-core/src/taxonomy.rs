//! Taxonomy summary model.
//!
//! The allocation engine does not read taxonomy files itself; callers hand
//! it a deserialized summary. All the engine needs from a taxonomy is its
//! label sets (with ranks) and one annotation row per node — node content is
//! irrelevant to range layout.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One tier of the taxonomy hierarchy.
///
/// Only label sets carrying a rank participate in range allocation; rank
/// orders tiers from coarsest (highest) to finest (lowest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

/// One row per taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub cell_set_accession: String,
    pub labelset: String,
}

/// Summary of a taxonomy: its tiers and one annotation per node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub labelsets: Vec<LabelSet>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Taxonomy {
    /// Deserialize a taxonomy summary from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize a taxonomy summary from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Names of ranked label sets, coarsest first.
    ///
    /// Unranked label sets are excluded. Fails with [`Error::DuplicateRank`]
    /// when two participating label sets share a rank, since their relative
    /// range order would then depend on input order.
    pub fn ranked_labelset_names(&self) -> Result<Vec<String>> {
        let mut ranked: Vec<(&str, i64)> = self
            .labelsets
            .iter()
            .filter_map(|ls| ls.rank.map(|r| (ls.name.as_str(), r)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        for pair in ranked.windows(2) {
            if pair[0].1 == pair[1].1 {
                return Err(Error::DuplicateRank {
                    rank: pair[0].1,
                    first: pair[0].0.to_string(),
                    second: pair[1].0.to_string(),
                });
            }
        }

        Ok(ranked.into_iter().map(|(name, _)| name.to_string()).collect())
    }

    /// Total number of annotated nodes.
    pub fn annotation_count(&self) -> u64 {
        self.annotations.len() as u64
    }

    /// Number of annotated nodes in one label set.
    ///
    /// A label set with no annotations counts as zero; it still occupies a
    /// slot in the range ordering.
    pub fn annotation_count_for(&self, labelset: &str) -> u64 {
        self.annotations
            .iter()
            .filter(|a| a.labelset == labelset)
            .count() as u64
    }
}
