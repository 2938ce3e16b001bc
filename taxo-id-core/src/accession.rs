//! Cell set accession parsing.
//!
//! An accession is a structured string of the form
//! `<TaxonomyPrefix>_<LabelSetAbbreviation>_<NodeIndex>`, e.g.
//! `CS20230722_SUBCL_0002`. The node index may be zero-padded to any width;
//! `_01` and `_0001` denote the same node.
//!
//! Centralizes accession rules so all namespaces parse consistently.

use std::collections::HashMap;

use crate::error::{Error, Result};
use taxo_vocab::labelsets;

/// Abbreviation-to-label-set-name table used when decoding accessions.
///
/// Defaults to the canonical BICAN table from `taxo-vocab`; taxonomies with
/// their own abbreviation scheme supply a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    map: HashMap<String, String>,
}

impl SymbolTable {
    /// The canonical BICAN abbreviation table.
    pub fn canonical() -> Self {
        Self::from_pairs(
            [
                labelsets::NEIGH,
                labelsets::CLASS,
                labelsets::SUBCL,
                labelsets::GROUP,
                labelsets::CLUST,
            ]
            .iter()
            .filter_map(|abbr| {
                labelsets::labelset_for_symbol(abbr).map(|name| (*abbr, name))
            }),
        )
    }

    /// Build a table from `(abbreviation, label set name)` pairs.
    pub fn from_pairs<I, A, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, N)>,
        A: Into<String>,
        N: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(a, n)| (a.into(), n.into()))
                .collect(),
        }
    }

    /// Resolve an abbreviation to its label-set name.
    pub fn resolve(&self, abbreviation: &str) -> Option<&str> {
        self.map.get(abbreviation).map(String::as_str)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Accession parts needed by the allocation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccession {
    /// Taxonomy prefix, e.g. `CS20230722`
    pub taxonomy: String,
    /// Node index within the label set (leading zeros stripped)
    pub node_index: u64,
    /// Full label-set name resolved through the symbol table
    pub labelset: String,
}

/// Parse a `<taxonomy>_<abbr>_<index>` accession into its parts.
///
/// The abbreviation and index fields are trimmed before interpretation;
/// the index is read as base-10 with leading zeros permitted.
pub fn parse_accession(accession: &str, symbols: &SymbolTable) -> Result<ParsedAccession> {
    let parts: Vec<&str> = accession.split('_').collect();
    if parts.len() < 3 {
        return Err(Error::malformed_accession(accession));
    }

    let abbreviation = parts[1].trim();
    let index_field = parts[2].trim();

    let node_index: u64 = index_field
        .parse()
        .map_err(|_| Error::malformed_accession(accession))?;

    let labelset = symbols
        .resolve(abbreviation)
        .ok_or_else(|| Error::unknown_abbreviation(abbreviation))?;

    Ok(ParsedAccession {
        taxonomy: parts[0].to_string(),
        node_index,
        labelset: labelset.to_string(),
    })
}
