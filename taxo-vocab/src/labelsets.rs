//! Label-set abbreviation symbol table
//!
//! Cell set accessions encode their label-set tier as a short abbreviation
//! (the middle field of `CS20230722_SUBCL_0002`). This module holds the
//! canonical BICAN table. Taxonomies that predate it carry their own
//! abbreviations; the allocation engine accepts a per-taxonomy table and
//! falls back to this one.
//!
//! The table is shared by every namespace: abbreviations are a property of
//! the taxonomy format, not of the ontology the identifiers land in.

/// Neighborhood tier abbreviation
pub const NEIGH: &str = "NEIGH";

/// Class tier abbreviation
pub const CLASS: &str = "CLASS";

/// Subclass tier abbreviation
pub const SUBCL: &str = "SUBCL";

/// Group tier abbreviation
pub const GROUP: &str = "GROUP";

/// Cluster tier abbreviation
pub const CLUST: &str = "CLUST";

/// Map a label-set abbreviation to its full label-set name.
///
/// Returns `None` for abbreviations outside the fixed symbol table.
pub fn labelset_for_symbol(symbol: &str) -> Option<&'static str> {
    match symbol {
        NEIGH => Some("Neighborhood"),
        CLASS => Some("Class"),
        SUBCL => Some("Subclass"),
        GROUP => Some("Group"),
        CLUST => Some("Cluster"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols_resolve() {
        assert_eq!(labelset_for_symbol("NEIGH"), Some("Neighborhood"));
        assert_eq!(labelset_for_symbol("CLASS"), Some("Class"));
        assert_eq!(labelset_for_symbol("SUBCL"), Some("Subclass"));
        assert_eq!(labelset_for_symbol("GROUP"), Some("Group"));
        assert_eq!(labelset_for_symbol("CLUST"), Some("Cluster"));
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(labelset_for_symbol("CLUS"), None);
        assert_eq!(labelset_for_symbol(""), None);
        assert_eq!(labelset_for_symbol("class"), None);
    }
}
