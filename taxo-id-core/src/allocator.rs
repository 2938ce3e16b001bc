//! The namespace id allocator.
//!
//! One parameterized engine covers every namespace: which ranges exist, how
//! much spare capacity they reserve, and where they start are all
//! configuration ([`NamespaceConfig`]), not code. Construction computes the
//! whole range layout eagerly; every per-node lookup afterwards is O(1)
//! arithmetic against the precomputed bases.
//!
//! An allocator holds no mutable state and may be shared read-only across
//! threads. It is re-derived from the taxonomy summary on every run rather
//! than persisted — identifiers stay stable because the arithmetic is
//! deterministic and each range reserves spare capacity for growth.

use tracing::debug;

use crate::accession::{parse_accession, SymbolTable};
use crate::error::{Error, Result};
use crate::ranges::{build_layout, LayoutSpec, RangeLayout};
use crate::taxonomy::Taxonomy;
use crate::term_id::TermId;

/// Everything that distinguishes one namespace from another.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceConfig {
    /// Short namespace name, e.g. `PCL`
    pub name: String,
    /// Full IRI base for rendered terms
    pub iri_base: String,
    /// CURIE prefix for rendered terms
    pub curie_prefix: String,
    /// All prefix spellings recognized as belonging to this namespace
    pub prefixes: Vec<String>,
    /// First identifier of the automatically allocated range
    pub base: u64,
    /// Spare-capacity multiplier applied to annotation counts
    pub spare_factor: f64,
    /// Trailing-zero count every range boundary is rounded up to
    pub granularity: u32,
    /// Which derived ranges this namespace stacks after the walk
    pub layout: LayoutSpec,
    /// Accession abbreviation table for the taxonomy being processed
    pub symbols: SymbolTable,
}

impl NamespaceConfig {
    /// Replace the accession symbol table, for taxonomies that predate the
    /// canonical abbreviations.
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }
}

/// Allocates stable ontology identifiers for one namespace and one taxonomy.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    config: NamespaceConfig,
    layout: RangeLayout,
}

impl IdAllocator {
    /// Build an allocator, computing all range boundaries up front.
    ///
    /// Fails with [`Error::DuplicateRank`] when the taxonomy's ranked label
    /// sets do not order unambiguously.
    pub fn new(config: NamespaceConfig, taxonomy: &Taxonomy) -> Result<Self> {
        let ranked = taxonomy.ranked_labelset_names()?;
        let counts = ranked
            .iter()
            .map(|ls| (ls.clone(), taxonomy.annotation_count_for(ls)))
            .collect();
        let layout = build_layout(
            &ranked,
            &counts,
            taxonomy.annotation_count(),
            config.base,
            config.spare_factor,
            config.granularity,
            &config.layout,
        );
        debug!(
            namespace = config.name.as_str(),
            base = config.base,
            labelsets = ranked.len(),
            annotations = taxonomy.annotation_count(),
            "constructed id allocator"
        );
        Ok(Self { config, layout })
    }

    /// The namespace configuration this allocator was built from.
    pub fn config(&self) -> &NamespaceConfig {
        &self.config
    }

    /// The precomputed range layout.
    pub fn layout(&self) -> &RangeLayout {
        &self.layout
    }

    /// Identifier within the per-label-set walk, before any purpose
    /// displacement.
    fn walk_term(&self, accession: &str) -> Result<TermId> {
        let parsed = parse_accession(accession, &self.config.symbols)?;
        let range_base = self
            .layout
            .class_ranges
            .get(&parsed.labelset)
            .copied()
            .ok_or_else(|| Error::unknown_labelset(&parsed.labelset))?;
        Ok(TermId(range_base + parsed.node_index))
    }

    /// Walk identifier displaced into a derived range.
    fn displaced_term(
        &self,
        accession: &str,
        range_base: Option<u64>,
        purpose: &'static str,
    ) -> Result<TermId> {
        let range_base = range_base
            .ok_or_else(|| Error::range_not_allocated(&self.config.name, purpose))?;
        let walk = self.walk_term(accession)?;
        Ok(TermId(walk.as_u64() + (range_base - self.layout.base)))
    }

    /// Class term for a taxonomy node.
    pub fn class_term(&self, accession: &str) -> Result<TermId> {
        if matches!(self.config.layout, LayoutSpec::MarkerPrimary { .. }) {
            return Err(Error::range_not_allocated(&self.config.name, "class"));
        }
        self.walk_term(accession)
    }

    /// Class identifier as a zero-padded 7-digit string.
    pub fn class_id(&self, accession: &str) -> Result<String> {
        self.class_term(accession)?.padded()
    }

    /// Marker-gene-set term for a taxonomy node.
    pub fn marker_gene_set_term(&self, accession: &str) -> Result<TermId> {
        self.displaced_term(accession, self.layout.marker_base, "marker gene set")
    }

    /// Marker-gene-set identifier as a zero-padded 7-digit string.
    pub fn marker_gene_set_id(&self, accession: &str) -> Result<String> {
        self.marker_gene_set_term(accession)?.padded()
    }

    /// NS-Forest marker-set term for a taxonomy node.
    pub fn nsf_marker_gene_set_term(&self, accession: &str) -> Result<TermId> {
        self.displaced_term(accession, self.layout.nsf_base, "NS-Forest marker set")
    }

    /// NS-Forest marker-set identifier as a zero-padded 7-digit string.
    pub fn nsf_marker_gene_set_id(&self, accession: &str) -> Result<String> {
        self.nsf_marker_gene_set_term(accession)?.padded()
    }

    /// Within-subclass marker-set term for a taxonomy node.
    pub fn ws_marker_gene_set_term(&self, accession: &str) -> Result<TermId> {
        self.displaced_term(
            accession,
            self.layout.ws_base,
            "within-subclass marker set",
        )
    }

    /// Within-subclass marker-set identifier as a zero-padded 7-digit string.
    pub fn ws_marker_gene_set_id(&self, accession: &str) -> Result<String> {
        self.ws_marker_gene_set_term(accession)?.padded()
    }

    /// Evidence marker-set term for a taxonomy node.
    pub fn evidence_marker_gene_set_term(&self, accession: &str) -> Result<TermId> {
        self.displaced_term(accession, self.layout.evidence_base, "evidence marker set")
    }

    /// Evidence marker-set identifier as a zero-padded 7-digit string.
    pub fn evidence_marker_gene_set_id(&self, accession: &str) -> Result<String> {
        self.evidence_marker_gene_set_term(accession)?.padded()
    }

    /// Dataset term for a dataset index within the reserved block.
    pub fn dataset_term(&self, dataset_index: u64) -> Result<TermId> {
        let base = self
            .layout
            .dataset_base
            .ok_or_else(|| Error::range_not_allocated(&self.config.name, "dataset"))?;
        if self.layout.dataset_slots == 0 {
            return Err(Error::range_not_allocated(&self.config.name, "dataset"));
        }
        if dataset_index >= self.layout.dataset_slots {
            return Err(Error::DatasetIndexOutOfBounds {
                index: dataset_index,
                max: self.layout.dataset_slots - 1,
            });
        }
        Ok(TermId(base + dataset_index))
    }

    /// Dataset identifier as a zero-padded 7-digit string.
    pub fn dataset_id(&self, dataset_index: u64) -> Result<String> {
        self.dataset_term(dataset_index)?.padded()
    }

    /// Taxonomy-level term: the first identifier of the namespace range.
    ///
    /// Retained for downstream consumers that still reference taxonomy-level
    /// individuals; node-level consumers use accessions.
    pub fn taxonomy_term(&self) -> TermId {
        TermId(self.layout.base)
    }

    /// Taxonomy-level identifier as a zero-padded 7-digit string.
    pub fn taxonomy_id(&self) -> Result<String> {
        self.taxonomy_term().padded()
    }

    /// Render a term as a CURIE under this namespace's prefix.
    pub fn curie(&self, term: TermId) -> Result<String> {
        term.curie(&self.config.curie_prefix)
    }

    /// Render a term as a fully qualified IRI under this namespace's base.
    pub fn iri(&self, term: TermId) -> Result<String> {
        term.iri(&self.config.iri_base)
    }

    /// True when `candidate` starts with any of this namespace's recognized
    /// prefix spellings.
    pub fn is_own_id(&self, candidate: &str) -> bool {
        self.config
            .prefixes
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_str()))
    }
}
