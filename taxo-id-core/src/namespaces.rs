//! Production namespace presets.
//!
//! Assembles [`NamespaceConfig`] values for the three published namespaces
//! from the constants in `taxo-vocab`. Adding a namespace is a data change
//! here and in the vocab crate, not an engine change.

use crate::accession::SymbolTable;
use crate::allocator::NamespaceConfig;
use crate::ranges::LayoutSpec;
use taxo_vocab::{cl, clm, pcl};

fn prefixes(spellings: &[&str]) -> Vec<String> {
    spellings.iter().map(|s| s.to_string()).collect()
}

/// General-purpose Cell Ontology class namespace: per-label-set class
/// ranges only; marker sets use the CLM id space.
pub fn cl_namespace() -> NamespaceConfig {
    NamespaceConfig {
        name: "CL".to_string(),
        iri_base: cl::IRI_BASE.to_string(),
        curie_prefix: cl::CURIE_PREFIX.to_string(),
        prefixes: prefixes(cl::PREFIXES),
        base: cl::ID_RANGE_BASE,
        spare_factor: cl::SPARE_FACTOR,
        granularity: 1,
        layout: LayoutSpec::ClassesOnly,
        symbols: SymbolTable::canonical(),
    }
}

/// Cell Ontology marker-gene-set namespace: the per-label-set walk
/// allocates marker-set ids directly, with NS-Forest, within-subclass, and
/// evidence ranges stacked behind it.
pub fn clm_namespace() -> NamespaceConfig {
    NamespaceConfig {
        name: "CLM".to_string(),
        iri_base: clm::IRI_BASE.to_string(),
        curie_prefix: clm::CURIE_PREFIX.to_string(),
        prefixes: prefixes(clm::PREFIXES),
        base: clm::ID_RANGE_BASE,
        spare_factor: clm::SPARE_FACTOR,
        granularity: 1,
        layout: LayoutSpec::MarkerPrimary {
            nsf_gap: clm::NSF_RANGE_GAP,
        },
        symbols: SymbolTable::canonical(),
    }
}

/// Provisional Cell Ontology namespace: class ranges, a fixed dataset
/// block, and the full marker-set range stack.
pub fn pcl_namespace() -> NamespaceConfig {
    NamespaceConfig {
        name: "PCL".to_string(),
        iri_base: pcl::IRI_BASE.to_string(),
        curie_prefix: pcl::CURIE_PREFIX.to_string(),
        prefixes: prefixes(pcl::PREFIXES),
        base: pcl::ID_RANGE_BASE,
        spare_factor: pcl::SPARE_FACTOR,
        granularity: 1,
        layout: LayoutSpec::Full {
            dataset_slots: pcl::DATASET_SLOTS,
        },
        symbols: SymbolTable::canonical(),
    }
}
