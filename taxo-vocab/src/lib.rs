//! Ontology Vocabulary Constants and Namespace Parameters
//!
//! This crate provides a centralized location for the ontology namespace
//! constants used throughout identifier allocation: IRI bases, CURIE
//! prefixes, recognized prefix spellings, and the per-namespace allocation
//! parameters (range base offsets, spare-capacity factors, boundary
//! granularity).
//!
//! # Organization
//!
//! Constants are organized by namespace:
//! - `cl` - general-purpose Cell Ontology class namespace
//! - `clm` - Cell Ontology marker-gene-set namespace
//! - `pcl` - Provisional Cell Ontology namespace
//! - `labelsets` - label-set abbreviation symbol table
//!
//! Allocation parameters live here rather than in the engine so that a base
//! bump or a new namespace is a data change in one crate.

pub mod labelsets;

/// General-purpose Cell Ontology class namespace (CL)
pub mod cl {
    /// Full IRI base for CL terms
    pub const IRI_BASE: &str = "http://purl.obolibrary.org/obo/CL_";

    /// CURIE prefix for CL terms
    pub const CURIE_PREFIX: &str = "CL:";

    /// All prefix spellings recognized as CL identifiers
    pub const PREFIXES: &[&str] = &[
        "http://purl.obolibrary.org/obo/CL_",
        "CL:",
        "CL_",
        "http://purl.obolibrary.org/obo/cl/",
    ];

    /// First identifier of the automatically allocated CL range.
    ///
    /// Identifiers below this point are manually managed; see the
    /// `BICAN, automatic generation` block in `cl-idranges.owl` in the
    /// Cell Ontology repository.
    pub const ID_RANGE_BASE: u64 = 4_310_000;

    /// Spare-capacity multiplier applied to raw node counts (%15 headroom)
    pub const SPARE_FACTOR: f64 = 1.15;
}

/// Cell Ontology marker-gene-set namespace (CLM)
pub mod clm {
    /// Full IRI base for CLM terms
    pub const IRI_BASE: &str = "http://purl.obolibrary.org/obo/CLM_";

    /// CURIE prefix for CLM terms
    pub const CURIE_PREFIX: &str = "CLM:";

    /// All prefix spellings recognized as CLM identifiers
    pub const PREFIXES: &[&str] = &[
        "http://purl.obolibrary.org/obo/CLM_",
        "CLM:",
        "CLM_",
        "http://purl.obolibrary.org/obo/clm/",
    ];

    /// First identifier of the automatically allocated CLM range.
    ///
    /// The 5000000-6000000 block is shared by all BICAN ontologies.
    pub const ID_RANGE_BASE: u64 = 5_050_000;

    /// Spare-capacity multiplier applied to raw node counts (%10 headroom)
    pub const SPARE_FACTOR: f64 = 1.10;

    /// Unrounded gap between the marker-set walk and the NS-Forest range
    pub const NSF_RANGE_GAP: u64 = 10;
}

/// Provisional Cell Ontology namespace (PCL)
pub mod pcl {
    /// Full IRI base for PCL terms
    pub const IRI_BASE: &str = "http://purl.obolibrary.org/obo/PCL_";

    /// CURIE prefix for PCL terms
    pub const CURIE_PREFIX: &str = "PCL:";

    /// All prefix spellings recognized as PCL identifiers, including the
    /// individuals prefix
    pub const PREFIXES: &[&str] = &[
        "http://purl.obolibrary.org/obo/PCL_",
        "PCL:",
        "PCL_",
        "http://purl.obolibrary.org/obo/pcl/",
        "PCL_INDV:",
    ];

    /// First identifier of the automatically allocated PCL range
    pub const ID_RANGE_BASE: u64 = 160_000;

    /// Spare-capacity multiplier applied to raw node counts (%50 headroom)
    pub const SPARE_FACTOR: f64 = 1.50;

    /// Number of identifier slots reserved for dataset individuals
    pub const DATASET_SLOTS: u64 = 50;
}

/// Width of a rendered ontology term identifier (zero-padded digits)
pub const TERM_ID_WIDTH: usize = 7;
