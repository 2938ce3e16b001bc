//! Error types for taxo-id-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type.
///
/// Every variant is a programmer or data error surfaced immediately to the
/// caller. An incorrect identifier corrupts a published ontology namespace,
/// so nothing here is retryable or defaulted.
#[derive(Error, Debug)]
pub enum Error {
    /// Accession string does not match `<taxonomy>_<abbr>_<index>`
    #[error("Malformed accession '{0}': expected <taxonomy>_<labelset>_<index>")]
    MalformedAccession(String),

    /// Accession carries an abbreviation outside the symbol table
    #[error("Unknown label set abbreviation '{0}'")]
    UnknownLabelSetAbbreviation(String),

    /// Two ranked label sets share a rank, making range order ambiguous
    #[error("Duplicate label set rank {rank} shared by '{first}' and '{second}'")]
    DuplicateRank {
        rank: i64,
        first: String,
        second: String,
    },

    /// Dataset index outside the reserved dataset block
    #[error("Dataset index {index} outside reserved block [0, {max}]")]
    DatasetIndexOutOfBounds { index: u64, max: u64 },

    /// Identifier does not fit the fixed-width rendering
    #[error("Identifier {0} exceeds the 7-digit term id width")]
    IdentifierOverflow(u64),

    /// Label set was not seen during allocator construction
    #[error("No id range allocated for label set '{0}'")]
    UnknownLabelSet(String),

    /// JSON taxonomy summary failed to deserialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML taxonomy summary failed to deserialize
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The namespace does not carry a range for the requested purpose
    #[error("Namespace '{namespace}' allocates no {purpose} range")]
    RangeNotAllocated {
        namespace: String,
        purpose: &'static str,
    },
}

impl Error {
    /// Create a malformed accession error
    pub fn malformed_accession(accession: impl Into<String>) -> Self {
        Error::MalformedAccession(accession.into())
    }

    /// Create an unknown abbreviation error
    pub fn unknown_abbreviation(abbr: impl Into<String>) -> Self {
        Error::UnknownLabelSetAbbreviation(abbr.into())
    }

    /// Create an unknown label set error
    pub fn unknown_labelset(name: impl Into<String>) -> Self {
        Error::UnknownLabelSet(name.into())
    }

    /// Create a range-not-allocated error
    pub fn range_not_allocated(namespace: impl Into<String>, purpose: &'static str) -> Self {
        Error::RangeNotAllocated {
            namespace: namespace.into(),
            purpose,
        }
    }
}
