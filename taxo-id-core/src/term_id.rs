//! Typed ontology term identifier.
//!
//! `#[repr(transparent)]` + `Copy`, so wrapping the raw integer costs
//! nothing at runtime while keeping class ids, marker-set ids, and raw
//! offsets from mixing silently.

use std::fmt;

use crate::error::{Error, Result};
use taxo_vocab::TERM_ID_WIDTH;

/// Largest identifier representable in the fixed 7-digit rendering.
pub const MAX_TERM_ID: u64 = 9_999_999;

/// An allocated ontology term identifier (u64).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TermId(pub u64);

impl TermId {
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn from_u64(v: u64) -> Self {
        Self(v)
    }

    /// Render as the fixed-width zero-padded form used in published
    /// templates, e.g. `0110001`.
    ///
    /// Fails with [`Error::IdentifierOverflow`] when the value needs more
    /// than seven digits — an overflowing id means a range computation
    /// escaped its namespace and must not be published.
    pub fn padded(self) -> Result<String> {
        if self.0 > MAX_TERM_ID {
            return Err(Error::IdentifierOverflow(self.0));
        }
        Ok(format!("{:0width$}", self.0, width = TERM_ID_WIDTH))
    }

    /// Render as a CURIE under the given prefix, e.g. `PCL:0110001`.
    pub fn curie(self, prefix: &str) -> Result<String> {
        Ok(format!("{}{}", prefix, self.padded()?))
    }

    /// Render as a fully qualified IRI under the given base, e.g.
    /// `http://purl.obolibrary.org/obo/PCL_0110001`.
    pub fn iri(self, base: &str) -> Result<String> {
        Ok(format!("{}{}", base, self.padded()?))
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
