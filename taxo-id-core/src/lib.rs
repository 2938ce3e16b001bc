//! # Taxo ID Core
//!
//! Stable identifier range allocation for hierarchical cell-type
//! taxonomies.
//!
//! This crate provides:
//! - Accession parsing (`CS20230722_SUBCL_0002` → node index + label set)
//! - Deterministic partitioning of a namespace's id space into
//!   per-label-set and derived marker-set ranges
//! - O(1) per-node identifier lookups with fixed-width, CURIE, and IRI
//!   rendering
//! - Preset configurations for the CL, CLM, and PCL namespaces
//!
//! ## Design Principles
//!
//! 1. **Determinism over persistence**: no allocation state is stored; the
//!    same taxonomy summary always yields the same ranges. Stability across
//!    runs comes from spare capacity reserved at every boundary.
//! 2. **One engine, many namespaces**: namespaces differ only in
//!    configuration (`NamespaceConfig`), never in code.
//! 3. **No I/O**: callers hand in an already-deserialized taxonomy summary;
//!    the engine is pure arithmetic and safe for concurrent read-only use.
//!
//! ## Example
//!
//! ```
//! use taxo_id_core::{IdAllocator, Taxonomy, pcl_namespace};
//!
//! let taxonomy = Taxonomy::from_json_str(r#"{
//!     "labelsets": [{"name": "Class", "rank": 1}, {"name": "Cluster", "rank": 0}],
//!     "annotations": [
//!         {"cell_set_accession": "CS20230722_CLASS_01", "labelset": "Class"},
//!         {"cell_set_accession": "CS20230722_CLUST_0001", "labelset": "Cluster"}
//!     ]
//! }"#)?;
//!
//! let allocator = IdAllocator::new(pcl_namespace(), &taxonomy)?;
//! assert_eq!(allocator.class_id("CS20230722_CLASS_01")?, "0160001");
//! # Ok::<(), taxo_id_core::Error>(())
//! ```

pub mod accession;
pub mod allocator;
pub mod error;
pub mod namespaces;
pub mod ranges;
pub mod rounding;
pub mod taxonomy;
pub mod term_id;

// Re-export main types
pub use accession::{parse_accession, ParsedAccession, SymbolTable};
pub use allocator::{IdAllocator, NamespaceConfig};
pub use error::{Error, Result};
pub use namespaces::{cl_namespace, clm_namespace, pcl_namespace};
pub use ranges::{LayoutSpec, RangeLayout};
pub use rounding::round_up_to_nearest;
pub use taxonomy::{Annotation, LabelSet, Taxonomy};
pub use term_id::{TermId, MAX_TERM_ID};
