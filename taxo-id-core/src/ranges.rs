//! Identifier range layout.
//!
//! A namespace's id space is partitioned eagerly, in one deterministic
//! sequence: per-label-set ranges first (coarsest tier to finest), then the
//! derived sub-ranges the namespace carries. Every boundary is rounded up to
//! a decimal boundary so that growth within the reserved spare capacity
//! never moves a neighbouring range.
//!
//! Sizes come from annotation counts: a label-set range reserves
//! `round_up(ceil(count * spare), granularity)` addresses; each derived
//! range reserves the same formula applied to the total annotation count.

use std::collections::HashMap;

use tracing::debug;

use crate::rounding::round_up_to_nearest;

/// Which derived ranges a namespace stacks after its per-label-set walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSpec {
    /// Per-label-set class ranges only; marker sets live elsewhere.
    ClassesOnly,
    /// The per-label-set walk itself allocates marker-gene-set ids; the
    /// NS-Forest range starts `nsf_gap` addresses past the walk (unrounded),
    /// followed by the within-subclass and evidence ranges.
    MarkerPrimary { nsf_gap: u64 },
    /// Class ranges, then a fixed dataset block, then marker, NS-Forest,
    /// within-subclass, and evidence ranges.
    Full { dataset_slots: u64 },
}

/// Precomputed range bases for one namespace and one taxonomy.
///
/// Immutable after construction; all lookups against it are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLayout {
    /// Namespace base offset the whole layout starts at
    pub base: u64,
    /// Walk order, coarsest first (kept for reporting)
    pub labelsets: Vec<String>,
    /// Per-label-set range base offsets
    pub class_ranges: HashMap<String, u64>,
    /// First free address after the per-label-set walk
    pub first_free: u64,
    /// Dataset block base, when the namespace reserves one
    pub dataset_base: Option<u64>,
    /// Number of dataset slots reserved
    pub dataset_slots: u64,
    /// Marker-gene-set range base
    pub marker_base: Option<u64>,
    /// NS-Forest marker-set range base
    pub nsf_base: Option<u64>,
    /// Within-subclass marker-set range base
    pub ws_base: Option<u64>,
    /// Evidence marker-set range base
    pub evidence_base: Option<u64>,
}

/// Spare-adjusted size of a range holding `count` nodes: never smaller than
/// `count` itself.
fn spare_adjusted(count: u64, spare_factor: f64) -> u64 {
    (count as f64 * spare_factor).ceil() as u64
}

/// Lay out a namespace's id space for one taxonomy.
///
/// `counts` maps label-set name to its annotation count; a ranked label set
/// absent from the map occupies a zero-width slot in the walk, keeping its
/// address stable should it gain members later.
pub fn build_layout(
    ranked_labelsets: &[String],
    counts: &HashMap<String, u64>,
    total_annotations: u64,
    base: u64,
    spare_factor: f64,
    granularity: u32,
    spec: &LayoutSpec,
) -> RangeLayout {
    let mut class_ranges = HashMap::new();
    let mut offset = base;
    for labelset in ranked_labelsets {
        class_ranges.insert(labelset.clone(), offset);
        let count = counts.get(labelset).copied().unwrap_or(0);
        offset += round_up_to_nearest(spare_adjusted(count, spare_factor), granularity);
    }
    let first_free = offset;

    let derived_size = spare_adjusted(total_annotations, spare_factor);
    let stack = |from: u64| round_up_to_nearest(from + derived_size, granularity);

    let mut layout = RangeLayout {
        base,
        labelsets: ranked_labelsets.to_vec(),
        class_ranges,
        first_free,
        dataset_base: None,
        dataset_slots: 0,
        marker_base: None,
        nsf_base: None,
        ws_base: None,
        evidence_base: None,
    };

    match *spec {
        LayoutSpec::ClassesOnly => {}
        LayoutSpec::MarkerPrimary { nsf_gap } => {
            // The walk itself is the marker-set range, so its displacement
            // from the namespace base is zero.
            layout.marker_base = Some(base);
            let nsf = first_free + nsf_gap;
            let ws = stack(nsf);
            layout.nsf_base = Some(nsf);
            layout.ws_base = Some(ws);
            layout.evidence_base = Some(stack(ws));
        }
        LayoutSpec::Full { dataset_slots } => {
            let dataset = first_free + 1;
            // Dataset block boundary always rounds to the nearest hundred,
            // independent of the namespace granularity.
            let marker = round_up_to_nearest(dataset + dataset_slots, 2);
            let nsf = stack(marker);
            let ws = stack(nsf);
            layout.dataset_base = Some(dataset);
            layout.dataset_slots = dataset_slots;
            layout.marker_base = Some(marker);
            layout.nsf_base = Some(nsf);
            layout.ws_base = Some(ws);
            layout.evidence_base = Some(stack(ws));
        }
    }

    for labelset in &layout.labelsets {
        debug!(
            labelset = labelset.as_str(),
            range_base = layout.class_ranges[labelset],
            "allocated label set range"
        );
    }
    debug!(
        first_free = layout.first_free,
        dataset = ?layout.dataset_base,
        marker = ?layout.marker_base,
        nsf = ?layout.nsf_base,
        within_subclass = ?layout.ws_base,
        evidence = ?layout.evidence_base,
        "allocated derived ranges"
    );

    layout
}

impl RangeLayout {
    /// All allocated range bases in layout order, labelled for reporting.
    pub fn ordered_bases(&self) -> Vec<(String, u64)> {
        let mut bases: Vec<(String, u64)> = self
            .labelsets
            .iter()
            .map(|ls| (ls.clone(), self.class_ranges[ls]))
            .collect();
        for (name, range_base) in [
            ("dataset", self.dataset_base),
            ("marker gene set", self.marker_base),
            ("NS-Forest marker set", self.nsf_base),
            ("within-subclass marker set", self.ws_base),
            ("evidence marker set", self.evidence_base),
        ] {
            if let Some(b) = range_base {
                // The marker-primary walk shares its base with the namespace;
                // skip the duplicate entry.
                if b != self.base || bases.is_empty() {
                    bases.push((name.to_string(), b));
                }
            }
        }
        bases
    }
}
