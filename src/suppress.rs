//! Greedy per-class non-maximum suppression.
//!
//! Classes never interact: a box can only be suppressed by a kept box of
//! the same class. That makes per-class decomposition exact, so the
//! `rayon` feature may fan the class groups out across threads without
//! changing the result.

use std::collections::BTreeMap;

use crate::detect::Candidate;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Removes near-duplicate candidates, keeping the highest-confidence
/// representative of each overlapping same-class cluster.
///
/// Candidates are assumed to be confidence-filtered already; no score
/// check is re-applied here. Within a class, candidates are processed in
/// descending confidence order (stable, so equal scores keep their input
/// order) and discarded iff they overlap an already-kept box strictly
/// more than `nms_threshold`. The concatenation across classes follows
/// ascending class id, but callers must not rely on any output order.
pub fn suppress(candidates: Vec<Candidate>, nms_threshold: f32) -> Vec<Candidate> {
    let mut groups: BTreeMap<usize, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        groups.entry(candidate.class_id).or_default().push(candidate);
    }
    let groups: Vec<Vec<Candidate>> = groups.into_values().collect();

    #[cfg(feature = "rayon")]
    let kept: Vec<Vec<Candidate>> = groups
        .into_par_iter()
        .map(|group| suppress_class(group, nms_threshold))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let kept: Vec<Vec<Candidate>> = groups
        .into_iter()
        .map(|group| suppress_class(group, nms_threshold))
        .collect();

    kept.into_iter().flatten().collect()
}

fn suppress_class(mut group: Vec<Candidate>, nms_threshold: f32) -> Vec<Candidate> {
    // Stable sort: equal confidences keep first-seen priority, which makes
    // the greedy pass deterministic.
    group.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<Candidate> = Vec::new();
    'outer: for candidate in group {
        for survivor in &kept {
            if survivor.rect.iou(&candidate.rect) > nms_threshold {
                continue 'outer;
            }
        }
        kept.push(candidate);
    }
    kept
}
