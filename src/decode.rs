//! Candidate extraction from the raw output grid.
//!
//! Each anchor contributes at most one candidate: the best-scoring class,
//! kept only if its score clears the confidence threshold strictly. The
//! scan is a plain O(anchors x classes) loop; at the expected scale
//! (<= 10^4 anchors, <= 10^2 classes) nothing smarter is warranted.

use crate::config::PostConfig;
use crate::detect::Candidate;
use crate::geom::Rect;
use crate::tensor::OutputView;

/// Decodes every anchor of `output` into confidence-filtered candidates.
///
/// Ties between class scores keep the lowest class index, because only a
/// strictly greater score displaces the running maximum. Box geometry is
/// read from channels 0..4 as center form and stored top-left; unless
/// `subpixel` is set, all four coordinates are truncated toward zero to
/// match the legacy integer box storage.
pub fn extract_candidates(output: &OutputView<'_>, config: &PostConfig) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for anchor in 0..output.cols() {
        let mut best_score = 0.0f32;
        let mut best_class = None;
        for channel in 4..output.rows() {
            let score = output.at(channel, anchor);
            if score > best_score {
                best_score = score;
                best_class = Some(channel - 4);
            }
        }

        let Some(class_id) = best_class else {
            continue;
        };
        if best_score <= config.confidence_threshold {
            continue;
        }

        let cx = output.at(0, anchor);
        let cy = output.at(1, anchor);
        let w = output.at(2, anchor);
        let h = output.at(3, anchor);
        let mut rect = Rect::from_center(cx, cy, w, h);
        if !config.subpixel {
            rect = rect.trunc();
        }

        candidates.push(Candidate {
            class_id,
            confidence: best_score,
            rect,
        });
    }

    candidates
}
