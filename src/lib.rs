//! DetPost is a post-processing pipeline for single-stage object detectors.
//!
//! It decodes a flat `[1, 4 + classes, anchors]` output tensor into box
//! candidates, filters them by a confidence threshold, removes duplicate
//! detections with greedy per-class non-maximum suppression, and emits
//! center-form detection records, with optional parallel suppression via
//! the `rayon` feature.

pub mod classes;
mod config;
mod decode;
mod detect;
pub mod geom;
mod suppress;
mod tensor;
pub(crate) mod trace;
pub mod util;
pub mod wire;

pub use config::PostConfig;
pub use decode::extract_candidates;
pub use detect::{Candidate, Detection, DetectionContext, Infer, Postprocessor, RawOutput};
pub use geom::Rect;
pub use suppress::suppress;
pub use tensor::OutputView;
pub use util::{DetPostError, DetPostResult};
