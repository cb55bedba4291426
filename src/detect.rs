//! Pipeline types and the per-frame entry points.
//!
//! `Postprocessor` is the pure decode/suppress/encode pass over an already
//! obtained output tensor. `DetectionContext` additionally owns the
//! inference session behind the [`Infer`] seam and offers the
//! availability-first frame boundary: any per-frame failure degrades to an
//! empty result instead of interrupting the camera loop.

use crate::config::PostConfig;
use crate::decode::extract_candidates;
use crate::geom::Rect;
use crate::suppress::suppress;
use crate::tensor::OutputView;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::DetPostResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Intermediate detection candidate, top-left/extent box form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Class index, 0-based.
    pub class_id: usize,
    /// Best class score for this anchor, strictly above the confidence
    /// threshold.
    pub confidence: f32,
    /// Box in top-left/extent form, network input pixel space.
    pub rect: Rect,
}

/// Final detection record, center box form. The only entity exposed to
/// the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection {
    /// Class index, 0-based.
    pub class_id: usize,
    /// Confidence in `(threshold, 1]`.
    pub confidence: f32,
    /// Box center x, network input pixel space.
    pub cx: f32,
    /// Box center y, network input pixel space.
    pub cy: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
}

impl Detection {
    pub(crate) fn from_candidate(candidate: &Candidate) -> Self {
        let (cx, cy) = candidate.rect.center();
        Self {
            class_id: candidate.class_id,
            confidence: candidate.confidence,
            cx,
            cy,
            width: candidate.rect.width,
            height: candidate.rect.height,
        }
    }
}

/// Raw network output: flat row-major buffer plus its declared shape.
///
/// `rows = 4 + num_classes`, `cols = num_anchors`. Produced by an
/// [`Infer`] implementation from the `[1, rows, cols]` output tensor.
#[derive(Clone, Debug)]
pub struct RawOutput {
    /// Flat row-major values.
    pub data: Vec<f32>,
    /// Channel count.
    pub rows: usize,
    /// Anchor count.
    pub cols: usize,
}

impl RawOutput {
    /// Borrows the buffer as a validated [`OutputView`].
    pub fn view(&self) -> DetPostResult<OutputView<'_>> {
        OutputView::new(&self.data, self.rows, self.cols)
    }
}

/// The opaque external inference call.
///
/// Implementations wrap whatever runtime executes the network. The input
/// is the normalized `[1, 3, n, n]` channel-first tensor produced by the
/// external frame normalizer; the output is the flat detector head with
/// its shape. A session that is not ready yet should return
/// [`DetPostError::NotReady`](crate::DetPostError::NotReady); runtime
/// failures map to [`DetPostError::Inference`](crate::DetPostError::Inference).
pub trait Infer {
    /// Runs the network on one normalized frame tensor.
    fn infer(&self, input: &[f32]) -> DetPostResult<RawOutput>;
}

/// Pure post-processing pass: decode, suppress, encode.
#[derive(Clone, Copy, Debug, Default)]
pub struct Postprocessor {
    config: PostConfig,
}

impl Postprocessor {
    /// Creates a postprocessor with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: PostConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PostConfig {
        &self.config
    }

    /// Runs the full pass over one frame's output tensor.
    ///
    /// All state is local to the call, so concurrent invocations on
    /// independent frames are safe.
    pub fn run(&self, output: &OutputView<'_>) -> Vec<Detection> {
        let _span = trace_span!(
            "postprocess",
            anchors = output.cols(),
            classes = output.num_classes()
        )
        .entered();

        let candidates = extract_candidates(output, &self.config);
        let candidate_count = candidates.len();
        let kept = suppress(candidates, self.config.nms_threshold);
        trace_event!(
            "postprocess_done",
            candidates = candidate_count,
            kept = kept.len()
        );

        kept.iter().map(Detection::from_candidate).collect()
    }
}

/// Explicit per-application detection context.
///
/// Owns the loaded inference session and the pipeline configuration;
/// created once by the surrounding application and passed by reference
/// into each per-frame call. This replaces the process-global session
/// handle of the legacy design with an explicit lifecycle.
#[derive(Debug)]
pub struct DetectionContext<S> {
    session: S,
    post: Postprocessor,
}

impl<S: Infer> DetectionContext<S> {
    /// Wraps a ready session with default pipeline parameters.
    pub fn new(session: S) -> Self {
        Self {
            session,
            post: Postprocessor::new(),
        }
    }

    /// Replaces the pipeline configuration.
    pub fn with_config(mut self, config: PostConfig) -> Self {
        self.post = self.post.with_config(config);
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PostConfig {
        self.post.config()
    }

    /// Runs inference plus post-processing, reporting every failure.
    ///
    /// Callers that must distinguish "no detections" from "not ready" or
    /// "bad output shape" use this variant.
    pub fn try_process_frame(&self, tensor: &[f32]) -> DetPostResult<Vec<Detection>> {
        let raw = self.session.infer(tensor)?;
        let view = raw.view()?;
        Ok(self.post.run(&view))
    }

    /// Runs one frame, degrading every failure to an empty result.
    ///
    /// The camera loop keeps rendering regardless of per-frame errors; a
    /// fresh frame arrives shortly, so no retry is attempted either.
    pub fn process_frame(&self, tensor: &[f32]) -> Vec<Detection> {
        match self.try_process_frame(tensor) {
            Ok(detections) => detections,
            Err(err) => {
                trace_warn!("frame_degraded", error = err.to_string().as_str());
                Vec::new()
            }
        }
    }
}
