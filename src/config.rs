//! Pipeline configuration.

/// Tunable parameters for one post-processing pipeline instance.
///
/// Defaults reproduce the reference YOLOv8 deployment: 640x640 input,
/// strict 0.25 confidence floor, strict 0.45 suppression IoU, and legacy
/// integer box coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostConfig {
    /// Side of the square network input, in pixels. Box coordinates in
    /// every emitted record lie in `[0, input_size]`.
    pub input_size: u32,
    /// Strict lower bound on the best class score; candidates scoring
    /// exactly this value are dropped.
    pub confidence_threshold: f32,
    /// Strict IoU bound; a same-class pair overlapping more than this
    /// loses its lower-confidence member.
    pub nms_threshold: f32,
    /// Keep sub-pixel box coordinates instead of truncating toward zero.
    ///
    /// Off by default: the legacy pipeline stored boxes as integers, and
    /// downstream consumers may depend on those exact values.
    pub subpixel: bool,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            input_size: 640,
            confidence_threshold: 0.25,
            nms_threshold: 0.45,
            subpixel: false,
        }
    }
}
