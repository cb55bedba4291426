//! Borrowed view over the raw detector output tensor.
//!
//! `OutputView` interprets the flat inference output as a row-major grid of
//! `rows` channels by `cols` anchors. Channels 0..4 hold box geometry
//! (center-x, center-y, width, height); channels 4.. hold one score per
//! class. Construction is the single validation point: a constructed view
//! is in-bounds by invariant and all accessors index directly.

use crate::util::{DetPostError, DetPostResult};

/// Immutable `rows x cols` view over one frame's raw output buffer.
#[derive(Copy, Clone)]
pub struct OutputView<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> OutputView<'a> {
    /// Creates a view, validating the declared shape against the buffer.
    ///
    /// Requires `rows >= 5` (four box channels plus at least one class),
    /// `cols >= 1`, and `data.len() == rows * cols`. The external inference
    /// step is trusted to produce the declared shape; a disagreement here
    /// is fatal for the frame, not for the process.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> DetPostResult<Self> {
        if rows < 5 || cols == 0 {
            return Err(DetPostError::InvalidShape { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(DetPostError::InvalidShape { rows, cols })?;
        if data.len() != expected {
            return Err(DetPostError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the channel count (`4 + num_classes`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the anchor count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of class-score channels.
    pub fn num_classes(&self) -> usize {
        self.rows - 4
    }

    /// Returns the value at `(channel, anchor)`.
    ///
    /// Both indices must be within the declared shape.
    #[inline]
    pub fn at(&self, channel: usize, anchor: usize) -> f32 {
        debug_assert!(channel < self.rows && anchor < self.cols);
        self.data[channel * self.cols + anchor]
    }

    /// Returns the backing slice.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}
