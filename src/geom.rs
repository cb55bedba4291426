//! Axis-aligned box geometry shared across the pipeline stages.

/// Axis-aligned box in top-left/extent form, in network input pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Box width, non-negative for decoded candidates.
    pub width: f32,
    /// Box height, non-negative for decoded candidates.
    pub height: f32,
}

impl Rect {
    /// Builds a rect from a center-form box.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Returns the center point `(cx, cy)`.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the box area; zero for degenerate boxes.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Truncates all four fields toward zero, matching integer box storage.
    pub fn trunc(self) -> Self {
        Self {
            x: self.x.trunc(),
            y: self.y.trunc(),
            width: self.width.trunc(),
            height: self.height.trunc(),
        }
    }

    /// Computes the intersection-over-union with another rect.
    ///
    /// A degenerate (zero-area) box yields 0 against anything, including
    /// another degenerate box, so it can never trigger suppression.
    pub fn iou(&self, other: &Rect) -> f32 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
        let union = self.area() + other.area() - intersection;
        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}
