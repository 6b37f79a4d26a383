use serde::{Deserialize, Serialize};

/// Axis-aligned screen rectangle in pixel space.
///
/// Stored as top-left corner plus size (TLWH). Button regions are usually
/// written as two corners, see [`Rect::from_tlbr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// True when the rectangle has no interior (zero, negative or non-finite size).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
    }

    /// Strict interior test: points on the border are outside.
    ///
    /// A degenerate rectangle contains nothing.
    pub fn contains_strict(&self, px: f32, py: f32) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let [x1, y1, x2, y2] = self.to_tlbr();
        x1 < px && px < x2 && y1 < py && py < y2
    }
}
