//! Pixel-space rectangle geometry.

use std::fmt;

use bevy::math::{UVec2, Vec2};

/// A committed region of interest in surface pixel space.
///
/// Always stored in canonical form: top-left anchor with non-negative
/// width and height, regardless of the drag direction that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoiRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RoiRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the canonical rectangle spanned by two arbitrary corner points.
    pub fn from_corners(a: UVec2, b: UVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// A zero-width or zero-height rectangle (e.g. a click without movement).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn max(&self) -> UVec2 {
        UVec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

impl fmt::Display for RoiRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
