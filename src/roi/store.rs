//! Append-only storage for committed rectangles.

use super::rect::RoiRect;

/// Ordered list of rectangles committed during this session.
/// Rectangles are only ever appended, in commit order.
#[derive(Debug, Clone, Default)]
pub struct RoiStore {
    rois: Vec<RoiRect>,
}

impl RoiStore {
    pub fn push(&mut self, rect: RoiRect) {
        self.rois.push(rect);
    }

    pub fn len(&self) -> usize {
        self.rois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rois.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoiRect> {
        self.rois.iter()
    }

    pub fn as_slice(&self) -> &[RoiRect] {
        &self.rois
    }
}
