//! Pointer gesture state machine for drawing rectangles.

use bevy::math::UVec2;

use crate::roi::RoiRect;

/// Pointer input already mapped into surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(UVec2),
    Move(UVec2),
    Release(UVec2),
}

/// What a pointer event did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Event had no meaning in the current state
    Ignored,
    /// A drag began at the press point
    Started,
    /// The in-progress rectangle changed
    Preview(RoiRect),
    /// Drag finished with a non-degenerate rectangle
    Committed(RoiRect),
    /// Drag finished with zero width or height; nothing is committed
    Degenerate,
}

/// Two-state drag machine: idle, or dragging from an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging { anchor: UVec2, current: UVec2 },
}

impl DragGesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Latest pointer position of an in-progress drag
    pub fn current(&self) -> Option<UVec2> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging { current, .. } => Some(*current),
        }
    }

    /// Candidate rectangle of an in-progress drag
    pub fn preview(&self) -> Option<RoiRect> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging { anchor, current } => {
                Some(RoiRect::from_corners(*anchor, *current))
            }
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match (*self, event) {
            // A press always (re)anchors, even mid-drag
            (_, PointerEvent::Press(point)) => {
                *self = DragGesture::Dragging {
                    anchor: point,
                    current: point,
                };
                GestureOutcome::Started
            }
            (DragGesture::Idle, _) => GestureOutcome::Ignored,
            (DragGesture::Dragging { anchor, .. }, PointerEvent::Move(point)) => {
                *self = DragGesture::Dragging {
                    anchor,
                    current: point,
                };
                GestureOutcome::Preview(RoiRect::from_corners(anchor, point))
            }
            (DragGesture::Dragging { anchor, .. }, PointerEvent::Release(point)) => {
                *self = DragGesture::Idle;
                let rect = RoiRect::from_corners(anchor, point);
                if rect.is_degenerate() {
                    GestureOutcome::Degenerate
                } else {
                    GestureOutcome::Committed(rect)
                }
            }
        }
    }
}
