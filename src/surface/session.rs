//! Per-session annotation state.

use bevy::prelude::*;

use crate::common::SurfaceSize;
use crate::roi::{RoiRect, RoiStore};

use super::gesture::{DragGesture, GestureOutcome, PointerEvent};

/// Everything the annotation surface knows about the current session.
///
/// Created once at startup and discarded on exit. Pointer handling and frame
/// loading mutate it synchronously from systems; nothing here is persisted.
#[derive(Resource, Default)]
pub struct AnnotationSession {
    /// Fixed surface size, the reference for pointer mapping and encoding
    pub surface: SurfaceSize,
    /// Rectangles committed so far, in commit order
    pub rois: RoiStore,
    /// In-progress drag, if any
    pub gesture: DragGesture,
    /// Most recently loaded frame; `None` until the first successful fetch
    frame: Option<Handle<Image>>,
}

impl AnnotationSession {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            ..default()
        }
    }

    /// Feed one pointer event through the gesture, committing on release.
    pub fn apply_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let outcome = self.gesture.handle(event);
        if let GestureOutcome::Committed(rect) = outcome {
            self.rois.push(rect);
        }
        outcome
    }

    pub fn preview(&self) -> Option<RoiRect> {
        self.gesture.preview()
    }

    pub fn frame(&self) -> Option<&Handle<Image>> {
        self.frame.as_ref()
    }

    /// Replace the displayed frame, returning the previous one.
    ///
    /// Committed rectangles are kept across frame (and camera) changes.
    pub fn set_frame(&mut self, frame: Handle<Image>) -> Option<Handle<Image>> {
        self.frame.replace(frame)
    }
}
