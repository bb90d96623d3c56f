//! The drawing surface: a fixed-size frame display that turns pointer drags
//! into committed rectangles.
//!
//! ## Module Structure
//!
//! - [`session`] - The single per-session state object ([`AnnotationSession`])
//! - [`gesture`] - Idle/Dragging state machine over pointer events
//! - [`input`] - Mouse-to-surface pointer translation
//! - [`rendering`] - Frame sprite and ROI gizmo rendering
//! - [`blank`] - Texture shown before the first frame loads
//! - [`camera`] / [`params`] - Camera and cursor helpers

mod blank;
mod camera;
pub mod gesture;
mod input;
mod params;
mod rendering;
mod session;


pub use session::AnnotationSession;

use bevy::prelude::*;

use crate::common::SurfaceSize;

pub struct SurfacePlugin;

impl Plugin for SurfacePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AnnotationSession::new(SurfaceSize::default()))
            .init_resource::<rendering::RoiStyle>()
            .init_gizmo_group::<rendering::RoiGizmoGroup>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    rendering::configure_roi_gizmos,
                    (blank::setup_blank_frame, rendering::spawn_frame_sprite).chain(),
                ),
            )
            .add_systems(
                Update,
                (
                    input::handle_surface_pointer,
                    rendering::sync_frame_sprite.run_if(resource_changed::<AnnotationSession>),
                    rendering::draw_surface_border,
                    rendering::draw_committed_rois,
                    rendering::draw_roi_preview,
                )
                    .chain(),
            );
    }
}
