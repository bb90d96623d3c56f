//! Surface rendering: the frame sprite plus ROI outlines drawn with gizmos.
//!
//! Gizmos are immediate mode, so every frame is a full repaint: frame sprite,
//! then each committed rectangle, then the in-progress preview on top.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::constants::ROI_STROKE_WIDTH;
use crate::roi::RoiRect;

use super::blank::BlankFrame;
use super::session::AnnotationSession;

/// Custom gizmo group for ROI outlines
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct RoiGizmoGroup;

/// Marker for the sprite that displays the current frame
#[derive(Component)]
pub struct FrameSprite;

/// Outline colors for the two rectangle states
#[derive(Resource)]
pub struct RoiStyle {
    pub committed: Color,
    pub preview: Color,
    pub border: Color,
}

impl Default for RoiStyle {
    fn default() -> Self {
        Self {
            committed: Color::srgb(1.0, 0.0, 0.0),
            preview: Color::srgb(1.0, 0.85, 0.1),
            border: Color::srgb(0.35, 0.35, 0.4),
        }
    }
}

pub fn configure_roi_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<RoiGizmoGroup>();
    config.line.width = ROI_STROKE_WIDTH;
}

/// Spawn the frame sprite, showing the blank texture until a frame arrives.
pub fn spawn_frame_sprite(
    mut commands: Commands,
    session: Res<AnnotationSession>,
    blank: Res<BlankFrame>,
) {
    commands.spawn((
        Sprite {
            image: blank.handle.clone(),
            // Frames are stretched to the surface, not shown at native size
            custom_size: Some(session.surface.as_vec2()),
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        FrameSprite,
    ));
}

/// Point the frame sprite at the session's current frame
pub fn sync_frame_sprite(
    session: Res<AnnotationSession>,
    blank: Res<BlankFrame>,
    mut sprites: Query<&mut Sprite, With<FrameSprite>>,
) {
    let target = session.frame().unwrap_or(&blank.handle);
    for mut sprite in sprites.iter_mut() {
        if sprite.image != *target {
            sprite.image = target.clone();
        }
    }
}

fn draw_rect(
    gizmos: &mut Gizmos<RoiGizmoGroup>,
    session: &AnnotationSession,
    rect: &RoiRect,
    color: Color,
) {
    let center = session.surface.surface_to_world(rect.center());
    gizmos.rect_2d(Isometry2d::from_translation(center), rect.size(), color);
}

pub fn draw_surface_border(
    mut gizmos: Gizmos<RoiGizmoGroup>,
    session: Res<AnnotationSession>,
    style: Res<RoiStyle>,
) {
    gizmos.rect_2d(
        Isometry2d::from_translation(Vec2::ZERO),
        session.surface.as_vec2(),
        style.border,
    );
}

pub fn draw_committed_rois(
    mut gizmos: Gizmos<RoiGizmoGroup>,
    session: Res<AnnotationSession>,
    style: Res<RoiStyle>,
) {
    for rect in session.rois.iter() {
        draw_rect(&mut gizmos, &session, rect, style.committed);
    }
}

pub fn draw_roi_preview(
    mut gizmos: Gizmos<RoiGizmoGroup>,
    session: Res<AnnotationSession>,
    style: Res<RoiStyle>,
) {
    let Some(rect) = session.preview() else {
        return;
    };

    // Zero-area previews render as a line
    draw_rect(&mut gizmos, &session, &rect, style.preview);
}
