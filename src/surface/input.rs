//! Pointer handling for the drawing surface.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::common::SurfaceSize;
use crate::roi::RoiCommitted;
use crate::ui::DialogState;

use super::gesture::{DragGesture, GestureOutcome, PointerEvent};
use super::params::{is_cursor_over_ui, CameraParams};
use super::session::AnnotationSession;

/// Press event for a just-pressed button.
///
/// Only starts a drag on the surface itself, and never while `blocked`
/// (cursor over the panel or a modal open).
pub fn press_event(
    world_pos: Option<Vec2>,
    just_pressed: bool,
    blocked: bool,
    surface: SurfaceSize,
) -> Option<PointerEvent> {
    if !just_pressed || blocked {
        return None;
    }
    world_pos
        .and_then(|p| surface.world_to_surface(p))
        .map(PointerEvent::Press)
}

/// Move or release event for an in-progress drag.
///
/// The pointer is clamped to the surface edges. With no cursor position
/// (outside the window) the last known point is used. Moves to the current
/// point are dropped.
pub fn drag_event(
    world_pos: Option<Vec2>,
    pressed: bool,
    surface: SurfaceSize,
    gesture: &DragGesture,
) -> Option<PointerEvent> {
    let current = gesture.current()?;
    let point = world_pos
        .map(|p| surface.world_to_surface_clamped(p))
        .unwrap_or(current);

    if !pressed {
        return Some(PointerEvent::Release(point));
    }
    (point != current).then_some(PointerEvent::Move(point))
}

/// Translate mouse input into surface pointer events.
pub fn handle_surface_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
    mut session: ResMut<AnnotationSession>,
    mut committed: MessageWriter<RoiCommitted>,
) {
    let surface = session.surface;
    let world_pos = camera.cursor_world_pos();
    let just_pressed = mouse_button.just_pressed(MouseButton::Left);
    let blocked = just_pressed && (dialog_state.any_modal_open || is_cursor_over_ui(&mut contexts));

    if let Some(event) = press_event(world_pos, just_pressed, blocked, surface) {
        session.apply_pointer(event);
    }

    let Some(event) = drag_event(
        world_pos,
        mouse_button.pressed(MouseButton::Left),
        surface,
        &session.gesture,
    ) else {
        return;
    };

    match session.apply_pointer(event) {
        GestureOutcome::Committed(rect) => {
            committed.write(RoiCommitted { rect });
        }
        GestureOutcome::Degenerate => {
            debug!("Ignored zero-area drag at {:?}", event);
        }
        _ => {}
    }
}
