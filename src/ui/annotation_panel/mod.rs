//! Annotation panel UI module.
//!
//! This module provides the left-side panel for picking a camera and
//! inspecting the committed ROIs and the encoded output field.
//!
//! ## Module Structure
//!
//! - [`camera`] - Camera picker and frame status
//! - [`rois`] - Committed ROI list, stored-value import and output field value
//! - [`main_panel`] - Main panel orchestration

use bevy::prelude::*;

mod camera;
mod main_panel;
mod rois;

/// Resource holding the manual camera id input.
#[derive(Resource, Default)]
pub struct CameraPanelState {
    pub manual_camera_id: String,
}

/// Resource holding the stored-value import input.
#[derive(Resource, Default)]
pub struct RoiPanelState {
    pub import_text: String,
}

pub use main_panel::annotation_panel_ui;
