//! Main annotation panel UI orchestration.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::AppConfig;
use crate::frame::{FrameLoader, SelectCameraRequest};
use crate::roi::{ImportRoisRequest, RoiImportStatus, RoiOutputField};
use crate::surface::AnnotationSession;

use super::camera::render_camera_section;
use super::rois::render_roi_section;
use super::{CameraPanelState, RoiPanelState};

/// Main annotation panel UI system.
#[allow(clippy::too_many_arguments)]
pub fn annotation_panel_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    loader: Res<FrameLoader>,
    session: Res<AnnotationSession>,
    field: Option<Res<RoiOutputField>>,
    mut panel_state: ResMut<CameraPanelState>,
    mut select_events: MessageWriter<SelectCameraRequest>,
    mut roi_panel_state: ResMut<RoiPanelState>,
    import_status: Res<RoiImportStatus>,
    mut import_events: MessageWriter<ImportRoisRequest>,
) -> Result {
    egui::SidePanel::left("annotation_panel")
        .default_width(280.0)
        .resizable(false)
        .show(contexts.ctx_mut()?, |ui| {
            render_camera_section(
                ui,
                &config.data,
                &loader,
                &mut panel_state,
                &mut select_events,
            );

            render_roi_section(
                ui,
                &session,
                config.data.encoding,
                field.as_deref(),
                &mut roi_panel_state,
                &import_status,
                &mut import_events,
            );

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.weak(format!("v{}", env!("CARGO_PKG_VERSION")));
            });
        });
    Ok(())
}
