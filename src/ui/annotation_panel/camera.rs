//! Camera picker and frame status UI.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::config::AppConfigData;
use crate::frame::{FrameLoader, SelectCameraRequest};

use super::CameraPanelState;

fn camera_label(config: &AppConfigData, camera_id: &str) -> String {
    config
        .cameras
        .iter()
        .find(|c| c.id == camera_id)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| format!("Camera {}", camera_id))
}

/// Renders the camera selection section with the current frame status.
pub fn render_camera_section(
    ui: &mut egui::Ui,
    config: &AppConfigData,
    loader: &FrameLoader,
    panel_state: &mut CameraPanelState,
    select_events: &mut MessageWriter<SelectCameraRequest>,
) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new("Camera").heading().size(18.0));
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    let selected_id = loader
        .pending_camera
        .as_deref()
        .or(loader.displayed_camera.as_deref());
    let selected_text = selected_id
        .map(|id| camera_label(config, id))
        .unwrap_or_else(|| "Select a camera".to_string());

    if config.cameras.is_empty() {
        ui.label(
            egui::RichText::new("No cameras configured")
                .size(13.0)
                .weak()
                .italics(),
        );
    } else {
        egui::ComboBox::from_id_salt("camera_select")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for camera in &config.cameras {
                    let selected = selected_id == Some(camera.id.as_str());
                    if ui.selectable_label(selected, camera.label()).clicked() && !selected {
                        select_events.write(SelectCameraRequest {
                            camera_id: camera.id.clone(),
                        });
                    }
                }
            });
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("ID:").size(14.0));
        let response = ui.add(
            egui::TextEdit::singleline(&mut panel_state.manual_camera_id)
                .hint_text("camera id")
                .desired_width(110.0),
        );
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let has_id = !panel_state.manual_camera_id.trim().is_empty();

        if (ui.add_enabled(has_id, egui::Button::new("Load")).clicked() || submitted) && has_id {
            select_events.write(SelectCameraRequest {
                camera_id: panel_state.manual_camera_id.trim().to_string(),
            });
        }
    });

    ui.add_space(6.0);
    if loader.is_loading() {
        let pending = loader.pending_camera.as_deref().unwrap_or_default();
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(
                egui::RichText::new(format!("Loading {}...", camera_label(config, pending)))
                    .size(13.0),
            );
        });
    } else if let Some(ref displayed) = loader.displayed_camera {
        ui.label(
            egui::RichText::new(format!("Showing {}", camera_label(config, displayed)))
                .size(13.0)
                .weak(),
        );
    } else {
        ui.label(egui::RichText::new("No frame loaded").size(13.0).weak());
    }

    if let Some(ref error) = loader.last_error {
        ui.colored_label(
            egui::Color32::from_rgb(220, 90, 90),
            egui::RichText::new(error).size(12.0),
        );
    }
}
