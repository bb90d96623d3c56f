//! Committed ROI list and output field UI.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::roi::{ImportRoisRequest, RoiEncoding, RoiImportStatus, RoiOutputField};
use crate::surface::AnnotationSession;

use super::RoiPanelState;

/// Renders the committed rectangles and the encoded output field value.
pub fn render_roi_section(
    ui: &mut egui::Ui,
    session: &AnnotationSession,
    encoding: RoiEncoding,
    field: Option<&RoiOutputField>,
    panel_state: &mut RoiPanelState,
    import_status: &RoiImportStatus,
    import_events: &mut MessageWriter<ImportRoisRequest>,
) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new("Regions").heading().size(18.0));
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    ui.label(
        egui::RichText::new(format!(
            "{} committed on a {}x{} surface",
            session.rois.len(),
            session.surface.width,
            session.surface.height
        ))
        .size(13.0),
    );

    if let Some(preview) = session.preview() {
        ui.label(
            egui::RichText::new(format!("Drawing {}", preview))
                .size(13.0)
                .color(egui::Color32::from_rgb(255, 215, 30)),
        );
    }

    ui.add_space(4.0);
    if session.rois.is_empty() {
        ui.label(
            egui::RichText::new("(none yet)")
                .size(13.0)
                .weak()
                .italics(),
        );
    }
    egui::ScrollArea::vertical()
        .id_salt("roi_list")
        .max_height(160.0)
        .show(ui, |ui| {
            for (index, rect) in session.rois.iter().enumerate() {
                ui.label(
                    egui::RichText::new(format!("{:>3}. {}", index + 1, rect))
                        .monospace()
                        .size(12.0),
                );
            }
        });

    ui.add_space(12.0);
    ui.label(egui::RichText::new("Output").size(14.0).strong());
    ui.label(
        egui::RichText::new(format!("Encoding: {}", encoding))
            .size(13.0)
            .weak(),
    );

    render_import(ui, panel_state, import_status, import_events);

    let Some(field) = field else {
        ui.colored_label(
            egui::Color32::from_rgb(255, 165, 0),
            "No output field attached",
        );
        return;
    };

    ui.label(
        egui::RichText::new(format!("Field: {}", field.id))
            .size(13.0)
            .weak(),
    );
    if let Some(written) = field.encoding {
        if written != encoding {
            ui.label(
                egui::RichText::new(format!("Last written as {}", written))
                    .size(12.0)
                    .weak(),
            );
        }
    } else {
        ui.label(egui::RichText::new("Not written yet").size(12.0).weak());
    }

    let mut value = field.value.as_str();
    ui.add(
        egui::TextEdit::multiline(&mut value)
            .font(egui::TextStyle::Monospace)
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!field.value.is_empty(), egui::Button::new("Copy"))
            .on_hover_text("Copy the field value to the clipboard")
            .clicked()
        {
            ui.ctx().copy_text(field.value.clone());
        }
    });

    if let Some(ref error) = field.last_error {
        ui.colored_label(
            egui::Color32::from_rgb(220, 90, 90),
            egui::RichText::new(format!("Last write failed: {}", error)).size(12.0),
        );
    }
}

/// Paste box for appending a stored normalized-center value.
fn render_import(
    ui: &mut egui::Ui,
    panel_state: &mut RoiPanelState,
    import_status: &RoiImportStatus,
    import_events: &mut MessageWriter<ImportRoisRequest>,
) {
    egui::CollapsingHeader::new("Import stored value")
        .id_salt("roi_import")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut panel_state.import_text)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("x_center y_center width height")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            let has_text = !panel_state.import_text.trim().is_empty();
            if ui
                .add_enabled(has_text, egui::Button::new("Import"))
                .on_hover_text("Append these rectangles to the session")
                .clicked()
            {
                import_events.write(ImportRoisRequest {
                    text: std::mem::take(&mut panel_state.import_text),
                });
            }

            match &import_status.last_result {
                Some(Ok(count)) => {
                    ui.label(
                        egui::RichText::new(format!("Imported {} ROIs", count))
                            .size(12.0)
                            .weak(),
                    );
                }
                Some(Err(e)) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(220, 90, 90),
                        egui::RichText::new(format!("Import failed: {}", e)).size(12.0),
                    );
                }
                None => {}
            }
        });
}
