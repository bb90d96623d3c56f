//! Bevy systems that keep the output field in sync with the ROI store.

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::surface::AnnotationSession;

use super::encoding::decode_normalized_center;
use super::output::RoiOutputField;
use super::{ImportRoisRequest, RoiCommitted, RoiImportStatus};

/// Startup system that attaches the output field named in config.
pub fn attach_output_field(mut commands: Commands, config: Res<AppConfig>) {
    let id = config.data.output_field_id.trim();
    if id.is_empty() {
        warn!("No output field configured; committed ROIs will not be encoded");
        return;
    }

    info!(
        "Attached output field '{}' using {}",
        id, config.data.encoding
    );
    commands.insert_resource(RoiOutputField::new(id));
}

/// Append rectangles decoded from a stored normalized-center value.
///
/// Each rectangle is announced as a commit so the output field is rewritten.
/// A value that fails to decode appends nothing.
pub fn import_stored_rois(
    mut requests: MessageReader<ImportRoisRequest>,
    mut session: ResMut<AnnotationSession>,
    mut status: ResMut<RoiImportStatus>,
    mut committed: MessageWriter<RoiCommitted>,
) {
    for request in requests.read() {
        match decode_normalized_center(&request.text, session.surface) {
            Ok(rects) => {
                info!("Imported {} stored ROIs", rects.len());
                for rect in &rects {
                    session.rois.push(*rect);
                    committed.write(RoiCommitted { rect: *rect });
                }
                status.last_result = Some(Ok(rects.len()));
            }
            Err(e) => {
                warn!("Failed to import stored ROIs: {}", e);
                status.last_result = Some(Err(e.to_string()));
            }
        }
    }
}

/// Re-encode every committed ROI into the output field after a commit.
pub fn encode_committed_rois(
    mut events: MessageReader<RoiCommitted>,
    session: Res<AnnotationSession>,
    config: Res<AppConfig>,
    field: Option<ResMut<RoiOutputField>>,
) {
    // One re-encode covers any number of commits this frame
    let mut commits = 0;
    for event in events.read() {
        info!("Committed ROI {}", event.rect);
        commits += 1;
    }
    if commits == 0 {
        return;
    }

    let Some(mut field) = field else {
        warn!("Output field not attached; skipping ROI encoding");
        return;
    };

    let encoding = config.data.encoding;
    match field.write_encoded(session.rois.as_slice(), session.surface, encoding) {
        Ok(()) => debug!(
            "Encoded {} ROIs into '{}' ({})",
            session.rois.len(),
            field.id,
            encoding
        ),
        Err(e) => error!("Failed to encode ROIs into '{}': {}", field.id, e),
    }
}
