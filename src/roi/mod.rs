//! ROI store and encoder.
//!
//! Committed rectangles are appended to the session's [`RoiStore`]; after each
//! commit the whole list is re-encoded into the [`RoiOutputField`].
//!
//! ## Module Structure
//!
//! - [`rect`] - Canonical pixel rectangle ([`RoiRect`])
//! - [`store`] - Append-only rectangle list ([`RoiStore`])
//! - [`encoding`] - Output encodings and the normalized-center decoder
//! - [`output`] - The output field resource
//! - [`systems`] - Field attachment, import and re-encoding systems

mod encoding;
mod output;
mod rect;
mod store;
mod systems;


pub use encoding::RoiEncoding;
pub use output::RoiOutputField;
pub use rect::RoiRect;
pub use store::RoiStore;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// Message sent when a drag gesture commits a new rectangle
#[derive(Message, Debug, Clone, Copy)]
pub struct RoiCommitted {
    pub rect: RoiRect,
}

/// Message to append rectangles from a stored normalized-center value
#[derive(Message, Debug, Clone)]
pub struct ImportRoisRequest {
    pub text: String,
}

/// Outcome of the most recent import, shown in the ROI panel
#[derive(Resource, Default)]
pub struct RoiImportStatus {
    /// Number of rectangles appended, or the decode error
    pub last_result: Option<Result<usize, String>>,
}

pub struct RoiPlugin;

impl Plugin for RoiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoiImportStatus>()
            .add_message::<RoiCommitted>()
            .add_message::<ImportRoisRequest>()
            .add_systems(Startup, systems::attach_output_field.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    systems::import_stored_rois.run_if(on_message::<ImportRoisRequest>),
                    systems::encode_committed_rois.run_if(on_message::<RoiCommitted>),
                )
                    .chain(),
            );
    }
}
