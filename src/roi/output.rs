//! The output field that receives the encoded ROI list.

use bevy::prelude::*;

use crate::common::SurfaceSize;

use super::encoding::{EncodeError, RoiEncoding};
use super::rect::RoiRect;

/// Destination slot for the encoded ROI list, consumed by form submission.
///
/// Only present as a resource when an output field id is configured. A
/// missing resource means the field is not attached and writes are skipped.
#[derive(Resource, Debug, Clone)]
pub struct RoiOutputField {
    /// Stable identifier of the backend form field (e.g. `id_roi_data`)
    pub id: String,
    /// Current field value
    pub value: String,
    /// Encoding used for the last successful write
    pub encoding: Option<RoiEncoding>,
    /// Error from the most recent failed write, cleared on success
    pub last_error: Option<String>,
}

impl RoiOutputField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            encoding: None,
            last_error: None,
        }
    }

    /// Re-encode the full list and overwrite the value.
    ///
    /// On failure the previous value is left untouched.
    pub fn write_encoded(
        &mut self,
        rois: &[RoiRect],
        surface: SurfaceSize,
        encoding: RoiEncoding,
    ) -> Result<(), EncodeError> {
        match encoding.encode(rois, surface) {
            Ok(value) => {
                self.value = value;
                self.encoding = Some(encoding);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
