//! Serialization of committed rectangles into the output field format.
//!
//! Only [`RoiEncoding::NormalizedCenter`] is canonical; the two JSON shapes
//! are legacy formats selectable through config.
//!
//! Normalized-center (canonical, version 1), one line per rectangle:
//! ```text
//! 0.234375 0.270833 0.156250 0.125000
//! ```
//!
//! Corner pixels (legacy):
//! ```json
//! [{"x1":100,"y1":100,"x2":200,"y2":160}]
//! ```
//!
//! Pixel rectangle (legacy):
//! ```json
//! [{"x":100,"y":100,"width":100,"height":60}]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::SurfaceSize;
use crate::constants::NORMALIZED_PRECISION;

use super::rect::RoiRect;

/// Version of the canonical normalized-center encoding.
pub const ENCODING_VERSION: u32 = 1;

/// Output encoding for the ROI list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiEncoding {
    /// `x_center y_center width height` as fractions of the surface size
    #[default]
    NormalizedCenter,
    /// JSON array of `{x1, y1, x2, y2}` pixel corners
    CornerPixels,
    /// JSON array of `{x, y, width, height}` pixel rectangles
    PixelRect,
}

impl RoiEncoding {
    pub fn display_name(&self) -> &'static str {
        match self {
            RoiEncoding::NormalizedCenter => "Normalized center",
            RoiEncoding::CornerPixels => "Corner pixels (legacy)",
            RoiEncoding::PixelRect => "Pixel rectangle (legacy)",
        }
    }

    pub fn is_legacy(&self) -> bool {
        !matches!(self, RoiEncoding::NormalizedCenter)
    }

    /// Format version. Legacy encodings are frozen at their only version.
    pub fn version(&self) -> u32 {
        match self {
            RoiEncoding::NormalizedCenter => ENCODING_VERSION,
            RoiEncoding::CornerPixels | RoiEncoding::PixelRect => 1,
        }
    }

    /// Encode the full rectangle list.
    ///
    /// Either the whole list encodes or an error is returned; callers never
    /// see a partial string.
    pub fn encode(&self, rois: &[RoiRect], surface: SurfaceSize) -> Result<String, EncodeError> {
        match self {
            RoiEncoding::NormalizedCenter => encode_normalized_center(rois, surface),
            RoiEncoding::CornerPixels => {
                let records: Vec<CornerRecord> = rois.iter().map(CornerRecord::from).collect();
                serde_json::to_string(&records).map_err(EncodeError::Json)
            }
            RoiEncoding::PixelRect => {
                let records: Vec<PixelRectRecord> =
                    rois.iter().map(PixelRectRecord::from).collect();
                serde_json::to_string(&records).map_err(EncodeError::Json)
            }
        }
    }
}

impl fmt::Display for RoiEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.display_name(), self.version())
    }
}

#[derive(Debug)]
pub enum EncodeError {
    /// The surface has a zero dimension, so fractions are undefined
    EmptySurface,
    Json(serde_json::Error),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EmptySurface => write!(f, "surface has a zero dimension"),
            EncodeError::Json(e) => write!(f, "failed to serialize ROIs: {}", e),
        }
    }
}

impl std::error::Error for EncodeError {}

#[derive(Debug, PartialEq)]
pub enum DecodeError {
    EmptySurface,
    /// A line did not contain exactly four values
    FieldCount { line: usize, found: usize },
    /// A value was not a number
    InvalidNumber { line: usize, value: String },
    /// A value was negative, non-finite, or placed the rectangle off-surface
    OutOfRange { line: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::EmptySurface => write!(f, "surface has a zero dimension"),
            DecodeError::FieldCount { line, found } => {
                write!(f, "line {}: expected 4 values, found {}", line, found)
            }
            DecodeError::InvalidNumber { line, value } => {
                write!(f, "line {}: '{}' is not a number", line, value)
            }
            DecodeError::OutOfRange { line } => write!(f, "line {}: value out of range", line),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Legacy `{x1, y1, x2, y2}` record
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct CornerRecord {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl From<&RoiRect> for CornerRecord {
    fn from(rect: &RoiRect) -> Self {
        let max = rect.max();
        Self {
            x1: rect.x,
            y1: rect.y,
            x2: max.x,
            y2: max.y,
        }
    }
}

/// Legacy `{x, y, width, height}` record
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct PixelRectRecord {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<&RoiRect> for PixelRectRecord {
    fn from(rect: &RoiRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

fn encode_normalized_center(rois: &[RoiRect], surface: SurfaceSize) -> Result<String, EncodeError> {
    if surface.is_empty() {
        return Err(EncodeError::EmptySurface);
    }

    let surface_w = surface.width as f64;
    let surface_h = surface.height as f64;
    let p = NORMALIZED_PRECISION;

    let lines: Vec<String> = rois
        .iter()
        .map(|roi| {
            let x_center = (roi.x as f64 + roi.width as f64 / 2.0) / surface_w;
            let y_center = (roi.y as f64 + roi.height as f64 / 2.0) / surface_h;
            let width = roi.width as f64 / surface_w;
            let height = roi.height as f64 / surface_h;
            format!(
                "{:.p$} {:.p$} {:.p$} {:.p$}",
                x_center, y_center, width, height
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Parse normalized-center lines back into pixel rectangles.
///
/// Blank lines are skipped. Values are rounded to the nearest pixel, so a
/// value produced by [`RoiEncoding::NormalizedCenter`] reconstructs each
/// rectangle to within one pixel.
pub fn decode_normalized_center(
    text: &str,
    surface: SurfaceSize,
) -> Result<Vec<RoiRect>, DecodeError> {
    if surface.is_empty() {
        return Err(DecodeError::EmptySurface);
    }

    let surface_w = surface.width as f64;
    let surface_h = surface.height as f64;
    let mut rois = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let fields: Vec<&str> = raw_line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 4 {
            return Err(DecodeError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let mut values = [0.0f64; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            let value: f64 = field.parse().map_err(|_| DecodeError::InvalidNumber {
                line,
                value: field.to_string(),
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(DecodeError::OutOfRange { line });
            }
            *slot = value;
        }

        let [x_center, y_center, width, height] = values;
        let left = ((x_center - width / 2.0) * surface_w).round();
        let top = ((y_center - height / 2.0) * surface_h).round();
        let w = (width * surface_w).round();
        let h = (height * surface_h).round();

        // One pixel of slack absorbs rounding of the six-decimal fractions
        if left < 0.0 || top < 0.0 || left + w > surface_w + 1.0 || top + h > surface_h + 1.0 {
            return Err(DecodeError::OutOfRange { line });
        }

        rois.push(RoiRect::new(left as u32, top as u32, w as u32, h as u32));
    }

    Ok(rois)
}
