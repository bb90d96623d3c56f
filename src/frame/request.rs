//! Frame endpoint access and decoding.

use std::io::Read;
use std::time::Duration;

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::RgbaImage;

use crate::constants::{FRAME_TIMEOUT_SECS, MAX_FRAME_BYTES};

use super::state::FrameError;

const USER_AGENT: &str = concat!("roi-annotator/", env!("CARGO_PKG_VERSION"));

/// Build the frame endpoint URL: `{server}/{namespace}/get_camera_frame/{camera_id}/`
pub fn frame_url(server_url: &str, namespace: &str, camera_id: &str) -> String {
    format!(
        "{}/{}/get_camera_frame/{}/",
        server_url.trim_end_matches('/'),
        namespace.trim_matches('/'),
        camera_id.trim()
    )
}

/// Fetch and decode a single frame (blocking; run on a task pool)
pub fn fetch_frame(url: &str) -> Result<RgbaImage, FrameError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(FRAME_TIMEOUT_SECS))
        .call();

    let response = match response {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            return Err(FrameError::Status {
                code,
                reason: resp.status_text().to_string(),
            });
        }
        Err(e) => return Err(FrameError::Transport(e.to_string())),
    };

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_FRAME_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| FrameError::Transport(e.to_string()))?;

    if bytes.len() as u64 > MAX_FRAME_BYTES {
        return Err(FrameError::TooLarge);
    }

    decode_frame(&bytes)
}

/// Decode any supported image payload into RGBA8
pub fn decode_frame(bytes: &[u8]) -> Result<RgbaImage, FrameError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| FrameError::Decode(e.to_string()))
}

/// Convert a decoded frame into a Bevy texture at its native resolution.
/// The surface sprite handles scaling.
pub fn frame_to_image(frame: RgbaImage) -> Image {
    let (width, height) = frame.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        frame.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}
