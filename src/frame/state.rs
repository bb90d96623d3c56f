//! Frame loader state, task components and result types.

use std::fmt;

use bevy::prelude::*;
use bevy::tasks::Task;
use image::RgbaImage;

/// Why a frame could not be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Endpoint answered with a non-2xx status
    Status { code: u16, reason: String },
    /// Connection, timeout or read failure
    Transport(String),
    /// Body exceeded the size limit
    TooLarge,
    /// Body was not a decodable image
    Decode(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Status { code, reason } => {
                write!(f, "frame endpoint returned {} {}", code, reason)
            }
            FrameError::Transport(e) => write!(f, "failed to fetch frame: {}", e),
            FrameError::TooLarge => write!(f, "frame response too large"),
            FrameError::Decode(e) => write!(f, "failed to decode frame: {}", e),
        }
    }
}

impl std::error::Error for FrameError {}

/// Result of one frame fetch, tagged with the request generation
pub struct FrameFetchResult {
    pub generation: u64,
    pub camera_id: String,
    pub outcome: Result<RgbaImage, FrameError>,
}

/// Background task for a frame fetch
#[derive(Component)]
pub struct FrameFetchTask(pub Task<FrameFetchResult>);

/// How a finished fetch should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDisposition {
    /// Latest request succeeded; show the frame
    Ready,
    /// Latest request failed; keep the current frame
    Failed,
    /// A newer request has been issued since; drop this result
    Stale,
}

/// Tracks frame requests so only the newest selection can update the surface.
#[derive(Resource, Default)]
pub struct FrameLoader {
    generation: u64,
    /// Camera whose frame is currently being fetched
    pub pending_camera: Option<String>,
    /// Camera whose frame is currently displayed
    pub displayed_camera: Option<String>,
    /// Error from the most recent failed fetch, shown to the operator
    pub last_error: Option<String>,
}

impl FrameLoader {
    /// Register a new request and return its generation.
    /// Any result from an earlier generation becomes stale.
    pub fn begin(&mut self, camera_id: &str) -> u64 {
        self.generation += 1;
        self.pending_camera = Some(camera_id.to_string());
        self.last_error = None;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.pending_camera.is_some()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Record a finished fetch and decide what to do with it.
    pub fn finish(&mut self, result: &FrameFetchResult) -> FrameDisposition {
        if !self.is_current(result.generation) {
            return FrameDisposition::Stale;
        }

        self.pending_camera = None;
        match &result.outcome {
            Ok(_) => {
                self.displayed_camera = Some(result.camera_id.clone());
                self.last_error = None;
                FrameDisposition::Ready
            }
            Err(e) => {
                self.last_error = Some(format!("Camera '{}': {}", result.camera_id, e));
                FrameDisposition::Failed
            }
        }
    }
}
