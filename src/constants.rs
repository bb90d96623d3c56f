//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Width of the drawing surface in logical pixels.
/// All stored rectangles and normalized encodings are relative to this.
pub const SURFACE_WIDTH: u32 = 640;

/// Height of the drawing surface in logical pixels.
pub const SURFACE_HEIGHT: u32 = 480;

/// Decimal places used by the normalized-center encoding
pub const NORMALIZED_PRECISION: usize = 6;

/// Upper bound on a frame response body. Larger payloads are rejected
/// rather than buffered.
pub const MAX_FRAME_BYTES: u64 = 32 * 1024 * 1024;

/// Seconds before a frame request is abandoned
pub const FRAME_TIMEOUT_SECS: u64 = 10;

/// Outline width for committed and preview rectangles
pub const ROI_STROKE_WIDTH: f32 = 2.0;
