//! Unit tests for the frame module.

use std::io::Cursor;

use bevy::prelude::*;
use image::{ImageFormat, Rgba, RgbaImage};

use super::request::{decode_frame, frame_to_image, frame_url};
use super::state::{FrameDisposition, FrameError, FrameFetchResult, FrameLoader};
use super::systems::apply_fetch_result;
use crate::surface::gesture::PointerEvent;
use crate::surface::AnnotationSession;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn ok_result(generation: u64, camera_id: &str) -> FrameFetchResult {
    FrameFetchResult {
        generation,
        camera_id: camera_id.to_string(),
        outcome: Ok(RgbaImage::new(4, 3)),
    }
}

fn err_result(generation: u64, camera_id: &str, error: FrameError) -> FrameFetchResult {
    FrameFetchResult {
        generation,
        camera_id: camera_id.to_string(),
        outcome: Err(error),
    }
}

fn not_found() -> FrameError {
    FrameError::Status {
        code: 404,
        reason: "Not Found".to_string(),
    }
}

fn session_with_roi() -> AnnotationSession {
    let mut session = AnnotationSession::default();
    session.apply_pointer(PointerEvent::Press(UVec2::new(100, 100)));
    session.apply_pointer(PointerEvent::Release(UVec2::new(200, 160)));
    session
}

// URL tests
#[test]
fn test_frame_url() {
    assert_eq!(
        frame_url("http://127.0.0.1:8000", "safety_detection", "3"),
        "http://127.0.0.1:8000/safety_detection/get_camera_frame/3/"
    );
}

#[test]
fn test_frame_url_trims_slashes() {
    assert_eq!(
        frame_url("http://cams.local/", "/safety_detection/", " 12 "),
        "http://cams.local/safety_detection/get_camera_frame/12/"
    );
}

// Decoding tests
#[test]
fn test_decode_png_frame() {
    let frame = decode_frame(&png_bytes(8, 6)).unwrap();
    assert_eq!(frame.dimensions(), (8, 6));
    assert_eq!(frame.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
}

#[test]
fn test_decode_garbage_fails() {
    let result = decode_frame(b"<html>not an image</html>");
    assert!(matches!(result, Err(FrameError::Decode(_))));
}

#[test]
fn test_decode_empty_body_fails() {
    assert!(matches!(decode_frame(&[]), Err(FrameError::Decode(_))));
}

#[test]
fn test_frame_to_image_keeps_native_size() {
    let image = frame_to_image(RgbaImage::new(1920, 1080));
    assert_eq!(image.width(), 1920);
    assert_eq!(image.height(), 1080);
}

#[test]
fn test_frame_error_display() {
    assert_eq!(
        not_found().to_string(),
        "frame endpoint returned 404 Not Found"
    );
    assert_eq!(FrameError::TooLarge.to_string(), "frame response too large");
}

// Loader generation tests
#[test]
fn test_loader_begin_increments_generation() {
    let mut loader = FrameLoader::default();
    let first = loader.begin("1");
    let second = loader.begin("2");

    assert!(second > first);
    assert!(loader.is_current(second));
    assert!(!loader.is_current(first));
    assert_eq!(loader.pending_camera.as_deref(), Some("2"));
    assert!(loader.is_loading());
}

#[test]
fn test_loader_success() {
    let mut loader = FrameLoader::default();
    let generation = loader.begin("1");

    assert_eq!(loader.finish(&ok_result(generation, "1")), FrameDisposition::Ready);
    assert_eq!(loader.displayed_camera.as_deref(), Some("1"));
    assert!(!loader.is_loading());
    assert!(loader.last_error.is_none());
}

#[test]
fn test_loader_failure_keeps_displayed_camera() {
    let mut loader = FrameLoader::default();
    let generation = loader.begin("1");
    loader.finish(&ok_result(generation, "1"));

    let generation = loader.begin("2");
    let disposition = loader.finish(&err_result(generation, "2", not_found()));

    assert_eq!(disposition, FrameDisposition::Failed);
    assert_eq!(loader.displayed_camera.as_deref(), Some("1"));
    assert!(loader.last_error.as_deref().unwrap().contains("404"));
    assert!(!loader.is_loading());
}

#[test]
fn test_loader_drops_stale_result() {
    let mut loader = FrameLoader::default();
    let slow = loader.begin("1");
    let fast = loader.begin("2");

    assert_eq!(loader.finish(&ok_result(fast, "2")), FrameDisposition::Ready);
    assert_eq!(loader.finish(&ok_result(slow, "1")), FrameDisposition::Stale);
    assert_eq!(loader.displayed_camera.as_deref(), Some("2"));
}

#[test]
fn test_stale_result_does_not_end_loading() {
    let mut loader = FrameLoader::default();
    let slow = loader.begin("1");
    loader.begin("2");

    assert_eq!(loader.finish(&ok_result(slow, "1")), FrameDisposition::Stale);
    assert!(loader.is_loading());
}

// Applying results to the session
#[test]
fn test_apply_success_sets_frame_and_keeps_rois() {
    let mut loader = FrameLoader::default();
    let mut session = session_with_roi();
    let mut images = Assets::<Image>::default();

    let generation = loader.begin("1");
    let disposition = apply_fetch_result(&mut loader, &mut session, &mut images, ok_result(generation, "1"));

    assert_eq!(disposition, FrameDisposition::Ready);
    assert!(session.frame().is_some());
    assert_eq!(session.rois.len(), 1);
}

#[test]
fn test_apply_not_found_leaves_blank_surface() {
    let mut loader = FrameLoader::default();
    let mut session = session_with_roi();
    let mut images = Assets::<Image>::default();

    let generation = loader.begin("7");
    let disposition = apply_fetch_result(
        &mut loader,
        &mut session,
        &mut images,
        err_result(generation, "7", not_found()),
    );

    assert_eq!(disposition, FrameDisposition::Failed);
    assert!(session.frame().is_none());
    assert_eq!(session.rois.len(), 1);
}

#[test]
fn test_apply_not_found_keeps_previous_frame() {
    let mut loader = FrameLoader::default();
    let mut session = session_with_roi();
    let mut images = Assets::<Image>::default();

    let generation = loader.begin("1");
    apply_fetch_result(&mut loader, &mut session, &mut images, ok_result(generation, "1"));
    let previous = session.frame().cloned();

    let generation = loader.begin("2");
    apply_fetch_result(
        &mut loader,
        &mut session,
        &mut images,
        err_result(generation, "2", FrameError::Transport("connection refused".to_string())),
    );

    assert_eq!(session.frame().cloned(), previous);
    assert_eq!(session.rois.len(), 1);
}

#[test]
fn test_camera_switch_keeps_rois() {
    let mut loader = FrameLoader::default();
    let mut session = session_with_roi();
    let mut images = Assets::<Image>::default();

    for camera in ["1", "2", "3"] {
        let generation = loader.begin(camera);
        apply_fetch_result(&mut loader, &mut session, &mut images, ok_result(generation, camera));
    }

    assert_eq!(loader.displayed_camera.as_deref(), Some("3"));
    assert_eq!(session.rois.len(), 1);
}

#[test]
fn test_apply_stale_result_keeps_newer_frame() {
    let mut loader = FrameLoader::default();
    let mut session = AnnotationSession::default();
    let mut images = Assets::<Image>::default();

    let slow = loader.begin("1");
    let fast = loader.begin("2");
    apply_fetch_result(&mut loader, &mut session, &mut images, ok_result(fast, "2"));
    let newer = session.frame().cloned();

    let disposition = apply_fetch_result(&mut loader, &mut session, &mut images, ok_result(slow, "1"));

    assert_eq!(disposition, FrameDisposition::Stale);
    assert_eq!(session.frame().cloned(), newer);
}
