//! Bevy systems for fetching frames in the background.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::config::{AppConfig, UpdateLastCameraRequest};
use crate::surface::AnnotationSession;

use super::request::{fetch_frame, frame_to_image, frame_url};
use super::state::{FrameDisposition, FrameFetchResult, FrameFetchTask, FrameLoader};
use super::SelectCameraRequest;

/// Startup system that re-selects the camera remembered in config
pub fn request_last_camera(
    config: Res<AppConfig>,
    mut requests: MessageWriter<SelectCameraRequest>,
) {
    if let Some(camera_id) = &config.data.last_camera_id {
        info!("Restoring last camera '{}'", camera_id);
        requests.write(SelectCameraRequest {
            camera_id: camera_id.clone(),
        });
    }
}

/// Start a fetch for each camera selection.
///
/// Earlier in-flight fetches are left to finish; their results are dropped as
/// stale when they arrive.
pub fn start_frame_fetch(
    mut commands: Commands,
    mut events: MessageReader<SelectCameraRequest>,
    mut loader: ResMut<FrameLoader>,
    config: Res<AppConfig>,
) {
    for event in events.read() {
        let camera_id = event.camera_id.trim().to_string();
        if camera_id.is_empty() {
            warn!("Ignoring camera selection with an empty id");
            continue;
        }

        let generation = loader.begin(&camera_id);
        let url = frame_url(&config.data.server_url, &config.data.namespace, &camera_id);
        info!("Fetching frame for camera '{}' from {}", camera_id, url);

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            FrameFetchResult {
                generation,
                camera_id,
                outcome: fetch_frame(&url),
            }
        });

        commands.spawn(FrameFetchTask(task));
    }
}

/// Apply a finished fetch to the loader and session.
///
/// Only a successful result of the latest generation replaces the frame.
/// Failures and stale results leave the displayed frame and committed
/// rectangles untouched.
pub fn apply_fetch_result(
    loader: &mut FrameLoader,
    session: &mut AnnotationSession,
    images: &mut Assets<Image>,
    result: FrameFetchResult,
) -> FrameDisposition {
    let disposition = loader.finish(&result);
    match disposition {
        FrameDisposition::Stale => {
            debug!(
                "Discarding stale frame for camera '{}' (generation {}, latest {})",
                result.camera_id,
                result.generation,
                loader.generation()
            );
        }
        FrameDisposition::Failed => {
            if let Err(e) = &result.outcome {
                error!("Frame fetch for camera '{}' failed: {}", result.camera_id, e);
            }
        }
        FrameDisposition::Ready => {
            if let Ok(frame) = result.outcome {
                let (width, height) = frame.dimensions();
                let handle = images.add(frame_to_image(frame));
                session.set_frame(handle);
                info!(
                    "Loaded {}x{} frame for camera '{}'",
                    width, height, result.camera_id
                );
            }
        }
    }
    disposition
}

/// System to poll frame fetch tasks
pub fn poll_frame_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut FrameFetchTask)>,
    mut loader: ResMut<FrameLoader>,
    mut session: ResMut<AnnotationSession>,
    mut images: ResMut<Assets<Image>>,
    mut config_events: MessageWriter<UpdateLastCameraRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            let camera_id = result.camera_id.clone();
            let disposition = apply_fetch_result(&mut loader, &mut session, &mut images, result);
            if disposition == FrameDisposition::Ready {
                config_events.write(UpdateLastCameraRequest { camera_id });
            }

            commands.entity(entity).despawn();
        }
    }
}
