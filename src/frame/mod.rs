//! Frame loading for the selected camera.
//!
//! Selecting a camera sends a [`SelectCameraRequest`]; the frame is fetched
//! from `{server}/{namespace}/get_camera_frame/{camera_id}/` on the IO task
//! pool, decoded, and handed to the [`AnnotationSession`] as a texture.
//!
//! Every request is tagged with a generation number. When the operator
//! switches cameras faster than the endpoint responds, only the newest
//! request can change the displayed frame.
//!
//! [`AnnotationSession`]: crate::surface::AnnotationSession

mod request;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::FrameLoader;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// Message to load the current frame of a camera
#[derive(Message, Debug, Clone)]
pub struct SelectCameraRequest {
    pub camera_id: String,
}

pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameLoader>()
            .add_message::<SelectCameraRequest>()
            .add_systems(Startup, systems::request_last_camera.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    systems::start_frame_fetch.run_if(on_message::<SelectCameraRequest>),
                    systems::poll_frame_tasks,
                ),
            );
    }
}
