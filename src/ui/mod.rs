mod annotation_panel;
mod dialogs;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;

pub use annotation_panel::{CameraPanelState, RoiPanelState};

/// Resource that tracks whether any modal dialog is currently open.
/// Surface input handlers check this so drags don't start behind a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block surface input
    pub any_modal_open: bool,
}

/// Aggregates dialog open states into [`DialogState`].
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<CameraPanelState>()
            .init_resource::<RoiPanelState>()
            .add_systems(First, update_dialog_state)
            // Side panel first so dialogs are laid out over it
            .add_systems(
                EguiPrimaryContextPass,
                (
                    annotation_panel::annotation_panel_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            );
    }
}
