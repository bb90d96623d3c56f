use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::roi::RoiEncoding;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// A camera offered in the camera picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraEntry {
    /// Identifier used in the frame endpoint path
    pub id: String,
    /// Human-readable name (e.g. the monitored area)
    #[serde(default)]
    pub name: String,
}

impl CameraEntry {
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_namespace() -> String {
    "safety_detection".to_string()
}

fn default_output_field_id() -> String {
    "id_roi_data".to_string()
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Base URL of the frame provider
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// URL namespace the frame endpoint is mounted under
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Cameras listed in the picker
    #[serde(default)]
    pub cameras: Vec<CameraEntry>,

    /// Encoding written into the output field
    #[serde(default)]
    pub encoding: RoiEncoding,

    /// Output field identifier; empty leaves the field detached
    #[serde(default = "default_output_field_id")]
    pub output_field_id: String,

    /// Last camera whose frame loaded successfully (re-fetched on startup)
    #[serde(default)]
    pub last_camera_id: Option<String>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            namespace: default_namespace(),
            cameras: Vec::new(),
            encoding: RoiEncoding::default(),
            output_field_id: default_output_field_id(),
            last_camera_id: None,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the last successfully loaded camera
#[derive(Message)]
pub struct UpdateLastCameraRequest {
    pub camera_id: String,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Parse config JSON, returning defaults plus a reason when it is unusable
fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str(json) {
        Ok(data) => (data, None),
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = get_config_path();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => {
                let parsed = parse_config(&json);
                if parsed.1.is_none() {
                    info!("Loaded config from {:?}", config_path);
                }
                parsed
            }
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    if config.data.encoding.is_legacy() {
        warn!(
            "Using legacy ROI encoding '{}'; the canonical encoding is '{}'",
            config.data.encoding,
            RoiEncoding::default()
        );
    }

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to update the remembered camera
fn update_last_camera_system(
    mut events: MessageReader<UpdateLastCameraRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.last_camera_id.as_deref() == Some(event.camera_id.as_str()) {
            continue;
        }
        config.data.last_camera_id = Some(event.camera_id.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateLastCameraRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_last_camera_system.run_if(on_message::<UpdateLastCameraRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.server_url, "http://127.0.0.1:8000");
        assert_eq!(data.namespace, "safety_detection");
        assert_eq!(data.output_field_id, "id_roi_data");
        assert_eq!(data.encoding, RoiEncoding::NormalizedCenter);
        assert!(data.cameras.is_empty());
        assert!(data.last_camera_id.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            server_url: "http://cams.local".to_string(),
            namespace: "detection".to_string(),
            cameras: vec![CameraEntry {
                id: "4".to_string(),
                name: "Loading dock".to_string(),
            }],
            encoding: RoiEncoding::PixelRect,
            output_field_id: "id_roi_coordinates".to_string(),
            last_camera_id: Some("4".to_string()),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.server_url, data.server_url);
        assert_eq!(parsed.namespace, data.namespace);
        assert_eq!(parsed.cameras, data.cameras);
        assert_eq!(parsed.encoding, data.encoding);
        assert_eq!(parsed.output_field_id, data.output_field_id);
        assert_eq!(parsed.last_camera_id, data.last_camera_id);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let (data, reason) = parse_config(r#"{ "cameras": [{ "id": "1" }] }"#);
        assert!(reason.is_none());
        assert_eq!(data.server_url, "http://127.0.0.1:8000");
        assert_eq!(data.output_field_id, "id_roi_data");
        assert_eq!(data.cameras.len(), 1);
        assert_eq!(data.cameras[0].label(), "1");
    }

    #[test]
    fn test_corrupt_config_resets_to_defaults() {
        let (data, reason) = parse_config("{ not json");
        assert!(reason.is_some());
        assert_eq!(data.namespace, "safety_detection");
    }

    #[test]
    fn test_camera_label_prefers_name() {
        let camera = CameraEntry {
            id: "2".to_string(),
            name: "Gate".to_string(),
        };
        assert_eq!(camera.label(), "Gate");
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
