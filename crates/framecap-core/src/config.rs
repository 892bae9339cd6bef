//! Capture configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::ImageFormat;

/// Where a relative `base_directory` is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathAnchor {
    /// Resolve against the process working directory (editor / tooling runs).
    #[default]
    WorkingDir,
    /// Resolve against the platform's per-user data directory.
    UserData,
}

/// Configuration for a [`FrameCapturer`](crate::capture::FrameCapturer).
///
/// Owned by the capturing component and mutable at any time by its host;
/// tagged capture calls overwrite [`tag`](Self::tag) in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture one frame per step while enabled.
    pub continuous: bool,
    /// Destination directory for captured frames.
    pub base_directory: PathBuf,
    /// How a relative `base_directory` is resolved.
    pub anchor: PathAnchor,
    /// Tag embedded in every filename until overwritten.
    pub tag: String,
    /// Frame pacing applied to the host while continuous capture is on.
    pub frame_rate: u32,
    /// Output container format.
    pub format: ImageFormat,
    /// Default route for untargeted capture calls.
    pub off_screen: bool,
    /// Off-screen surface width in pixels.
    pub off_screen_width: u32,
    /// Off-screen surface height in pixels.
    pub off_screen_height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            base_directory: PathBuf::from("captures"),
            anchor: PathAnchor::WorkingDir,
            tag: String::from("final"),
            frame_rate: 30,
            format: ImageFormat::Png,
            off_screen: false,
            off_screen_width: 3840,
            off_screen_height: 2160,
        }
    }
}

impl CaptureConfig {
    /// The directory captures are written into, after anchoring.
    pub fn capture_dir(&self) -> PathBuf {
        if self.base_directory.is_absolute() {
            return self.base_directory.clone();
        }
        match self.anchor {
            PathAnchor::WorkingDir => self.base_directory.clone(),
            PathAnchor::UserData => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(&self.base_directory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_capture_component() {
        let config = CaptureConfig::default();
        assert!(!config.continuous);
        assert_eq!(config.base_directory, PathBuf::from("captures"));
        assert_eq!(config.tag, "final");
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.format, ImageFormat::Png);
        assert!(!config.off_screen);
        assert_eq!(
            (config.off_screen_width, config.off_screen_height),
            (3840, 2160)
        );
    }

    #[test]
    fn absolute_base_directory_ignores_the_anchor() {
        let dir = tempfile::tempdir().unwrap();
        let config = CaptureConfig {
            base_directory: dir.path().to_owned(),
            anchor: PathAnchor::UserData,
            ..CaptureConfig::default()
        };
        assert_eq!(config.capture_dir(), dir.path());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CaptureConfig {
            continuous: true,
            tag: "smoke".into(),
            format: ImageFormat::Exr,
            ..CaptureConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CaptureConfig = serde_json::from_str(&json).unwrap();
        assert!(back.continuous);
        assert_eq!(back.tag, "smoke");
        assert_eq!(back.format, ImageFormat::Exr);
    }
}
