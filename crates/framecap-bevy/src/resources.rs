//! Bevy resources for the capture pipeline.

use bevy::prelude::*;
use framecap_core::{CaptureHost, FrameCapturer};

/// Host adapters the session can drive from the ECS.
pub type BoxedHost = Box<dyn CaptureHost + Send + Sync>;

/// Resource owning the frame capturer and its host binding.
///
/// Inserted by the application once its host adapter exists; the plugin's
/// systems no-op until then.
#[derive(Resource)]
pub struct CaptureSession {
    pub capturer: FrameCapturer<BoxedHost>,
}

impl CaptureSession {
    pub fn new(capturer: FrameCapturer<BoxedHost>) -> Self {
        Self { capturer }
    }
}
