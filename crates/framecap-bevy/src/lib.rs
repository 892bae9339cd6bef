//! Framecap Bevy Plugin — drives the capture pipeline from Bevy's ECS.
//!
//! Provides [`FrameCapturePlugin`] which registers the capture messages and
//! the systems that service them. The application inserts a
//! [`CaptureSession`] once its [`CaptureHost`](framecap_core::CaptureHost)
//! adapter is ready; until then every system here is a no-op.

pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

pub use events::{CaptureCommand, FrameCaptured};
pub use resources::{BoxedHost, CaptureSession};
use systems::{drive_continuous_capture, handle_capture_commands};

/// Bevy plugin wiring capture commands and the per-frame trigger.
pub struct FrameCapturePlugin;

impl Plugin for FrameCapturePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CaptureCommand>()
            .add_message::<FrameCaptured>()
            .add_systems(
                Update,
                (
                    handle_capture_commands,
                    drive_continuous_capture.after(handle_capture_commands),
                ),
            );
    }
}
