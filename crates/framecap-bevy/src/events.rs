//! Bevy messages for driving captures and reporting results.

use std::path::PathBuf;

use bevy::prelude::*;

/// Inbound capture commands from other systems or UI glue.
#[derive(Message)]
pub enum CaptureCommand {
    /// Capture one frame. `None` uses the configured route.
    Capture { off_screen: Option<bool> },
    /// Replace the persistent filename tag without capturing.
    SetTag { tag: String },
    /// Set the persistent tag, then capture. The tag change outlives the
    /// command.
    CaptureTagged {
        tag: String,
        off_screen: Option<bool>,
    },
    /// Toggle continuous per-frame capture.
    SetContinuous { enabled: bool },
}

/// Fired after each capture attempt, successful or not.
#[derive(Message)]
pub struct FrameCaptured {
    /// Written path on success, rendered failure message otherwise.
    pub result: Result<PathBuf, String>,
}
