//! Bevy systems driving the capture pipeline.
//!
//! These systems are the only place capture state changes inside the ECS.
//! Other systems send `CaptureCommand` messages; results come back as
//! `FrameCaptured` messages.

use std::path::PathBuf;

use bevy::prelude::*;
use framecap_core::CaptureError;

use crate::events::{CaptureCommand, FrameCaptured};
use crate::resources::CaptureSession;

/// Apply inbound capture commands to the session.
pub fn handle_capture_commands(
    mut commands: MessageReader<CaptureCommand>,
    session: Option<ResMut<CaptureSession>>,
    mut captured: MessageWriter<FrameCaptured>,
) {
    let Some(mut session) = session else {
        return;
    };

    for cmd in commands.read() {
        match cmd {
            CaptureCommand::SetTag { tag } => {
                session.capturer.set_tag(tag.clone());
            }
            CaptureCommand::Capture { off_screen } => {
                let result = match off_screen {
                    Some(route) => session.capturer.capture_frame_with(*route),
                    None => session.capturer.capture_frame(),
                };
                report(&mut captured, result);
            }
            CaptureCommand::CaptureTagged { tag, off_screen } => {
                session.capturer.set_tag(tag.clone());
                let result = match off_screen {
                    Some(route) => session.capturer.capture_frame_with(*route),
                    None => session.capturer.capture_frame(),
                };
                report(&mut captured, result);
            }
            CaptureCommand::SetContinuous { enabled } => {
                session.capturer.config_mut().continuous = *enabled;
                tracing::info!(
                    "continuous capture {}",
                    if *enabled { "enabled" } else { "disabled" }
                );
            }
        }
    }
}

/// Per-frame trigger: pace the host and capture while continuous mode is on.
///
/// Runs every frame. When continuous capture is off this only releases the
/// frame-pacing pin.
pub fn drive_continuous_capture(
    session: Option<ResMut<CaptureSession>>,
    mut captured: MessageWriter<FrameCaptured>,
) {
    let Some(mut session) = session else {
        return;
    };

    if let Some(result) = session.capturer.step() {
        report(&mut captured, result);
    }
}

fn report(writer: &mut MessageWriter<FrameCaptured>, result: Result<PathBuf, CaptureError>) {
    // The pipeline already logged the attempt; failures stay non-fatal here.
    writer.write(FrameCaptured {
        result: result.map_err(|e| e.to_string()),
    });
}
