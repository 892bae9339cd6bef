//! Typed failure kinds for capture attempts.

use std::io;
use std::path::PathBuf;

use crate::format::ImageFormat;

/// Everything that can go wrong during a capture.
///
/// The pipeline never panics on these; callers decide whether a failure is
/// fatal. The engine-integration layer logs and carries on.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture directory '{path}' does not exist and could not be created")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },
    #[error("no render surface available for off-screen capture")]
    NoRenderTarget,
    #[error("encoding frame to {format} produced no data")]
    EncodeFailed { format: ImageFormat },
    #[error("failed to write '{path}'")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
