//! Framecap Core — frame-capture-to-file pipeline.
//!
//! This crate contains the capture pipeline proper: destination resolution,
//! filename synthesis, pixel acquisition, encoding, and disk writes. The
//! rendering engine is an opaque collaborator behind the [`CaptureHost`]
//! trait; no engine or framework dependencies live here.

pub mod capture;
pub mod config;
pub mod error;
pub mod filename;
pub mod format;
pub mod host;
pub mod storage;

// Re-exports for convenience.
pub use capture::{CaptureRequest, FrameCapturer};
pub use config::{CaptureConfig, PathAnchor};
pub use error::CaptureError;
pub use filename::FrameName;
pub use format::{FrameBuffer, ImageFormat};
pub use host::{CaptureHost, SurfaceId};
