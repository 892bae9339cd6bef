//! The capture pipeline: path resolution, filename synthesis, pixel
//! acquisition, encoding, and the final disk write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::filename::FrameName;
use crate::format::ImageFormat;
use crate::host::{CaptureHost, SurfaceId};
use crate::storage;

/// Call-site tag for frames grabbed from the visible display.
const ON_SCREEN_TAG: &str = "onscreen";
/// Call-site tag for frames rendered into a transient surface.
const OFF_SCREEN_TAG: &str = "offscreen";

/// Parameters for a single capture, resolved from the configuration plus
/// call-site overrides. Dropped once the capture finishes.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// Render into a transient surface instead of grabbing the display.
    pub off_screen: bool,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Persistent-tag snapshot embedded in the filename.
    pub tag: String,
}

/// Orchestrates frame captures against a host runtime.
///
/// Owns the capture configuration, a monotonic frame counter, and the
/// session clock used for filename timestamps.
pub struct FrameCapturer<H> {
    host: H,
    config: CaptureConfig,
    frames_captured: u64,
    started: Instant,
}

impl<H: CaptureHost> FrameCapturer<H> {
    pub fn new(host: H, config: CaptureConfig) -> Self {
        Self {
            host,
            config,
            frames_captured: 0,
            started: Instant::now(),
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CaptureConfig {
        &mut self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replace the persistent tag embedded in subsequent filenames.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.config.tag = tag.into();
    }

    /// Advance one host frame step.
    ///
    /// While continuous mode is on, pins the host's frame pacing to the
    /// configured rate and issues exactly one capture with the current
    /// configuration. Otherwise releases the pacing pin and captures
    /// nothing.
    pub fn step(&mut self) -> Option<Result<PathBuf, CaptureError>> {
        if !self.config.continuous {
            self.host.set_frame_pacing(None);
            return None;
        }
        self.host.set_frame_pacing(Some(self.config.frame_rate));
        Some(self.capture_frame())
    }

    /// Capture one frame using the configured on-/off-screen route.
    pub fn capture_frame(&mut self) -> Result<PathBuf, CaptureError> {
        self.capture_frame_with(self.config.off_screen)
    }

    /// Capture one frame with an explicit route, ignoring the configured
    /// default.
    pub fn capture_frame_with(&mut self, off_screen: bool) -> Result<PathBuf, CaptureError> {
        let request = self.request(off_screen);
        self.capture(&request)
    }

    /// Capture the currently displayed frame.
    pub fn capture_on_screen_frame(&mut self) -> Result<PathBuf, CaptureError> {
        self.capture_frame_with(false)
    }

    /// Render into a transient surface at the configured off-screen size
    /// and capture it.
    pub fn capture_off_screen_frame(&mut self) -> Result<PathBuf, CaptureError> {
        self.capture_frame_with(true)
    }

    /// Set the persistent tag, then capture with the configured route.
    ///
    /// The tag change outlives the call; later untagged captures inherit it.
    pub fn capture_frame_tagged(
        &mut self,
        tag: impl Into<String>,
    ) -> Result<PathBuf, CaptureError> {
        self.set_tag(tag);
        self.capture_frame()
    }

    /// Set the persistent tag, then capture the displayed frame.
    pub fn capture_on_screen_frame_tagged(
        &mut self,
        tag: impl Into<String>,
    ) -> Result<PathBuf, CaptureError> {
        self.set_tag(tag);
        self.capture_on_screen_frame()
    }

    /// Set the persistent tag, then capture off-screen.
    pub fn capture_off_screen_frame_tagged(
        &mut self,
        tag: impl Into<String>,
    ) -> Result<PathBuf, CaptureError> {
        self.set_tag(tag);
        self.capture_off_screen_frame()
    }

    /// Run one capture for an explicit request. Failures are logged here
    /// and returned typed; nothing is raised further.
    pub fn capture(&mut self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        let route = if request.off_screen {
            "off-screen"
        } else {
            "on-screen"
        };
        let result = if request.off_screen {
            self.off_screen(request)
        } else {
            self.on_screen(request)
        };
        match &result {
            Ok(path) => tracing::info!("captured {route} frame to '{}'", path.display()),
            Err(e) => tracing::warn!("{route} frame capture failed: {e}"),
        }
        result
    }

    /// Build a request from the current configuration.
    fn request(&self, off_screen: bool) -> CaptureRequest {
        let (width, height) = if off_screen {
            (self.config.off_screen_width, self.config.off_screen_height)
        } else {
            self.host.screen_size()
        };
        CaptureRequest {
            off_screen,
            width,
            height,
            format: self.config.format,
            tag: self.config.tag.clone(),
        }
    }

    fn on_screen(&mut self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        let dir = self.ensure_capture_dir()?;
        let path = dir.join(self.synthesize_name(request, ON_SCREEN_TAG));
        self.host
            .write_screen_frame(&path)
            .map_err(|source| CaptureError::WriteFailed {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    fn off_screen(&mut self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        let dir = self.ensure_capture_dir()?;

        // Acquire before touching any camera state: when no surface is
        // available nothing was rebound, so there is nothing to restore.
        let Some(surface) = self.host.acquire_surface(request.width, request.height) else {
            return Err(CaptureError::NoRenderTarget);
        };

        let original_binding = self.host.bound_surface();
        let original_active = self.host.active_surface();

        self.host.bind_surface(Some(surface));
        self.host.set_active_surface(Some(surface));
        self.host.render_once();

        let outcome = self.read_encode_write(surface, request, &dir);

        // Restore on success and failure alike.
        self.host.release_surface(surface);
        self.host.bind_surface(original_binding);
        self.host.set_active_surface(original_active);

        outcome
    }

    fn read_encode_write(
        &mut self,
        surface: SurfaceId,
        request: &CaptureRequest,
        dir: &Path,
    ) -> Result<PathBuf, CaptureError> {
        let frame = self
            .host
            .read_surface(surface, request.width, request.height)
            .ok_or(CaptureError::EncodeFailed {
                format: request.format,
            })?;
        let bytes = request
            .format
            .encode(&frame)
            .ok_or(CaptureError::EncodeFailed {
                format: request.format,
            })?;
        let path = dir.join(self.synthesize_name(request, OFF_SCREEN_TAG));
        storage::write_frame(&path, request.format.extension(), &bytes)
    }

    fn ensure_capture_dir(&self) -> Result<PathBuf, CaptureError> {
        let dir = self.config.capture_dir();
        storage::ensure_dir(&dir)?;
        Ok(dir)
    }

    fn synthesize_name(&mut self, request: &CaptureRequest, call_tag: &str) -> String {
        let product = self.host.product_name();
        let scene = self.host.scene_name();
        self.frames_captured += 1;
        FrameName {
            product: &product,
            scene: &scene,
            persistent_tag: &request.tag,
            call_tag,
            width: request.width,
            height: request.height,
            frame: self.frames_captured,
            millis: self.started.elapsed().as_millis() as u64,
            extension: request.format.extension(),
        }
        .synthesize()
    }
}
