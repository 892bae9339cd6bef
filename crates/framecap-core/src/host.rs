//! Host runtime services the capture pipeline depends on.
//!
//! The pipeline treats the rendering engine as an opaque collaborator: a
//! handful of facts for filename synthesis, a frame-pacing pin, the
//! host-owned on-screen dump primitive, and render-target plumbing for
//! off-screen grabs.

use std::io;
use std::path::Path;

use crate::format::FrameBuffer;

/// Opaque handle to a host-owned render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Services provided by the embedding engine/runtime.
///
/// All methods are synchronous; the pipeline is single-threaded and
/// cooperative. A second concurrent off-screen capture against the same
/// camera would corrupt the bind/restore pairing, so hosts must serialize
/// capture calls.
pub trait CaptureHost {
    /// Product name embedded in capture filenames.
    fn product_name(&self) -> String;

    /// Active scene name embedded in capture filenames.
    fn scene_name(&self) -> String;

    /// Current on-screen dimensions in pixels.
    fn screen_size(&self) -> (u32, u32);

    /// Pin the host's frame pacing to `rate` frames per second, or release
    /// the pin with `None`.
    fn set_frame_pacing(&mut self, rate: Option<u32>);

    /// Dump the currently displayed frame to `path`. Encoding for this
    /// route is host-owned.
    fn write_screen_frame(&mut self, path: &Path) -> io::Result<()>;

    /// Allocate a transient off-screen surface, or `None` when the host
    /// cannot provide one.
    fn acquire_surface(&mut self, width: u32, height: u32) -> Option<SurfaceId>;

    /// Return a surface obtained from [`acquire_surface`](Self::acquire_surface).
    fn release_surface(&mut self, surface: SurfaceId);

    /// Surface the camera currently renders into, if any.
    fn bound_surface(&self) -> Option<SurfaceId>;

    /// Point the camera at `surface`, or back at the screen with `None`.
    fn bind_surface(&mut self, surface: Option<SurfaceId>);

    /// Surface that readback operations currently target.
    fn active_surface(&self) -> Option<SurfaceId>;

    /// Redirect readback operations to `surface`.
    fn set_active_surface(&mut self, surface: Option<SurfaceId>);

    /// Force one render pass into the bound surface.
    fn render_once(&mut self);

    /// Read `surface` back to CPU memory as RGB8, top-left origin, sized
    /// exactly `width` x `height`. Must only be called after
    /// [`render_once`](Self::render_once) has returned.
    fn read_surface(
        &mut self,
        surface: SurfaceId,
        width: u32,
        height: u32,
    ) -> Option<FrameBuffer>;
}

impl<H: CaptureHost + ?Sized> CaptureHost for Box<H> {
    fn product_name(&self) -> String {
        (**self).product_name()
    }

    fn scene_name(&self) -> String {
        (**self).scene_name()
    }

    fn screen_size(&self) -> (u32, u32) {
        (**self).screen_size()
    }

    fn set_frame_pacing(&mut self, rate: Option<u32>) {
        (**self).set_frame_pacing(rate);
    }

    fn write_screen_frame(&mut self, path: &Path) -> io::Result<()> {
        (**self).write_screen_frame(path)
    }

    fn acquire_surface(&mut self, width: u32, height: u32) -> Option<SurfaceId> {
        (**self).acquire_surface(width, height)
    }

    fn release_surface(&mut self, surface: SurfaceId) {
        (**self).release_surface(surface);
    }

    fn bound_surface(&self) -> Option<SurfaceId> {
        (**self).bound_surface()
    }

    fn bind_surface(&mut self, surface: Option<SurfaceId>) {
        (**self).bind_surface(surface);
    }

    fn active_surface(&self) -> Option<SurfaceId> {
        (**self).active_surface()
    }

    fn set_active_surface(&mut self, surface: Option<SurfaceId>) {
        (**self).set_active_surface(surface);
    }

    fn render_once(&mut self) {
        (**self).render_once();
    }

    fn read_surface(
        &mut self,
        surface: SurfaceId,
        width: u32,
        height: u32,
    ) -> Option<FrameBuffer> {
        (**self).read_surface(surface, width, height)
    }
}
