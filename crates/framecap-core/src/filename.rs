//! Capture filename synthesis.
//!
//! Names pack enough metadata to stay unique within a session and to be
//! parsed by downstream tooling, so the segment order is part of the
//! contract:
//!
//! `P[product]-S[scene]{-t[tag]}{-t[tag]}-[W{w}xH{h}]-[F%06d]-[T%012d]{ext}`

/// Inputs for one synthesized capture filename.
#[derive(Debug, Clone)]
pub struct FrameName<'a> {
    /// Product name reported by the host.
    pub product: &'a str,
    /// Active scene name reported by the host.
    pub scene: &'a str,
    /// Tag carried in the configuration across captures.
    pub persistent_tag: &'a str,
    /// Tag for this call only (e.g. the on-/off-screen discriminator).
    pub call_tag: &'a str,
    pub width: u32,
    pub height: u32,
    /// Monotonic frame counter, zero-padded to 6 digits.
    pub frame: u64,
    /// Elapsed milliseconds, zero-padded to 12 digits.
    pub millis: u64,
    /// Extension including the leading dot.
    pub extension: &'a str,
}

impl FrameName<'_> {
    /// Render the filename. Empty tags omit their segment entirely.
    pub fn synthesize(&self) -> String {
        format!(
            "P[{}]-S[{}]{}{}-[W{}xH{}]-[F{:06}]-[T{:012}]{}",
            self.product,
            self.scene,
            tag_segment(self.persistent_tag),
            tag_segment(self.call_tag),
            self.width,
            self.height,
            self.frame,
            self.millis,
            self.extension,
        )
    }
}

fn tag_segment(tag: &str) -> String {
    if tag.is_empty() {
        String::new()
    } else {
        format!("-t[{tag}]")
    }
}
