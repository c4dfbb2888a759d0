//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. The converter
//! builds them and the [`backend`](super::backend) executes them, so the
//! policy can be tested against a mock backend without touching codecs.
//!
//! - [`Quality`]: Lossy encoding quality (1–100). Textures are always written at [`Quality::MAX`].
//! - [`ResizeParams`]: Source, output path, target dimensions and quality for one downsample.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    /// Highest JPEG quality. Disk size is traded for fidelity; only the
    /// decoded footprint matters downstream.
    pub const MAX: Quality = Quality(100);

    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

/// Parameters for a downsample operation.
///
/// The output encoding is chosen from the extension of `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
