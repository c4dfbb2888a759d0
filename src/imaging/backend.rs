//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines what the converter needs: decode an
//! image, read its dimensions, and resize the decoded pixels. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Decoding is separate from resampling so the converter can inspect the
/// dimensions and hand the same decoded image to [`resize`](Self::resize)
/// without reading the file twice.
pub trait ImageBackend {
    /// A decoded image, owned by the caller between `decode` and `resize`.
    type Image;

    /// Fully decode the image at `path`.
    ///
    /// Implementations must fail on any undecodable file, not only on a bad
    /// header: a corrupt texture aborts the run even when it would have been
    /// copied verbatim.
    fn decode(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Pixel dimensions of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Downsample a decoded image to the exact target size and encode it to
    /// `params.output`.
    fn resize(&self, image: &Self::Image, params: &ResizeParams) -> Result<(), BackendError>;
}
