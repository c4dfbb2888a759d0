//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader`, format sniffed from the file content |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the requested quality |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//!
//! Lanczos3 is used because it aliases noticeably less than bilinear or
//! bicubic when shrinking by large factors.
//!
//! Resampling happens directly on the gamma-encoded values. A linear-light
//! resize would be more correct for textures with fine high-contrast detail.
//!
//! ## Decode limits
//!
//! `image` caps decoder allocations at 512 MiB by default, which a single
//! 12k RGBA texture already exceeds. [`RustBackend::new`] lifts every limit;
//! [`RustBackend::with_limits`] restores a cap.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Limits};
use std::path::Path;
use tracing::debug;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    limits: Limits,
}

impl RustBackend {
    pub fn new() -> Self {
        Self::with_limits(Limits::no_limits())
    }

    /// Backend whose decoders are bounded by `limits`.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The container format is detected from the leading bytes, so a PNG saved
/// as `.jpg` still decodes.
fn load_image(path: &Path, limits: &Limits) -> Result<DynamicImage, BackendError> {
    let mut reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.limits(limits.clone());
    reader.decode().map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => save_jpeg(img, path, quality),
        "png" => save_png(img, path),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

fn save_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    // JPEG has no alpha channel
    let rgb;
    let img = if img.color().has_alpha() {
        rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        &rgb
    } else {
        img
    };

    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(writer))
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let img = load_image(path, &self.limits)?;
        debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "decoded image"
        );
        Ok(img)
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        Dimensions {
            width: image.width(),
            height: image.height(),
        }
    }

    fn resize(&self, image: &DynamicImage, params: &ResizeParams) -> Result<(), BackendError> {
        let resized = image.resize_exact(params.width, params.height, FilterType::Lanczos3);
        debug!(
            source = %params.source.display(),
            output = %params.output.display(),
            from = %format!("{}x{}", image.width(), image.height()),
            to = %format!("{}x{}", params.width, params.height),
            "resampled with lanczos3"
        );
        save_image(&resized, &params.output, params.quality.value())
    }
}
