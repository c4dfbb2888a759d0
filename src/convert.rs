//! Batch conversion of a texture directory.
//!
//! Every file in the input directory produces exactly one file of the same
//! name in the output directory:
//!
//! | Input | Longer edge | Output |
//! |---|---|---|
//! | other file | - | byte-identical copy |
//! | JPEG / PNG | ≤ threshold | byte-identical copy (never re-compressed) |
//! | JPEG | > threshold | Lanczos3 downsample, re-encoded at quality 100 |
//! | PNG | > threshold | [`LosslessPolicy::Copy`]: byte-identical copy; [`LosslessPolicy::Resize`]: downsampled PNG |
//!
//! Non-image files are copied first, then images. Every image is fully
//! decoded even when it ends up copied, so a corrupt texture fails the run
//! instead of silently propagating. There is no partial-failure recovery:
//! the first error aborts, and re-running reprocesses everything,
//! overwriting previous outputs.
//!
//! JPEG outputs may be larger on disk than their sources. The tool optimizes
//! for the decoded (in-memory) size of the textures, not for file size.

use crate::classify::FileKind;
use crate::config::{Config, LosslessPolicy};
use crate::imaging::{
    BackendError, Dimensions, ImageBackend, Quality, ResizeDecision, ResizeParams, RustBackend,
    calculate_resize,
};
use crate::scan::{self, Entry, ScanError};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Input and output are the same directory: {0}")]
    SameDirectory(PathBuf),
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to process image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// What happened to a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Not an image; copied verbatim.
    Copied,
    /// Image within the threshold; copied verbatim.
    Unchanged(Dimensions),
    /// Image downsampled and re-encoded.
    Resized { from: Dimensions, to: Dimensions },
    /// PNG over the threshold, copied verbatim under [`LosslessPolicy::Copy`].
    KeptOversized(Dimensions),
}

/// Decide how an image is written, from its kind and decoded dimensions.
///
/// Pure: no I/O, so the whole policy table is unit-testable.
pub fn plan_image(kind: FileKind, dims: Dimensions, config: &Config) -> Action {
    match calculate_resize((dims.width, dims.height), config.threshold) {
        ResizeDecision::Unchanged => Action::Unchanged(dims),
        ResizeDecision::Resized { width, height } => {
            let to = Dimensions { width, height };
            match (kind, config.lossless) {
                (FileKind::Png, LosslessPolicy::Copy) => Action::KeptOversized(dims),
                _ => Action::Resized { from: dims, to },
            }
        }
    }
}

/// Progress notifications, delivered in processing order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertEvent {
    /// About to copy a non-image file.
    Copying { source: PathBuf, output: PathBuf },
    /// About to decode an image.
    Processing { source: PathBuf, output: PathBuf },
    /// An image has been written.
    Processed { source: PathBuf, action: Action },
}

/// Per-run counts of each [`Action`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub copied: u32,
    pub unchanged: u32,
    pub resized: u32,
    pub kept_oversized: u32,
}

impl ConvertReport {
    fn record(&mut self, action: &Action) {
        match action {
            Action::Copied => self.copied += 1,
            Action::Unchanged(_) => self.unchanged += 1,
            Action::Resized { .. } => self.resized += 1,
            Action::KeptOversized(_) => self.kept_oversized += 1,
        }
    }

    /// Number of files written to the output directory.
    pub fn total(&self) -> u32 {
        self.copied + self.unchanged + self.resized + self.kept_oversized
    }
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resized, {} unchanged, {} copied",
            self.resized, self.unchanged, self.copied
        )?;
        if self.kept_oversized > 0 {
            write!(f, ", {} oversized PNG kept", self.kept_oversized)?;
        }
        write!(f, " ({} total)", self.total())
    }
}

/// Convert `input_dir` into `output_dir` with the production backend.
pub fn convert(
    input_dir: &Path,
    output_dir: &Path,
    config: &Config,
    on_event: impl FnMut(ConvertEvent),
) -> Result<ConvertReport, ConvertError> {
    let backend = RustBackend::new();
    convert_with_backend(&backend, input_dir, output_dir, config, on_event)
}

/// Convert using a specific backend (allows testing with mock).
pub fn convert_with_backend(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    config: &Config,
    mut on_event: impl FnMut(ConvertEvent),
) -> Result<ConvertReport, ConvertError> {
    // Validates the input, including every entry, before anything is written
    let inventory = scan::scan(input_dir)?;

    if is_same_dir(input_dir, output_dir) {
        return Err(ConvertError::SameDirectory(output_dir.to_path_buf()));
    }

    std::fs::create_dir_all(output_dir).map_err(|source| ConvertError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    debug!(
        images = inventory.images.len(),
        others = inventory.others.len(),
        threshold = config.threshold,
        "scanned input directory"
    );

    let mut report = ConvertReport::default();

    for entry in &inventory.others {
        let output = output_dir.join(&entry.file_name);
        on_event(ConvertEvent::Copying {
            source: entry.path.clone(),
            output: output.clone(),
        });
        copy_file(&entry.path, &output)?;
        report.record(&Action::Copied);
    }

    for entry in &inventory.images {
        let output = output_dir.join(&entry.file_name);
        on_event(ConvertEvent::Processing {
            source: entry.path.clone(),
            output: output.clone(),
        });
        let action = process_image(backend, entry, &output, config)?;
        report.record(&action);
        on_event(ConvertEvent::Processed {
            source: entry.path.clone(),
            action,
        });
    }

    Ok(report)
}

fn process_image(
    backend: &impl ImageBackend,
    entry: &Entry,
    output: &Path,
    config: &Config,
) -> Result<Action, ConvertError> {
    let image_err = |source| ConvertError::Image {
        path: entry.path.clone(),
        source,
    };

    let image = backend.decode(&entry.path).map_err(image_err)?;
    let dims = backend.dimensions(&image);
    let action = plan_image(entry.kind, dims, config);
    debug!(path = %entry.path.display(), ?action, "planned image");

    match action {
        Action::Resized { to, .. } => {
            let params = ResizeParams {
                source: entry.path.clone(),
                output: output.to_path_buf(),
                width: to.width,
                height: to.height,
                quality: Quality::MAX,
            };
            backend.resize(&image, &params).map_err(image_err)?;
        }
        Action::Copied | Action::Unchanged(_) | Action::KeptOversized(_) => {
            copy_file(&entry.path, output)?;
        }
    }

    Ok(action)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), ConvertError> {
    std::fs::copy(from, to).map_err(|source| ConvertError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Copying a directory onto itself would truncate every file.
fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
