//! Extension-based file classification.
//!
//! Every input file falls into exactly one [`FileKind`]. The extension is
//! compared case-insensitively, so `Brick.JPG`, `brick.Jpeg` and `brick.jpg`
//! are all JPEG:
//!
//! | Extension | Kind |
//! |---|---|
//! | `jpg`, `jpeg` | [`FileKind::Jpeg`] (lossy, re-encoded when resized) |
//! | `png` | [`FileKind::Png`] (lossless, see [`LosslessPolicy`](crate::config::LosslessPolicy)) |
//! | anything else, or none | [`FileKind::Other`] (copied verbatim) |

use std::path::Path;

/// Classification of a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Jpeg,
    Png,
    Other,
}

impl FileKind {
    /// True for the raster formats the converter decodes.
    pub fn is_image(self) -> bool {
        !matches!(self, FileKind::Other)
    }
}

const IMAGE_EXTENSIONS: &[(&str, FileKind)] = &[
    ("jpg", FileKind::Jpeg),
    ("jpeg", FileKind::Jpeg),
    ("png", FileKind::Png),
];

/// Classify a path by its extension.
pub fn classify(path: &Path) -> FileKind {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    IMAGE_EXTENSIONS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, kind)| *kind)
        .unwrap_or(FileKind::Other)
}
