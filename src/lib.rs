//! # downsample
//!
//! Batch-downsamples a directory of textures so that no image's longer edge
//! exceeds a threshold (2048 px by default). It is meant for 3D editors that
//! keep every texture uncompressed in memory: keep the originals in one
//! directory, generate a smaller mirror with this tool, and point the
//! project at whichever one you need.
//!
//! ```text
//! downsample textures/ textures-2k/
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists and classifies the immediate children of the input directory |
//! | [`classify`] | Case-insensitive extension → [`classify::FileKind`] |
//! | [`convert`] | The batch converter: copy vs. resize vs. re-encode, in order |
//! | [`imaging`] | Resize arithmetic, backend trait, `image`-crate backend |
//! | [`config`] | Threshold and PNG policy, from TOML and command-line overrides |
//! | [`output`] | Per-file diagnostics and run summary formatting |
//!
//! # Design Decisions
//!
//! ## Copy Whenever Possible
//!
//! Files that don't need resizing are copied byte for byte, including images
//! under the threshold. Re-encoding a JPEG that is already small enough would
//! only lose quality.
//!
//! ## Quality 100 For Resized JPEGs
//!
//! Resized JPEGs are written at maximum quality, so the output can be larger
//! on disk than the input. Only the decoded size matters to the editor.
//!
//! ## Oversized PNGs
//!
//! Earlier releases copied oversized PNGs unresized. That remains the
//! default ([`config::LosslessPolicy::Copy`]) so existing output directories
//! stay bit-for-bit reproducible; `lossless = "resize"` downsamples them like
//! JPEGs and writes a new PNG.
//!
//! ## All-Or-Nothing Runs
//!
//! The first error (unreadable image, failed write) aborts the run. Output is
//! a pure function of the input directory, so the fix is to repair the input
//! and run again; outputs are overwritten in place.

pub mod classify;
pub mod config;
pub mod convert;
pub mod imaging;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
