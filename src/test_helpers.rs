//! Shared test utilities: synthetic texture generation and directory
//! comparison helpers.

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::collections::BTreeMap;
use std::path::Path;

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid RGB PNG file with the given dimensions, whatever
/// the extension of `path`.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Create a PNG with a varying alpha channel, like a decal texture.
pub fn create_test_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([200, (x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Snapshot a directory as `file name → bytes` (non-recursive).
pub fn read_dir_contents(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .map(|e| {
            (
                e.file_name().to_string_lossy().into_owned(),
                std::fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}
