//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Outcome of comparing an image against the maximum-dimension threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// The longer edge is already within the threshold.
    Unchanged,
    /// The image must be downsampled to exactly these dimensions.
    Resized { width: u32, height: u32 },
}

/// Decide whether an image needs downsampling, and to what size.
///
/// The longer edge is scaled down to `threshold` and the other edge by the
/// same ratio. Both results are truncated toward zero, then clamped to at
/// least one pixel.
///
/// # Arguments
/// * `original` - Original image dimensions (width, height)
/// * `threshold` - Maximum allowed length of the longer edge
///
/// # Examples
/// ```
/// # use downsample::imaging::{ResizeDecision, calculate_resize};
/// assert_eq!(
///     calculate_resize((4096, 2048), 2048),
///     ResizeDecision::Resized { width: 2048, height: 1024 }
/// );
///
/// // At or under the threshold nothing happens
/// assert_eq!(calculate_resize((2048, 1536), 2048), ResizeDecision::Unchanged);
/// ```
pub fn calculate_resize(original: (u32, u32), threshold: u32) -> ResizeDecision {
    let (orig_w, orig_h) = original;
    let longer_edge = orig_w.max(orig_h);

    if longer_edge <= threshold {
        return ResizeDecision::Unchanged;
    }

    let ratio = longer_edge as f64 / threshold as f64;
    let width = ((orig_w as f64 / ratio) as u32).max(1);
    let height = ((orig_h as f64 / ratio) as u32).max(1);

    ResizeDecision::Resized { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Threshold boundary
    // =========================================================================

    #[test]
    fn under_threshold_is_unchanged() {
        assert_eq!(calculate_resize((1024, 768), 2048), ResizeDecision::Unchanged);
    }

    #[test]
    fn exactly_threshold_is_unchanged() {
        assert_eq!(calculate_resize((2048, 2048), 2048), ResizeDecision::Unchanged);
        assert_eq!(calculate_resize((2048, 10), 2048), ResizeDecision::Unchanged);
        assert_eq!(calculate_resize((10, 2048), 2048), ResizeDecision::Unchanged);
    }

    #[test]
    fn one_pixel_over_threshold_resizes() {
        assert_eq!(
            calculate_resize((2049, 2049), 2048),
            ResizeDecision::Resized {
                width: 2048,
                height: 2048
            }
        );
    }

    // =========================================================================
    // Proportional scaling
    // =========================================================================

    #[test]
    fn landscape_scales_width_to_threshold() {
        assert_eq!(
            calculate_resize((4096, 2048), 2048),
            ResizeDecision::Resized {
                width: 2048,
                height: 1024
            }
        );
    }

    #[test]
    fn portrait_scales_height_to_threshold() {
        assert_eq!(
            calculate_resize((3000, 6000), 2048),
            ResizeDecision::Resized {
                width: 1024,
                height: 2048
            }
        );
    }

    #[test]
    fn square_scales_both_edges() {
        assert_eq!(
            calculate_resize((8192, 8192), 2048),
            ResizeDecision::Resized {
                width: 2048,
                height: 2048
            }
        );
    }

    #[test]
    fn short_edge_is_truncated_not_rounded() {
        // ratio = 3000 / 2048 = 1.46484375; 1999 / ratio = 1364.65... → 1364
        assert_eq!(
            calculate_resize((3000, 1999), 2048),
            ResizeDecision::Resized {
                width: 2048,
                height: 1364
            }
        );
    }

    #[test]
    fn custom_threshold() {
        // ratio = 1000 / 100 = 10
        assert_eq!(
            calculate_resize((1000, 750), 100),
            ResizeDecision::Resized {
                width: 100,
                height: 75
            }
        );
    }

    #[test]
    fn extreme_aspect_never_reaches_zero() {
        // 10000x3 at 100 → height would truncate to 0
        assert_eq!(
            calculate_resize((10000, 3), 100),
            ResizeDecision::Resized {
                width: 100,
                height: 1
            }
        );
    }

    #[test]
    fn longer_edge_always_equals_threshold() {
        for (w, h) in [(4097, 17), (5000, 4999), (2049, 4100), (12345, 6789)] {
            match calculate_resize((w, h), 2048) {
                ResizeDecision::Resized { width, height } => {
                    assert_eq!(width.max(height), 2048, "for {w}x{h}");
                }
                ResizeDecision::Unchanged => panic!("{w}x{h} should resize"),
            }
        }
    }
}
