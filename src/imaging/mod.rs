//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader`, format sniffed from content, no allocation cap |
//! | **Resize → JPEG/PNG** | Lanczos3 on the decoded pixels + `image` encoders |
//!
//! The module is split into:
//! - **Calculations**: Pure resize arithmetic ([`calculate_resize`])
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{ResizeDecision, calculate_resize};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
