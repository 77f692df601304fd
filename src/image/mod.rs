//! Pixel containers used by the filters.
//!
//! - [`PixelBuffer`]: caller-owned RGBA frame, the only type crossing the
//!   public boundary.
//! - [`GrayImage`]: transient 8-bit luminance plane.
//! - [`ImageF32`]: float plane for convolution responses and gradients.
//!
//! All planes are row-major with `stride == width`.

pub mod f32;
pub mod gray;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::gray::GrayImage;
pub use self::rgba::{from_grayscale, to_grayscale, PixelBuffer, OPAQUE};
pub use self::traits::ImageView;
