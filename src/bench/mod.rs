//! Criterion benchmark implementations.
//!
//! Gated behind the `bench` feature so criterion stays out of normal
//! builds. Run with: `cargo bench --features bench`

pub mod invert;
pub mod median;

use crate::image::Image;

/// Synthetic RGBA test image with a deterministic per-pixel pattern.
pub(crate) fn synthetic_image(width: usize, height: usize) -> Image {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 7 + y * 13) as u8);
            pixels.push((x * 3 + y * 5) as u8);
            pixels.push((x ^ y) as u8);
            pixels.push(255);
        }
    }
    Image::from_raw(width, height, pixels)
}
