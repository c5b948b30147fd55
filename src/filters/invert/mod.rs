//! Channel inversion filter.
//!
//! Replaces every R, G, B byte with `255 - value`. The alpha channel is
//! preserved byte-for-byte by all three variants, so every variant produces
//! identical output and double inversion restores the original image
//! exactly.

pub mod simd;


use rayon::prelude::*;

use crate::common::parallel;
use crate::image::{Image, BYTES_PER_PIXEL};

/// Invert the R, G, B bytes of every whole pixel in `bytes`.
///
/// Shared by the scalar variant, the parallel chunk bodies, and the SIMD
/// tail loops.
#[inline]
pub(crate) fn invert_pixel_bytes(bytes: &mut [u8]) {
    for px in bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

/// Invert sequentially in a single pass.
pub fn invert_scalar(image: &mut Image) {
    image.assert_pixel_count();
    invert_pixel_bytes(image.pixels_mut());
}

/// Invert with the pixel range statically partitioned across worker threads.
///
/// Each worker owns a disjoint, contiguous whole-pixel chunk of the buffer,
/// so no synchronization is needed beyond the implicit join at the end.
/// Byte-identical to [`invert_scalar`].
pub fn invert_parallel(image: &mut Image) {
    image.assert_pixel_count();

    let total_pixels = image.width() * image.height();
    if total_pixels == 0 {
        return;
    }

    let chunk_bytes = parallel::pixels_per_chunk(total_pixels) * BYTES_PER_PIXEL;
    image
        .pixels_mut()
        .par_chunks_mut(chunk_bytes)
        .for_each(|chunk| invert_pixel_bytes(chunk));
}

/// Invert in multi-pixel SIMD batches with a scalar tail.
///
/// Dispatches at runtime to the widest available implementation; see
/// [`simd`]. Byte-identical to [`invert_scalar`].
pub fn invert_simd(image: &mut Image) {
    image.assert_pixel_count();
    simd::invert_bytes(image.pixels_mut());
}
