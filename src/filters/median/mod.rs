//! Sliding-window median filter.
//!
//! Each pixel's R, G, B channels are replaced by the per-channel median of
//! a square, edge-clamped neighborhood centered on it. Samples are read
//! from an immutable snapshot taken before the pass, so no output pixel is
//! ever computed from already-filtered neighbors. Alpha is untouched.
//!
//! The window diameter is a runtime parameter: odd, at most
//! [`MAX_DIAMETER`]. A diameter of 1 degenerates to the identity.


use arrayvec::ArrayVec;
use rayon::prelude::*;

use super::ConfigError;
use crate::common::parallel;
use crate::image::{Image, BYTES_PER_PIXEL};

/// Largest supported window diameter.
pub const MAX_DIAMETER: usize = 15;

const MAX_SAMPLES: usize = MAX_DIAMETER * MAX_DIAMETER;

/// One channel's window samples, capacity fixed at compile time.
type Window = ArrayVec<u8, MAX_SAMPLES>;

/// Reusable per-worker scratch holding one pixel's channel samples.
#[derive(Default)]
struct WindowScratch {
    r: Window,
    g: Window,
    b: Window,
}

fn validate_diameter(diameter: usize) -> Result<(), ConfigError> {
    // 0 is even, so a zero diameter is rejected here too.
    if diameter % 2 == 0 {
        return Err(ConfigError::EvenDiameter { diameter });
    }
    if diameter > MAX_DIAMETER {
        return Err(ConfigError::DiameterTooLarge {
            diameter,
            max: MAX_DIAMETER,
        });
    }
    Ok(())
}

/// Clamp a neighbor coordinate onto the image edge (border replication).
#[inline]
fn clamp_coord(v: isize, max: isize) -> usize {
    v.clamp(0, max) as usize
}

/// Compute the median R, G, B for the window centered on pixel `pixel`
/// (a flat row-major index) and write them into `out`; the alpha byte of
/// `out` is left as-is.
#[inline]
fn median_pixel(
    snapshot: &[u8],
    width: usize,
    height: usize,
    pixel: usize,
    diameter: usize,
    scratch: &mut WindowScratch,
    out: &mut [u8],
) {
    let x = (pixel % width) as isize;
    let y = (pixel / width) as isize;
    let radius = (diameter / 2) as isize;
    let max_x = width as isize - 1;
    let max_y = height as isize - 1;

    scratch.r.clear();
    scratch.g.clear();
    scratch.b.clear();

    for dy in -radius..=radius {
        let ny = clamp_coord(y + dy, max_y);
        let row = ny * width;
        for dx in -radius..=radius {
            let nx = clamp_coord(x + dx, max_x);
            let idx = (row + nx) * BYTES_PER_PIXEL;
            scratch.r.push(snapshot[idx]);
            scratch.g.push(snapshot[idx + 1]);
            scratch.b.push(snapshot[idx + 2]);
        }
    }

    // Odd diameter means an odd sample count, so the element at rank
    // D*D/2 is the exact middle; only that rank needs to be in place.
    let mid = diameter * diameter / 2;
    out[0] = *scratch.r.select_nth_unstable(mid).1;
    out[1] = *scratch.g.select_nth_unstable(mid).1;
    out[2] = *scratch.b.select_nth_unstable(mid).1;
}

/// Median-filter sequentially, visiting pixels in row-major order.
pub fn median_scalar(image: &mut Image, diameter: usize) -> Result<(), ConfigError> {
    validate_diameter(diameter)?;
    image.assert_pixel_count();

    let width = image.width();
    let height = image.height();
    tracing::debug!(width, height, diameter, "median pass (scalar)");

    let snapshot = image.pixels().to_vec();

    let mut scratch = WindowScratch::default();
    for pixel in 0..width * height {
        let idx = pixel * BYTES_PER_PIXEL;
        let out = &mut image.pixels_mut()[idx..idx + BYTES_PER_PIXEL];
        median_pixel(&snapshot, width, height, pixel, diameter, &mut scratch, out);
    }

    Ok(())
}

/// Median-filter with the pixel range statically partitioned across worker
/// threads.
///
/// Both loop dimensions collapse into one flat pixel range; chunks may span
/// row boundaries, which balances load better than whole-row splits. Every
/// worker reads the shared snapshot and writes its own disjoint output
/// chunk, so the only synchronization is the implicit join at the end.
/// Pixel-identical to [`median_scalar`] for the same diameter.
pub fn median_parallel(image: &mut Image, diameter: usize) -> Result<(), ConfigError> {
    validate_diameter(diameter)?;
    image.assert_pixel_count();

    let width = image.width();
    let height = image.height();
    let total_pixels = width * height;
    if total_pixels == 0 {
        return Ok(());
    }
    tracing::debug!(width, height, diameter, "median pass (parallel)");

    let snapshot = image.pixels().to_vec();
    let chunk_bytes = parallel::pixels_per_chunk(total_pixels) * BYTES_PER_PIXEL;

    image
        .pixels_mut()
        .par_chunks_mut(chunk_bytes)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let first_pixel = chunk_idx * chunk_bytes / BYTES_PER_PIXEL;
            let mut scratch = WindowScratch::default();
            for (i, out) in chunk.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let pixel = first_pixel + i;
                median_pixel(&snapshot, width, height, pixel, diameter, &mut scratch, out);
            }
        });

    Ok(())
}
