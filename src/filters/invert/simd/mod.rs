//! SIMD-accelerated channel inversion.
//!
//! Runtime dispatch to the widest available implementation:
//! - AVX2 (32-byte, 8-pixel batches) or SSE2 (16-byte) on x86_64
//! - NEON (16-byte) on aarch64
//! - Scalar fallback elsewhere
//!
//! All paths share the same semantics: every batch is subtracted from an
//! all-255 vector with 8-bit saturation, the original alpha lanes are
//! blended back so alpha passes through unchanged, and a scalar tail
//! handles the bytes after the last whole batch. Batch widths are always a
//! multiple of the pixel stride, so batches and tail split on pixel
//! boundaries.

#[cfg(target_arch = "x86_64")]
use crate::common::cpu_features;

#[cfg(target_arch = "x86_64")]
pub mod sse;

#[cfg(target_arch = "aarch64")]
pub mod neon;

/// Invert the R, G, B bytes of every pixel in `bytes`, dispatching to the
/// best SIMD implementation available at runtime.
#[inline]
pub fn invert_bytes(bytes: &mut [u8]) {
    #[cfg(target_arch = "x86_64")]
    {
        if bytes.len() >= 32 && cpu_features::has_avx2() {
            unsafe {
                sse::invert_avx2(bytes);
            }
            return;
        }
        if bytes.len() >= 16 && cpu_features::has_sse2() {
            unsafe {
                sse::invert_sse2(bytes);
            }
            return;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if bytes.len() >= 16 {
            unsafe {
                neon::invert_neon(bytes);
            }
            return;
        }
    }

    // Scalar fallback, also taken for buffers smaller than one batch.
    super::invert_pixel_bytes(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::invert::invert_pixel_bytes;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 37 % 256) as u8).collect()
    }

    #[test]
    fn test_simd_matches_scalar() {
        // 64 pixels: exercises whole AVX2 and SSE2 batches.
        let mut scalar = pattern(64 * 4);
        let mut simd = scalar.clone();

        invert_pixel_bytes(&mut scalar);
        invert_bytes(&mut simd);

        assert_eq!(scalar, simd);
    }

    #[test]
    fn test_simd_matches_scalar_on_tails() {
        // Every pixel count from 0 to 40 covers all batch remainders for
        // both 16- and 32-byte lanes.
        for pixels in 0..=40 {
            let mut scalar = pattern(pixels * 4);
            let mut simd = scalar.clone();

            invert_pixel_bytes(&mut scalar);
            invert_bytes(&mut simd);

            assert_eq!(scalar, simd, "mismatch at {pixels} pixels");
        }
    }

    #[test]
    fn test_alpha_lane_passthrough() {
        let mut bytes: Vec<u8> = (0..32 * 4).map(|i| (i % 251) as u8).collect();
        let alphas: Vec<u8> = bytes.iter().skip(3).step_by(4).copied().collect();

        invert_bytes(&mut bytes);

        let after: Vec<u8> = bytes.iter().skip(3).step_by(4).copied().collect();
        assert_eq!(alphas, after);
    }
}
