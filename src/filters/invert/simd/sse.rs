//! SSE2 and AVX2 implementations of the invert filter.
//!
//! Each batch is subtracted from an all-255 vector with 8-bit saturation,
//! then the original alpha bytes (every 4th lane) are blended back through
//! a per-pixel mask so the alpha channel passes through unchanged.

#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::filters::invert::invert_pixel_bytes;

/// Invert R, G, B bytes in place using AVX2 32-byte (8-pixel) batches.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn invert_avx2(bytes: &mut [u8]) {
    let ptr = bytes.as_mut_ptr();
    let batches = bytes.len() / 32;

    let all_255 = _mm256_set1_epi8(-1);
    // 0xFF at the alpha byte of each 4-byte pixel (little-endian lanes).
    let alpha_mask = _mm256_set1_epi32(0xFF00_0000u32 as i32);

    for i in 0..batches {
        let p = ptr.add(i * 32) as *mut __m256i;
        let px = _mm256_loadu_si256(p);
        let negated = _mm256_subs_epu8(all_255, px);
        let rgb = _mm256_andnot_si256(alpha_mask, negated);
        let alpha = _mm256_and_si256(alpha_mask, px);
        _mm256_storeu_si256(p, _mm256_or_si256(rgb, alpha));
    }

    // Scalar tail for the bytes after the last whole batch.
    invert_pixel_bytes(&mut bytes[batches * 32..]);
}

/// Invert R, G, B bytes in place using SSE2 16-byte (4-pixel) batches.
///
/// # Safety
/// Caller must ensure SSE2 is available.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
pub unsafe fn invert_sse2(bytes: &mut [u8]) {
    let ptr = bytes.as_mut_ptr();
    let batches = bytes.len() / 16;

    let all_255 = _mm_set1_epi8(-1);
    let alpha_mask = _mm_set1_epi32(0xFF00_0000u32 as i32);

    for i in 0..batches {
        let p = ptr.add(i * 16) as *mut __m128i;
        let px = _mm_loadu_si128(p);
        let negated = _mm_subs_epu8(all_255, px);
        let rgb = _mm_andnot_si128(alpha_mask, negated);
        let alpha = _mm_and_si128(alpha_mask, px);
        _mm_storeu_si128(p, _mm_or_si128(rgb, alpha));
    }

    invert_pixel_bytes(&mut bytes[batches * 16..]);
}
