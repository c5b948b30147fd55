//! NEON implementation of the invert filter for aarch64.

#![allow(unsafe_op_in_unsafe_fn)]

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::filters::invert::invert_pixel_bytes;

/// Invert R, G, B bytes in place using NEON 16-byte (4-pixel) batches.
///
/// # Safety
/// Caller must ensure this is running on aarch64 (NEON is baseline there).
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn invert_neon(bytes: &mut [u8]) {
    let ptr = bytes.as_mut_ptr();
    let batches = bytes.len() / 16;

    let all_255 = vdupq_n_u8(255);
    // 0xFF at the alpha byte of each 4-byte pixel (little-endian lanes).
    let alpha_mask = vreinterpretq_u8_u32(vdupq_n_u32(0xFF00_0000));

    for i in 0..batches {
        let p = ptr.add(i * 16);
        let px = vld1q_u8(p);
        let negated = vqsubq_u8(all_255, px);
        // Select alpha lanes from the original, everything else negated.
        let out = vbslq_u8(alpha_mask, px, negated);
        vst1q_u8(p, out);
    }

    invert_pixel_bytes(&mut bytes[batches * 16..]);
}
