//! CPU feature detection for runtime SIMD dispatch.
//!
//! Detection runs once and is cached. Use these functions instead of the
//! `is_x86_feature_detected!` macro directly to avoid repeated CPUID calls
//! in per-image hot paths.

#[cfg(target_arch = "x86_64")]
use std::sync::OnceLock;

/// CPU feature flags detected once on first use.
#[derive(Debug, Clone, Copy)]
pub struct X86Features {
    pub sse2: bool,
    pub avx2: bool,
}

#[cfg(target_arch = "x86_64")]
static FEATURES: OnceLock<X86Features> = OnceLock::new();

/// Get cached CPU features (detected on first call).
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn get() -> X86Features {
    *FEATURES.get_or_init(|| X86Features {
        sse2: is_x86_feature_detected!("sse2"),
        avx2: is_x86_feature_detected!("avx2"),
    })
}

/// Get cached CPU features - stub for non-x86 platforms.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
pub fn get() -> X86Features {
    X86Features {
        sse2: false,
        avx2: false,
    }
}

/// Check if SSE2 is available.
#[inline]
pub fn has_sse2() -> bool {
    get().sse2
}

/// Check if AVX2 is available.
#[inline]
pub fn has_avx2() -> bool {
    get().avx2
}
