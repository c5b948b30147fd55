//! Filtrarium - raster image filters with selectable execution strategies.
//!
//! This library applies per-pixel and neighborhood filters to RGBA8 images,
//! offering each filter in several execution strategies so their throughput
//! can be compared:
//!
//! - **Invert**: channel negation, in scalar, data-parallel and SIMD form
//! - **Median**: sliding-window denoising, in scalar and data-parallel form
//!
//! Parallel variants statically partition the pixel range into disjoint
//! chunks over a thread pool; the SIMD variant processes multi-pixel byte
//! batches with a scalar tail. All variants of a filter produce identical
//! output - only wall-clock time differs.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use filtrarium::{median_parallel, Image};
//!
//! let mut image = Image::load("noisy.png")?;
//! median_parallel(&mut image, 7)?;
//! image.save("clean.png")?;
//! ```

pub(crate) mod common;
mod filters;
mod image;

#[cfg(feature = "bench")]
pub mod bench;

// ============================================================================
// Core image type
// ============================================================================

pub use crate::image::error::{DecodeError, EncodeError};
pub use crate::image::{Image, BYTES_PER_PIXEL};

// ============================================================================
// Filters
// ============================================================================

pub use filters::invert::{invert_parallel, invert_scalar, invert_simd};
pub use filters::median::{median_parallel, median_scalar, MAX_DIAMETER};
pub use filters::{ConfigError, FilterFamily, FilterSpec, Strategy};
