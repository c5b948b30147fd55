//! Filter selection and dispatch.
//!
//! A filter is addressed by a two-character code: the filter family
//! (`i` invert, `m` median) followed by the execution strategy (`s` scalar,
//! `p` parallel, `v` vectorized). Unrecognized combinations are rejected
//! without touching the image.

pub mod invert;
pub mod median;

use std::fmt;

use thiserror::Error;

use crate::image::Image;

/// Unsupported filter parameters or unrecognized filter codes.
///
/// None of these apply any mutation: they are reported before a filter pass
/// starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown filter '{code}'")]
    UnknownFilter { code: String },

    #[error("median diameter must be odd, got {diameter}")]
    EvenDiameter { diameter: usize },

    #[error("median diameter {diameter} exceeds maximum {max}")]
    DiameterTooLarge { diameter: usize, max: usize },
}

/// Filter family, the first character of a filter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFamily {
    Invert,
    Median,
}

/// Execution strategy, the second character of a filter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Scalar,
    Parallel,
    Vectorized,
}

/// A parsed filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub family: FilterFamily,
    pub strategy: Strategy,
}

impl FilterSpec {
    /// Parse a two-character filter code.
    ///
    /// `mv` is rejected along with everything else unrecognized: the median
    /// filter has no vectorized variant.
    pub fn parse(code: &str) -> Result<Self, ConfigError> {
        let unknown = || ConfigError::UnknownFilter {
            code: code.to_string(),
        };

        let mut chars = code.chars();
        let family = match chars.next() {
            Some('i') => FilterFamily::Invert,
            Some('m') => FilterFamily::Median,
            _ => return Err(unknown()),
        };
        let strategy = match chars.next() {
            Some('s') => Strategy::Scalar,
            Some('p') => Strategy::Parallel,
            Some('v') => Strategy::Vectorized,
            _ => return Err(unknown()),
        };
        if chars.next().is_some() {
            return Err(unknown());
        }
        if family == FilterFamily::Median && strategy == Strategy::Vectorized {
            return Err(unknown());
        }

        Ok(FilterSpec { family, strategy })
    }

    /// Run the selected filter over `image` in place.
    ///
    /// `diameter` applies to the median family only and is validated there.
    pub fn apply(&self, image: &mut Image, diameter: usize) -> Result<(), ConfigError> {
        match (self.family, self.strategy) {
            (FilterFamily::Invert, Strategy::Scalar) => invert::invert_scalar(image),
            (FilterFamily::Invert, Strategy::Parallel) => invert::invert_parallel(image),
            (FilterFamily::Invert, Strategy::Vectorized) => invert::invert_simd(image),
            (FilterFamily::Median, Strategy::Scalar) => median::median_scalar(image, diameter)?,
            (FilterFamily::Median, Strategy::Parallel) => median::median_parallel(image, diameter)?,
            (FilterFamily::Median, Strategy::Vectorized) => {
                return Err(ConfigError::UnknownFilter {
                    code: "mv".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.family {
            FilterFamily::Invert => "invert",
            FilterFamily::Median => "median",
        };
        let strategy = match self.strategy {
            Strategy::Scalar => "scalar",
            Strategy::Parallel => "parallel",
            Strategy::Vectorized => "vectorized",
        };
        write!(f, "{family} ({strategy})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        for (code, family, strategy) in [
            ("is", FilterFamily::Invert, Strategy::Scalar),
            ("ip", FilterFamily::Invert, Strategy::Parallel),
            ("iv", FilterFamily::Invert, Strategy::Vectorized),
            ("ms", FilterFamily::Median, Strategy::Scalar),
            ("mp", FilterFamily::Median, Strategy::Parallel),
        ] {
            let spec = FilterSpec::parse(code).unwrap();
            assert_eq!(spec.family, family, "code {code}");
            assert_eq!(spec.strategy, strategy, "code {code}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for code in ["", "i", "m", "xx", "sv", "isp", "mv", "IS"] {
            assert!(
                matches!(
                    FilterSpec::parse(code),
                    Err(ConfigError::UnknownFilter { .. })
                ),
                "code {code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unknown_code_leaves_image_unchanged() {
        let image = crate::image::Image::new_filled(4, 4, [10, 20, 30, 255]);
        let mut filtered = image.clone();
        assert!(FilterSpec::parse("mv").is_err());
        // No spec, no apply - nothing may have touched the buffer.
        assert_eq!(image, filtered);
        // Even diameter errors out of apply without mutating.
        let spec = FilterSpec::parse("ms").unwrap();
        assert!(spec.apply(&mut filtered, 4).is_err());
        assert_eq!(image, filtered);
    }
}
