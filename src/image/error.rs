use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding an image from disk.
///
/// All of these are fatal before any filter runs.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open image '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("image '{path}' has a zero dimension")]
    EmptyImage { path: PathBuf },
}

/// Errors that can occur when encoding an image to disk.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write image '{path}': {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}
