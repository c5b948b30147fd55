use std::path::Path;

use image as image_lib;

use super::error::{DecodeError, EncodeError};
use super::Image;

pub(crate) fn load(path: &Path) -> Result<Image, DecodeError> {
    let img = image_lib::open(path).map_err(|source| match source {
        image_lib::ImageError::IoError(source) => DecodeError::Open {
            path: path.to_path_buf(),
            source,
        },
        source => DecodeError::Malformed {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // Normalize every supported color type to RGBA8 so filters always see
    // R,G,B,A byte order.
    let rgba = img.into_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    Ok(Image::from_raw(width, height, rgba.into_raw()))
}

pub(crate) fn save(image: &Image, path: &Path) -> Result<(), EncodeError> {
    image_lib::save_buffer_with_format(
        path,
        image.pixels(),
        image.width() as u32,
        image.height() as u32,
        image_lib::ExtendedColorType::Rgba8,
        image_lib::ImageFormat::Png,
    )
    .map_err(|source| EncodeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
