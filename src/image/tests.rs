//! Tests for the RGBA8 image buffer and PNG round-tripping.

use std::env;
use std::fs;
use std::path::PathBuf;

use image as image_lib;

use super::error::{DecodeError, EncodeError};
use super::*;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("filtrarium_test_{}_{}", std::process::id(), name))
}

fn gradient_image(width: usize, height: usize) -> Image {
    let mut pixels = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 29) as u8);
            pixels.push((y * 31) as u8);
            pixels.push((x + y) as u8);
            pixels.push(255 - (x as u8));
        }
    }
    Image::from_raw(width, height, pixels)
}

#[test]
fn test_from_raw_accessors() {
    let image = gradient_image(8, 5);
    assert_eq!(image.width(), 8);
    assert_eq!(image.height(), 5);
    assert_eq!(image.pixels().len(), 8 * 5 * BYTES_PER_PIXEL);
    assert_eq!(image.pixel_index(0, 1), 8 * BYTES_PER_PIXEL);
    assert_eq!(image.pixel(3, 2), [87, 62, 5, 252]);
}

#[test]
#[should_panic(expected = "pixel buffer length")]
fn test_from_raw_length_mismatch() {
    Image::from_raw(2, 2, vec![0; 15]);
}

#[test]
fn test_new_filled() {
    let image = Image::new_filled(3, 2, [1, 2, 3, 4]);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(image.pixel(x, y), [1, 2, 3, 4]);
        }
    }
}

#[test]
fn test_png_roundtrip() {
    let path = temp_path("roundtrip.png");
    let original = gradient_image(8, 5);

    original.save(&path).unwrap();
    let loaded = Image::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn test_load_missing_file() {
    let err = Image::load(temp_path("does_not_exist.png")).unwrap_err();
    assert!(matches!(err, DecodeError::Open { .. }), "{err}");
}

#[test]
fn test_load_malformed_file() {
    let path = temp_path("malformed.png");
    fs::write(&path, b"this is not a png").unwrap();

    let err = Image::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, DecodeError::Malformed { .. }), "{err}");
}

#[test]
fn test_save_unwritable_destination() {
    let image = gradient_image(2, 2);
    let path = temp_path("missing_dir").join("out.png");

    let err = image.save(&path).unwrap_err();
    assert!(matches!(err, EncodeError::Write { .. }), "{err}");
}

#[test]
fn test_rgb_input_normalized_to_opaque_rgba() {
    let path = temp_path("rgb_input.png");
    let rgb: Vec<u8> = vec![
        10, 20, 30, //
        40, 50, 60, //
        70, 80, 90, //
        100, 110, 120,
    ];
    image_lib::save_buffer_with_format(
        &path,
        &rgb,
        2,
        2,
        image_lib::ExtendedColorType::Rgb8,
        image_lib::ImageFormat::Png,
    )
    .unwrap();

    let loaded = Image::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.pixel(0, 0), [10, 20, 30, 255]);
    assert_eq!(loaded.pixel(1, 0), [40, 50, 60, 255]);
    assert_eq!(loaded.pixel(0, 1), [70, 80, 90, 255]);
    assert_eq!(loaded.pixel(1, 1), [100, 110, 120, 255]);
}
