//! Tone mapping and image writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Color, ImageBuffer};
use lumen_math::Interval;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Quantize one linear channel: clamp to [0, 1], gamma 2 via square root,
/// scale by 255.999 and truncate.
#[inline]
pub fn tone_map(channel: f32) -> u8 {
    (255.999 * Interval::UNIT.clamp(channel).sqrt()) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [tone_map(color.x), tone_map(color.y), tone_map(color.z)]
}

/// Write a plain-text (P3) pixel map, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Tone-mapped copy of the image, top row first.
pub fn to_rgb_image(buffer: &ImageBuffer) -> image::RgbImage {
    image::RgbImage::from_fn(buffer.width, buffer.height, |x, row| {
        image::Rgb(color_to_rgb(buffer.get(x, buffer.height - 1 - row)))
    })
}

/// Save the image, picking the format from the file extension.
///
/// `.ppm` writes the plain-text pixel map; anything else goes through the
/// `image` crate encoders.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        to_rgb_image(image).save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
