//! Encoding rendered surfaces as image files.

use crate::surface::Surface;
use crate::NotesError;
use chrono::{DateTime, Local, TimeZone};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use log::{error, info};
use std::fmt;

/// JPEG quality used for every JPEG export, out of 100
pub const JPEG_QUALITY: u8 = 90;

/// Prefix of suggested export filenames
const FILENAME_PREFIX: &str = "handnote";

/// The image formats a surface can be exported as
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Lossless, keeps the alpha channel
    Png,
    /// Lossy at [JPEG_QUALITY], no alpha channel
    Jpeg,
}

impl ImageFormat {
    /// The conventional file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// The MIME type of the encoded bytes
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
        })
    }
}

/// A fully encoded image, ready to be saved or sent somewhere
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
    /// A unique, time-stamped name to save the image under
    pub filename: String,
}

/// Encode a rendered surface.
///
/// Surfaces that haven't been rendered yet, or that contain nothing but the
/// blank fill, are refused with [NotesError::EmptyCanvas]; render first and try
/// again. Encoding failures surface as [NotesError::Encoding]. Either way no
/// partial output is returned.
pub fn export(surface: &Surface, format: ImageFormat) -> Result<Export, NotesError> {
    if !surface.has_rendered() || surface.is_blank() {
        error!("refusing to export an empty {}x{} surface", surface.width(), surface.height());
        return Err(NotesError::EmptyCanvas);
    }

    let bytes = encode(surface, format)?;
    let filename = suggested_filename(format, &Local::now());
    info!("exported {} bytes of {format} as {filename}", bytes.len());

    Ok(Export {
        format,
        bytes,
        filename,
    })
}

/// Encode the surface's pixels without checking whether anything was rendered
pub fn encode(surface: &Surface, format: ImageFormat) -> Result<Vec<u8>, NotesError> {
    let rgba = surface.to_rgba_image().ok_or(NotesError::EmptyCanvas)?;
    let (width, height) = rgba.dimensions();

    let mut bytes: Vec<u8> = Vec::new();
    match format {
        ImageFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                rgba.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        ImageFormat::Jpeg => {
            // jpeg has no alpha channel
            let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }

    Ok(bytes)
}

/// A unique filename for an export made at `at`, such as
/// `handnote-2024-03-09T14-05-59.png`
pub fn suggested_filename<Tz: TimeZone>(format: ImageFormat, at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!(
        "{FILENAME_PREFIX}-{}.{}",
        at.format("%Y-%m-%dT%H-%M-%S"),
        format.extension()
    )
}
