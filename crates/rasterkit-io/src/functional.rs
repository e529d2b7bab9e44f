use std::path::Path;

use image::{ExtendedColorType, ImageFormat, ImageReader};

use rasterkit_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to RGB.
///
/// The method tries to read any image format supported by the image crate;
/// grayscale sources are expanded and an alpha channel is dropped.
///
/// # Example
///
/// ```no_run
/// use rasterkit_image::Image;
/// use rasterkit_io::functional as F;
///
/// let image: Image<u8, 3> = F::read_image_any_rgb8("dog.png").unwrap();
/// ```
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = decode(file_path.as_ref())?;
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads an image from the given file path and converts it to RGBA.
///
/// Sources without an alpha channel become fully opaque.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let img = decode(file_path.as_ref())?;
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(Image::new(size, img.into_rgba8().into_raw())?)
}

/// Reads an image from the given file path and converts it to 8-bit
/// grayscale.
pub fn read_image_any_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let img = decode(file_path.as_ref())?;
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

fn decode(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    Ok(ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?)
}

/// Writes an image to the given file path.
///
/// The format is chosen from the file extension; extensions that do not name
/// a supported format fall back to PNG. Grayscale, RGB and RGBA images are
/// supported.
///
/// # Example
///
/// ```no_run
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_io::functional as F;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     0u8,
/// )
/// .unwrap();
///
/// F::write_image("out.png", &image).unwrap();
/// ```
pub fn write_image<const C: usize>(
    file_path: impl AsRef<Path>,
    image: &Image<u8, C>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let color_type = match C {
        1 => ExtendedColorType::L8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        _ => return Err(IoError::UnsupportedChannelCount(C)),
    };

    let format = ImageFormat::from_path(file_path)
        .ok()
        .filter(|f| matches!(f, ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp))
        .unwrap_or(ImageFormat::Png);

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        color_type,
        format,
    )?;

    Ok(())
}
