use rasterkit_image::{Image, ImageError};

use super::convolution::{convolve, convolve_channel_raw, validate, Border};
use super::mask::{Axis, Mask};

/// Blur an image with a separable Gaussian filter.
///
/// Runs a horizontal then a vertical 1D Gaussian pass, which approximates the
/// full 2D kernel of [`Mask::gaussian2d`] within one intensity level per
/// sample at a fraction of the cost.
///
/// # Errors
///
/// Fails for a non-positive `sigma` or mismatched image shapes.
pub fn gaussian_blur<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    sigma: f32,
    border: Border,
) -> Result<(), ImageError> {
    let kernel_x = Mask::gaussian1d(sigma, Axis::Horizontal)?;
    let kernel_y = Mask::gaussian1d(sigma, Axis::Vertical)?;

    let mut tmp = Image::from_size_val(src.size(), 0u8)?;
    convolve(src, &mut tmp, &kernel_x, border)?;
    convolve(&tmp, dst, &kernel_y, border)?;

    Ok(())
}

/// Blur an image with the fixed 3x3 box kernel.
pub fn box_blur<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    border: Border,
) -> Result<(), ImageError> {
    convolve(src, dst, &Mask::box_blur3(), border)
}

/// Sharpen an image with the fixed 5x5 kernel.
pub fn sharpen<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    border: Border,
) -> Result<(), ImageError> {
    convolve(src, dst, &Mask::sharpen5(), border)
}

/// Emboss an image with the fixed 3x3 kernel.
pub fn emboss<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    border: Border,
) -> Result<(), ImageError> {
    convolve(src, dst, &Mask::emboss3(), border)
}

/// Compute the Sobel gradient magnitude of an image.
///
/// For every channel the horizontal and vertical gradients are accumulated
/// unsaturated, then combined as `sqrt(gx^2 + gy^2)` and saturated to a byte.
/// Saturating the two responses individually would discard the negative half
/// of each gradient, so this does not go through [`convolve`].
pub fn sobel<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    border: Border,
) -> Result<(), ImageError> {
    validate::<C>(src, dst, border)?;

    let mask_x = Mask::sobel_x3();
    let mask_y = Mask::sobel_y3();

    for channel in 0..C {
        let gx = convolve_channel_raw(src, channel, &mask_x, border);
        let gy = convolve_channel_raw(src, channel, &mask_y, border);

        let dst_data = dst.as_slice_mut();
        for (i, (gx, gy)) in gx.iter().zip(gy.iter()).enumerate() {
            let magnitude = (gx * gx + gy * gy).sqrt();
            dst_data[i * C + channel] = magnitude.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(())
}
