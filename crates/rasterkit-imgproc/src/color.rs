use rasterkit_image::Image;

use crate::parallel;

/// Luminance weights (ITU-R BT.709).
const RW: f32 = 0.2126;
const GW: f32 = 0.7152;
const BW: f32 = 0.0722;

/// Convert an image to grayscale in place using the channel average.
///
/// Writes `(r + g + b) / 3` (integer truncation) to the three color channels
/// of every pixel; an alpha channel is left untouched. Images with fewer than
/// 3 channels are assumed to already be grayscale: the call logs a warning
/// and leaves the image unchanged.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::color::grayscale_average;
///
/// let mut image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![10u8, 20, 40],
/// )
/// .unwrap();
///
/// grayscale_average(&mut image);
/// assert_eq!(image.as_slice(), &[23, 23, 23]);
/// ```
pub fn grayscale_average<const C: usize>(image: &mut Image<u8, C>) {
    if C < 3 {
        log::warn!("image has {C} channels, assumed to already be grayscale");
        return;
    }

    parallel::par_iter_pixels_mut(image, |px| {
        let gray = ((px[0] as u16 + px[1] as u16 + px[2] as u16) / 3) as u8;
        px[..3].fill(gray);
    });
}

/// Convert an image to grayscale in place using the BT.709 luminance.
///
/// Writes `0.2126 * r + 0.7152 * g + 0.0722 * b` (truncated to an integer)
/// to the three color channels of every pixel; an alpha channel is left
/// untouched. Images with fewer than 3 channels are assumed to already be
/// grayscale: the call logs a warning and leaves the image unchanged.
pub fn grayscale_luminance<const C: usize>(image: &mut Image<u8, C>) {
    if C < 3 {
        log::warn!("image has {C} channels, assumed to already be grayscale");
        return;
    }

    parallel::par_iter_pixels_mut(image, |px| {
        let gray = (RW * px[0] as f32 + GW * px[1] as f32 + BW * px[2] as f32) as u8;
        px[..3].fill(gray);
    });
}
