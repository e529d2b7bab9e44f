use rasterkit_image::Image;

/// Kernel for nearest neighbor sampling.
///
/// Truncates the coordinate to the containing source pixel and clamps it to
/// the image bounds.
pub(crate) fn nearest_sample<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.trunc() as usize).min(cols - 1);
    let iv = (v.trunc() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;

    let mut pixel = [0u8; C];
    pixel.copy_from_slice(&image.as_slice()[base..base + C]);
    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_image::ImageSize;

    #[test]
    fn picks_containing_pixel() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10u8, 20, 30, 40],
        )
        .unwrap();

        assert_eq!(nearest_sample(&image, 0.0, 0.0), [10]);
        assert_eq!(nearest_sample(&image, 0.9, 0.0), [10]);
        assert_eq!(nearest_sample(&image, 1.0, 0.9), [20]);
        assert_eq!(nearest_sample(&image, 1.5, 1.5), [40]);
    }

    #[test]
    fn clamps_out_of_range() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![5u8, 6],
        )
        .unwrap();

        assert_eq!(nearest_sample(&image, 9.0, 9.0), [6]);
    }
}
