use rand::Rng;

use rasterkit_image::{Image, ImageError, ImageSize};
use rasterkit_imgproc::diff::{diffmap, diffmap_scale};
use rasterkit_imgproc::filter::{convolve, gaussian_blur, Border, Mask};
use rasterkit_imgproc::flip::{horizontal_flip, vertical_flip};
use rasterkit_imgproc::interpolation::InterpolationMode;
use rasterkit_imgproc::parallel::ExecutionStrategy;
use rasterkit_imgproc::resize::resize_native;

/// Image large enough to take the parallel path in every operation.
const SIDE: usize = 384;

fn random_image<const C: usize>() -> Result<Image<u8, C>, ImageError> {
    let mut rng = rand::rng();
    let size = ImageSize {
        width: SIDE,
        height: SIDE,
    };
    let data = (0..SIDE * SIDE * C)
        .map(|_| rng.random_range(0..100))
        .collect();
    Image::new(size, data)
}

/// Straightforward quadruple loop over pixels, taps and channels. Accumulates
/// in the same order as the production path so results match bit for bit.
fn reference_convolve<const C: usize>(
    src: &Image<u8, C>,
    mask: &Mask,
    border: Border,
) -> Image<u8, C> {
    let (rows, cols) = (src.rows(), src.cols());
    let mut out = vec![0u8; rows * cols * C];
    let data = src.as_slice();

    for r in 0..rows {
        for c in 0..cols {
            for ch in 0..C {
                let mut acc = 0.0f32;
                for ki in 0..mask.height() {
                    for kj in 0..mask.width() {
                        let tap_r = r as isize - (ki as isize - mask.center_row() as isize);
                        let tap_c = c as isize - (kj as isize - mask.center_col() as isize);
                        let sample = match border.resolve(tap_r, tap_c, rows, cols) {
                            Some((sr, sc)) => data[(sr * cols + sc) * C + ch] as f32,
                            None => 0.0,
                        };
                        acc += sample * mask.weights()[ki * mask.width() + kj];
                    }
                }
                out[(r * cols + c) * C + ch] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Image::new(src.size(), out).expect("shape is preserved")
}

#[test]
fn convolve_matches_reference() -> Result<(), ImageError> {
    let src = random_image::<3>()?;
    let mask = Mask::gaussian2d(1.0)?;
    assert_eq!(mask.width(), 7);

    for border in [Border::Zero, Border::Clamp, Border::Wrap] {
        let mut dst = Image::from_size_val(src.size(), 0u8)?;
        convolve(&src, &mut dst, &mask, border)?;

        let expected = reference_convolve(&src, &mask, border);
        assert_eq!(dst.as_slice(), expected.as_slice());
    }
    Ok(())
}

#[test]
fn convolve_large_zero_border_oracle() -> Result<(), ImageError> {
    let mut rng = rand::rng();
    let size = ImageSize {
        width: 1024,
        height: 1024,
    };
    let data = (0..size.width * size.height)
        .map(|_| rng.random_range(0..100))
        .collect();
    let src = Image::<u8, 1>::new(size, data)?;

    let mask = Mask::gaussian2d(1.0)?;
    assert_eq!(mask.width(), 7);
    assert_eq!(mask.height(), 7);

    let mut dst = Image::from_size_val(size, 0u8)?;
    convolve(&src, &mut dst, &mask, Border::Zero)?;

    let expected = reference_convolve(&src, &mask, Border::Zero);
    assert_eq!(dst.as_slice(), expected.as_slice());
    Ok(())
}

#[test]
fn convolve_strategy_independent() -> Result<(), ImageError> {
    let src = random_image::<3>()?;
    let mask = Mask::gaussian2d(0.8)?;

    let mut serial = Image::from_size_val(src.size(), 0u8)?;
    let mut parallel = Image::from_size_val(src.size(), 0u8)?;

    for border in [Border::Zero, Border::Clamp, Border::Wrap] {
        rasterkit_imgproc::filter::convolve_with_strategy(
            &src,
            &mut serial,
            &mask,
            border,
            ExecutionStrategy::Serial,
        )?;
        rasterkit_imgproc::filter::convolve_with_strategy(
            &src,
            &mut parallel,
            &mask,
            border,
            ExecutionStrategy::Parallel,
        )?;
        assert_eq!(serial.as_slice(), parallel.as_slice());
    }
    Ok(())
}

#[test]
fn separable_blur_tracks_2d_blur() -> Result<(), ImageError> {
    let src = random_image::<1>()?;
    let sigma = 1.0;

    let mut separable = Image::from_size_val(src.size(), 0u8)?;
    gaussian_blur(&src, &mut separable, sigma, Border::Clamp)?;

    let mut full = Image::from_size_val(src.size(), 0u8)?;
    convolve(&src, &mut full, &Mask::gaussian2d(sigma)?, Border::Clamp)?;

    // the two factorizations may disagree by one intensity level per sample
    for (a, b) in separable.as_slice().iter().zip(full.as_slice()) {
        assert!(a.abs_diff(*b) <= 1, "separable {a} vs full {b}");
    }
    Ok(())
}

#[test]
fn diffmap_of_equal_results_is_zero() -> Result<(), ImageError> {
    let src = random_image::<3>()?;
    let mask = Mask::box_blur3();

    let mut a = Image::from_size_val(src.size(), 0u8)?;
    let mut b = Image::from_size_val(src.size(), 0u8)?;
    convolve(&src, &mut a, &mask, Border::Zero)?;
    convolve(&src, &mut b, &mask, Border::Zero)?;

    diffmap(&mut a, &b);
    assert!(a.as_slice().iter().all(|&v| v == 0));
    Ok(())
}

#[test]
fn diffmap_scale_of_identical_images_is_zero() -> Result<(), ImageError> {
    let src = random_image::<3>()?;
    for hint in [0u8, 1, 77, 255] {
        let mut a = src.clone();
        diffmap_scale(&mut a, &src, hint);
        assert!(a.as_slice().iter().all(|&v| v == 0), "hint {hint}");
    }
    Ok(())
}

#[test]
fn flips_round_trip() -> Result<(), ImageError> {
    let src = random_image::<4>()?;

    let mut image = src.clone();
    horizontal_flip(&mut image);
    assert_ne!(image.as_slice(), src.as_slice());
    horizontal_flip(&mut image);
    assert_eq!(image.as_slice(), src.as_slice());

    vertical_flip(&mut image);
    assert_ne!(image.as_slice(), src.as_slice());
    vertical_flip(&mut image);
    assert_eq!(image.as_slice(), src.as_slice());
    Ok(())
}

#[test]
fn identity_resize_round_trips() -> Result<(), ImageError> {
    let src = random_image::<3>()?;

    for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
        let mut dst = Image::from_size_val(src.size(), 0u8)?;
        resize_native(&src, &mut dst, mode)?;
        assert_eq!(dst.as_slice(), src.as_slice(), "{mode:?}");
    }
    Ok(())
}
