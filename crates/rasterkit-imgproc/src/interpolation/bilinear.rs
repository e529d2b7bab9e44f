use rasterkit_image::Image;

/// Kernel for bilinear sampling.
///
/// Blends the 2x2 neighborhood around `(u, v)` with the fractional parts as
/// weights and truncates the result to a byte. Neighbors past the right or
/// bottom edge reuse the edge sample.
pub(crate) fn bilinear_sample<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu0 = (u.trunc() as usize).min(cols - 1);
    let iv0 = (v.trunc() as usize).min(rows - 1);
    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let frac_u = u.fract();
    let frac_v = v.fract();

    let w00 = (1.0 - frac_u) * (1.0 - frac_v);
    let w01 = frac_u * (1.0 - frac_v);
    let w10 = (1.0 - frac_u) * frac_v;
    let w11 = frac_u * frac_v;

    let data = image.as_slice();
    let p00 = &data[(iv0 * cols + iu0) * C..][..C];
    let p01 = &data[(iv0 * cols + iu1) * C..][..C];
    let p10 = &data[(iv1 * cols + iu0) * C..][..C];
    let p11 = &data[(iv1 * cols + iu1) * C..][..C];

    let mut pixel = [0u8; C];
    for k in 0..C {
        let value = p00[k] as f32 * w00
            + p01[k] as f32 * w01
            + p10[k] as f32 * w10
            + p11[k] as f32 * w11;
        pixel[k] = value as u8;
    }

    pixel
}
