use rasterkit_image::Image;

/// Catmull-Rom basis weights for the four taps around a fractional offset.
fn cubic_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t3 + 2.0 * t2 - t),
        0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
        0.5 * (-3.0 * t3 + 4.0 * t2 + t),
        0.5 * (t3 - t2),
    ]
}

/// Kernel for bicubic sampling with the Catmull-Rom spline.
///
/// Weights the 4x4 neighborhood around `(u, v)`; taps that fall outside the
/// image reuse the nearest edge sample. The spline interpolates its inner
/// grid points exactly but can overshoot between them, so the result is
/// rounded and saturated to the byte range.
pub(crate) fn bicubic_sample<const C: usize>(image: &Image<u8, C>, u: f32, v: f32) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.floor();
    let iv = v.floor();
    let wu = cubic_weights(u - iu);
    let wv = cubic_weights(v - iv);

    let data = image.as_slice();
    let mut acc = [0.0f32; C];

    for (j, wy) in wv.iter().enumerate() {
        let tap_v = (iv as isize + j as isize - 1).clamp(0, rows as isize - 1) as usize;
        for (i, wx) in wu.iter().enumerate() {
            let tap_u = (iu as isize + i as isize - 1).clamp(0, cols as isize - 1) as usize;
            let base = (tap_v * cols + tap_u) * C;
            let weight = wx * wy;
            for k in 0..C {
                acc[k] += data[base + k] as f32 * weight;
            }
        }
    }

    let mut pixel = [0u8; C];
    for k in 0..C {
        pixel[k] = acc[k].round().clamp(0.0, 255.0) as u8;
    }

    pixel
}
