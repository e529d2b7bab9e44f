use rasterkit_image::ImageError;

/// Axis along which a one-dimensional kernel is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A `1 x size` kernel convolved along image rows.
    Horizontal,
    /// A `size x 1` kernel convolved along image columns.
    Vertical,
}

/// An immutable convolution kernel.
///
/// Holds odd `width x height` dimensions, the center tap aligned with the
/// output pixel, and row-major weights. Weights are normalized once at
/// construction; consumers apply them as-is without further scaling.
///
/// Fixed kernels (blur, sharpen, edge detection, emboss, Sobel) and
/// runtime-parameterized Gaussian kernels satisfy the same read contract, so
/// the convolution engine never needs to know which builder produced a mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    center_row: usize,
    center_col: usize,
    weights: Vec<f32>,
}

impl Mask {
    /// Create a mask from raw weights.
    ///
    /// The weights are taken as already normalized.
    ///
    /// # Errors
    ///
    /// Returns an error when a dimension is zero or even, the center tap lies
    /// outside the kernel, or the weights length does not match the
    /// dimensions.
    pub fn new(
        width: usize,
        height: usize,
        center_row: usize,
        center_col: usize,
        weights: Vec<f32>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(ImageError::InvalidMaskShape(width, height));
        }

        if center_row >= height || center_col >= width {
            return Err(ImageError::InvalidMaskShape(width, height));
        }

        if weights.len() != width * height {
            return Err(ImageError::InvalidKernelLength(
                weights.len(),
                width * height,
            ));
        }

        Ok(Self {
            width,
            height,
            center_row,
            center_col,
            weights,
        })
    }

    /// The width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The row of the center tap.
    pub fn center_row(&self) -> usize {
        self.center_row
    }

    /// The column of the center tap.
    pub fn center_col(&self) -> usize {
        self.center_col
    }

    /// Read-only access to the row-major weights (`row * width + col`).
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The weight at the given kernel coordinate.
    pub(crate) fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.width + col]
    }

    /// Build a square mask from a literal table, dividing every entry by the
    /// declared filter factor.
    fn from_table(side: usize, table: &[f32], filter_factor: f32) -> Self {
        Self {
            width: side,
            height: side,
            center_row: side / 2,
            center_col: side / 2,
            weights: table.iter().map(|w| w / filter_factor).collect(),
        }
    }

    /// 3x3 Gaussian blur kernel (filter factor 16).
    pub fn gaussian_blur3() -> Self {
        #[rustfmt::skip]
        let table = [
            1.0, 2.0, 1.0,
            2.0, 4.0, 2.0,
            1.0, 2.0, 1.0,
        ];
        Self::from_table(3, &table, 16.0)
    }

    /// 5x5 Gaussian blur kernel (filter factor 273).
    pub fn gaussian_blur5() -> Self {
        #[rustfmt::skip]
        let table = [
            1.0,  4.0,  7.0,  4.0, 1.0,
            4.0, 16.0, 26.0, 16.0, 4.0,
            7.0, 26.0, 41.0, 26.0, 7.0,
            4.0, 16.0, 26.0, 16.0, 4.0,
            1.0,  4.0,  7.0,  4.0, 1.0,
        ];
        Self::from_table(5, &table, 273.0)
    }

    /// 5x5 sharpen kernel (filter factor 8).
    pub fn sharpen5() -> Self {
        #[rustfmt::skip]
        let table = [
            -1.0, -1.0, -1.0, -1.0, -1.0,
            -1.0,  2.0,  2.0,  2.0, -1.0,
            -1.0,  2.0,  8.0,  2.0, -1.0,
            -1.0,  2.0,  2.0,  2.0, -1.0,
            -1.0, -1.0, -1.0, -1.0, -1.0,
        ];
        Self::from_table(5, &table, 8.0)
    }

    /// 5x5 vertical edge detection kernel.
    pub fn vertical_edge_detect5() -> Self {
        #[rustfmt::skip]
        let table = [
            0.0, 0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0, 0.0,
            0.0, 0.0,  4.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0, 0.0,
        ];
        Self::from_table(5, &table, 1.0)
    }

    /// 3x3 edge sharpening kernel.
    pub fn edge_sharpen3() -> Self {
        #[rustfmt::skip]
        let table = [
            1.0,  1.0, 1.0,
            1.0, -7.0, 1.0,
            1.0,  1.0, 1.0,
        ];
        Self::from_table(3, &table, 1.0)
    }

    /// 3x3 emboss kernel.
    pub fn emboss3() -> Self {
        #[rustfmt::skip]
        let table = [
            2.0,  0.0,  0.0,
            0.0, -1.0,  0.0,
            0.0,  0.0, -1.0,
        ];
        Self::from_table(3, &table, 1.0)
    }

    /// 3x3 Sobel kernel for the horizontal gradient.
    pub fn sobel_x3() -> Self {
        #[rustfmt::skip]
        let table = [
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ];
        Self::from_table(3, &table, 1.0)
    }

    /// 3x3 Sobel kernel for the vertical gradient.
    pub fn sobel_y3() -> Self {
        #[rustfmt::skip]
        let table = [
            -1.0, -2.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  2.0,  1.0,
        ];
        Self::from_table(3, &table, 1.0)
    }

    /// 3x3 box blur kernel (filter factor 9).
    pub fn box_blur3() -> Self {
        let table = [1.0; 9];
        Self::from_table(3, &table, 9.0)
    }

    /// Build a two-dimensional Gaussian kernel for the given sigma.
    ///
    /// The kernel radius is `ceil(sigma) * 3`, giving an odd size of
    /// `2 * radius + 1`. The weight at offset `(dx, dy)` from the center is
    /// `exp(-(dx^2 + dy^2) / (2 * sigma^2))`; the weights are then divided by
    /// their total sum so the kernel has unity gain and filtering neither
    /// brightens nor darkens the image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidSigma`] when `sigma` is not a strictly
    /// positive finite number.
    pub fn gaussian2d(sigma: f32) -> Result<Self, ImageError> {
        let radius = gaussian_radius(sigma)?;
        let size = 2 * radius + 1;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(size * size);
        for row in 0..size {
            let dy = row as f32 - radius as f32;
            for col in 0..size {
                let dx = col as f32 - radius as f32;
                weights.push((-(dx * dx + dy * dy) / two_sigma_sq).exp());
            }
        }

        let norm = weights.iter().sum::<f32>();
        weights.iter_mut().for_each(|w| *w /= norm);

        Mask::new(size, size, radius, radius, weights)
    }

    /// Build a one-dimensional Gaussian kernel for the given sigma.
    ///
    /// Same radius and normalization as [`Mask::gaussian2d`], restricted to a
    /// single axis. Applying the horizontal then the vertical kernel
    /// approximates the 2D kernel within one intensity level per sample.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidSigma`] when `sigma` is not a strictly
    /// positive finite number.
    pub fn gaussian1d(sigma: f32, axis: Axis) -> Result<Self, ImageError> {
        let radius = gaussian_radius(sigma)?;
        let size = 2 * radius + 1;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut weights = Vec::with_capacity(size);
        for i in 0..size {
            let d = i as f32 - radius as f32;
            weights.push((-(d * d) / two_sigma_sq).exp());
        }

        let norm = weights.iter().sum::<f32>();
        weights.iter_mut().for_each(|w| *w /= norm);

        match axis {
            Axis::Horizontal => Mask::new(size, 1, 0, radius, weights),
            Axis::Vertical => Mask::new(1, size, radius, 0, weights),
        }
    }
}

fn gaussian_radius(sigma: f32) -> Result<usize, ImageError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidSigma(sigma));
    }
    Ok(sigma.ceil() as usize * 3)
}
