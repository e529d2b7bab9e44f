//! Pixel interpolation kernels used by the resampler.
//!
//! Each kernel maps a fractional source coordinate `(u, v)` to a pixel value.
//! Coordinates outside the image are clamped to the nearest valid sample, so
//! the kernels are total over finite inputs.

mod bicubic;
mod bilinear;
mod nearest;

pub(crate) use bicubic::bicubic_sample;
pub(crate) use bilinear::bilinear_sample;
pub(crate) use nearest::nearest_sample;

/// Interpolation kernel selection for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Copies the nearest source pixel. Fast, blocky under magnification.
    Nearest,
    /// Linear blend of the 2x2 neighborhood.
    Bilinear,
    /// Catmull-Rom cubic over the 4x4 neighborhood. Sharper than bilinear,
    /// may overshoot near strong edges.
    Bicubic,
}
