//! Kernel model and the spatial convolution engine.

mod convolution;
mod mask;
mod ops;

pub use convolution::{
    convolve, convolve_channel, convolve_channel_with_strategy, convolve_with_strategy, Border,
};
pub use mask::{Axis, Mask};
pub use ops::{box_blur, emboss, gaussian_blur, sharpen, sobel};
