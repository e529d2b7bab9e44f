/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must share a shape do not.
    #[error("Image shapes do not match: expected {0}x{1}, got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for an image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for an image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a mask has invalid dimensions.
    #[error("Mask dimensions must be odd and non-zero, got {0}x{1}")]
    InvalidMaskShape(usize, usize),

    /// Error when the mask weights length does not match its dimensions.
    #[error("Mask weights length ({0}) does not match its dimensions ({1})")]
    InvalidKernelLength(usize, usize),

    /// Error when a gaussian sigma is not strictly positive.
    #[error("Gaussian sigma must be > 0, got {0}")]
    InvalidSigma(f32),

    /// Error when a resize target dimension is too small.
    #[error("Resize target must be at least 2x2, got {0}x{1}")]
    InvalidTargetSize(usize, usize),

    /// Error when an operation does not support the image channel count.
    #[error("Operation does not support images with {0} channels")]
    UnsupportedChannelCount(usize),

    /// Error when a numeric cast between sample types fails.
    #[error("Failed to cast the pixel data")]
    CastError,
}
