/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode or encode the image data.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error to create the image container.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] rasterkit_image::ImageError),

    /// Error when the channel count has no encodable color type.
    #[error("No supported color type for {0} channels")]
    UnsupportedChannelCount(usize),
}
