use thiserror::Error;

use crate::i18n::Label;

/// Errors that can occur while saving or loading the canvas
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// The decoded file has no pixels
    #[error("Image has no pixels")]
    EmptyImage,
}

impl PaintError {
    /// User-facing description; the English `Display` text is for logs
    pub fn label(&self) -> Label {
        match self {
            PaintError::Io(_) => Label::ErrorIo,
            PaintError::Image(_) => Label::ErrorCodec,
            PaintError::EmptyImage => Label::ErrorEmpty,
        }
    }
}

/// Result type for canvas and file operations
pub type PaintResult<T> = Result<T, PaintError>;
