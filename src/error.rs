use std::path::PathBuf;

pub type GifsheetResult<T> = Result<T, GifsheetError>;

#[derive(thiserror::Error, Debug)]
pub enum GifsheetError {
    #[error("input directory not found: '{0}'")]
    InputNotFound(PathBuf),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("no frames in '{0}'")]
    NoFrames(PathBuf),

    #[error("frame size mismatch: {0}")]
    FrameSizeMismatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GifsheetError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn frame_size_mismatch(msg: impl Into<String>) -> Self {
        Self::FrameSizeMismatch(msg.into())
    }
}
