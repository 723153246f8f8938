use thiserror::Error;

/// Failures of a single client operation. The display text is what the
/// status line shows.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("{0}")]
    Backend(String),

    #[error("Backend error ({0})")]
    BackendStatus(u16),

    #[error("Backend did not return uploadUrl.")]
    MissingUploadUrl,

    #[error("S3 upload failed ({0}).")]
    StorageStatus(u16),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
