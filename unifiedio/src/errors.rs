use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnifiedIoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "tls")]
    #[error("tls error: {0}")]
    Tls(#[from] native_tls::Error),
}

pub type UnifiedIoResult<T> = Result<T, UnifiedIoError>;
