use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The oracle was unreachable, rejected the request or reported its own error.
    #[error("oracle transport error: {0}")]
    Transport(String),

    /// Empty text, invalid JSON, or JSON that cannot be coerced to the expected shape.
    #[error("malformed oracle response: {0}")]
    MalformedResponse(String),

    /// A normalized result that breaks the invariant of its call mode.
    #[error("analysis contract violated: {0}")]
    AnalysisContract(String),

    #[error("no pending image for this request")]
    MissingInput,

    #[error("unsupported image format, expected PNG or JPEG")]
    UnsupportedImage,

    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}
