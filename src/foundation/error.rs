/// Convenience alias used across the crate.
pub type ImprintResult<T> = Result<T, ImprintError>;

/// Error type for the stamping pipeline.
///
/// Every failure aborts the run: the pipeline never writes a partial output
/// file. Variants map to where in the pipeline the failure occurred, so
/// callers can distinguish bad parameters from bad inputs from bad hosts.
#[derive(thiserror::Error, Debug)]
pub enum ImprintError {
    /// A parameter was rejected before any IO was attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// An input resource (image or text file) was missing, unreadable, or
    /// undecodable.
    #[error("resource error: {0}")]
    Resource(String),

    /// No usable font: the explicit source failed and the system fallback
    /// produced nothing.
    #[error("font error: {0}")]
    Font(String),

    /// The rasterizer or a pixel buffer was in a state it cannot handle.
    #[error("render error: {0}")]
    Render(String),

    /// The output could not be written or encoded.
    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImprintError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
