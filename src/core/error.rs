/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, PayTrError>;

/// Main client error type
///
/// Gateway-reported failures (declined payments, rejected refunds and so on)
/// are not errors: they are modelled as result variants on the operation's
/// response type, because callers branch on them as part of normal control
/// flow. `PayTrError` covers faults on the way to and from the gateway.
#[derive(thiserror::Error, Debug)]
pub enum PayTrError {
    /// Caller-supplied parameters failed shape or range checks; raised
    /// before anything is signed or sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed merchant configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network failure or non-2xx HTTP status from the gateway
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body is neither recognizable HTML nor valid JSON; the raw
    /// body is kept for diagnostics
    #[error("Invalid gateway response: {message}")]
    ResponseParse { message: String, raw: String },
}

// Helper constructors for common error scenarios
impl PayTrError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PayTrError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        PayTrError::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        PayTrError::Transport(msg.into())
    }

    pub fn parse(msg: impl Into<String>, raw: impl Into<String>) -> Self {
        PayTrError::ResponseParse {
            message: msg.into(),
            raw: raw.into(),
        }
    }
}
