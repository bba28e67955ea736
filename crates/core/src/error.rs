#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input was well-formed but failed a presence or shape check.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input could not be decoded at all.
    #[error("Malformed input: {0}")]
    Malformed(String),
}
