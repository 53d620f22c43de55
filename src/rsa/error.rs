// RSA Errors
// Every failure the RSA core can report to its caller

use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;

#[derive(Debug, Error)]
pub enum RsaError {
    /// Out-of-domain numeric input, e.g. a zero modulus or malformed hex
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Plaintext integer is not strictly below the modulus
    #[error(
        "message too large: {message_bits}-bit message does not fit under a {modulus_bits}-bit modulus \
         (use a shorter message or a larger key)"
    )]
    MessageTooLarge { message_bits: u64, modulus_bits: u64 },

    /// Recovered bytes are not valid UTF-8
    #[error("cannot decode recovered bytes {} as UTF-8", hex::encode(.bytes))]
    Decode {
        bytes: Vec<u8>,
        #[source]
        source: FromUtf8Error,
    },

    /// Prime generation gave up after the configured number of candidates
    #[error("no {bits}-bit prime found after {attempts} candidates")]
    GenerationTimeout { bits: u64, attempts: u64 },
}

impl RsaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RsaError::InvalidArgument(msg.into())
    }
}
