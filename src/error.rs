use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// Empty input, or hex that does not describe whole bytes.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Byte outside the expected alphabet, reported at its offset in the input.
    #[error("invalid digit 0x{byte:02x} at position {position}")]
    InvalidDigit { byte: u8, position: usize },

    #[error("could not allocate output buffer: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
