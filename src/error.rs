use thiserror::Error;

/// Result type used by `lcg48`.
pub type LcgResult<T> = Result<T, LcgError>;

/// Errors produced by the generator and the state search.
///
/// Everything except [`LcgError::NotFound`] is a rejected argument; see
/// [`LcgError::is_invalid_argument`].
#[derive(Debug, Error)]
pub enum LcgError {
    #[error("invalid output width: {bits} (expected 1..=48)")]
    InvalidBits { bits: u32 },

    #[error("output {output:#x} does not fit in {bits} bits")]
    OutputOutOfRange { output: u64, bits: u32 },

    #[error("state {state:#x} does not fit in 48 bits")]
    StateOutOfRange { state: u64 },

    #[error("invalid hex state: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid state length: {len} bytes (expected 6)")]
    InvalidStateLength { len: usize },

    #[error("no state produces {output1:#x} then {output2:#x} at {bits} bits")]
    NotFound { output1: u64, output2: u64, bits: u32 },
}

impl LcgError {
    pub fn is_invalid_argument(&self) -> bool {
        !self.is_not_found()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
