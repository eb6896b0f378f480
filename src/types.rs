use std::fmt;

use crate::error::{LcgError, LcgResult};

pub const MULTIPLIER: u64 = 0x5DEE_CE66D;
pub const INCREMENT: u64 = 0xB;
pub const STATE_BITS: u32 = 48;
pub const MASK: u64 = (1 << STATE_BITS) - 1;
/// XOR applied once to a raw seed.
pub const SCRAMBLE: u64 = 0x5DEE_CE66D;
/// Width of a platform `nextInt()` draw.
pub const DEFAULT_BITS: u32 = 32;

const STATE_BYTES: usize = 6;

/// Validated output width, `1..=48`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bits(u32);

impl Bits {
    pub fn new(bits: u32) -> LcgResult<Self> {
        if (1..=STATE_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(LcgError::InvalidBits { bits })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// State bits hidden by one output of this width.
    pub fn missing(self) -> u32 {
        STATE_BITS - self.0
    }

    /// Checks that `output` is a value this width can produce.
    pub fn check_output(self, output: u64) -> LcgResult<u64> {
        if output >> self.0 == 0 {
            Ok(output)
        } else {
            Err(LcgError::OutputOutOfRange {
                output,
                bits: self.0,
            })
        }
    }

    /// Top `self` bits of a state.
    pub(crate) fn truncate(self, state: State) -> u64 {
        state.0 >> self.missing()
    }
}

impl Default for Bits {
    fn default() -> Self {
        Self(DEFAULT_BITS)
    }
}

impl TryFrom<u32> for Bits {
    type Error = LcgError;

    fn try_from(bits: u32) -> LcgResult<Self> {
        Self::new(bits)
    }
}

/// Full 48-bit generator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(u64);

impl State {
    pub fn new(state: u64) -> LcgResult<Self> {
        if state & !MASK == 0 {
            Ok(Self(state))
        } else {
            Err(LcgError::StateOutOfRange { state })
        }
    }

    pub(crate) fn masked(value: u64) -> Self {
        Self(value & MASK)
    }

    /// Initial state for a raw seed.
    pub fn scrambled(seed: u64) -> Self {
        Self((seed ^ SCRAMBLE) & MASK)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// One step of the recurrence. The product wraps at 64 bits, which is
    /// harmless since only the low 48 bits are kept.
    pub fn successor(self) -> Self {
        Self(
            self.0
                .wrapping_mul(MULTIPLIER)
                .wrapping_add(INCREMENT)
                & MASK,
        )
    }

    /// 12 lowercase hex digits, big-endian.
    pub fn to_hex(self) -> String {
        hex::encode(&self.0.to_be_bytes()[8 - STATE_BYTES..])
    }

    pub fn from_hex(s: &str) -> LcgResult<Self> {
        let bytes = hex::decode(s.trim())?;
        if bytes.len() != STATE_BYTES {
            return Err(LcgError::InvalidStateLength { len: bytes.len() });
        }
        let mut buf = [0u8; 8];
        buf[8 - STATE_BYTES..].copy_from_slice(&bytes);
        Ok(Self(u64::from_be_bytes(buf)))
    }
}

impl From<State> for u64 {
    fn from(state: State) -> u64 {
        state.0
    }
}

impl TryFrom<u64> for State {
    type Error = LcgError;

    fn try_from(state: u64) -> LcgResult<Self> {
        Self::new(state)
    }
}

impl fmt::LowerHex for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#014x}", self.0)
    }
}
