#![forbid(unsafe_code)]

//! `lcg48`
//!
//! Bit-exact reproduction of the 48-bit linear congruential generator behind
//! the platform `Random`, and recovery of its hidden state from two
//! consecutive truncated outputs.
//!
//! ## Example
//!
//! ```rust
//! use lcg48::{recover_generator, Lcg48};
//!
//! let mut victim = Lcg48::new(5);
//! let first = victim.next(32)?;
//! let second = victim.next(32)?;
//!
//! let mut clone = recover_generator(first, second, 32)?;
//! assert_eq!(clone.next(32)?, second);
//! assert_eq!(clone.next_values(4, 32)?, victim.next_values(4, 32)?);
//! # Ok::<(), lcg48::LcgError>(())
//! ```

mod error;
mod generator;
mod recovery;
mod seed;
mod types;

pub use error::{LcgError, LcgResult};
pub use generator::{Draws, Lcg48};
pub use recovery::{recover_generator, recover_state, Candidates};
pub use seed::{FixedSeed, SeedSource, SystemClock};
pub use types::{
    Bits, State, DEFAULT_BITS, INCREMENT, MASK, MULTIPLIER, SCRAMBLE, STATE_BITS,
};
