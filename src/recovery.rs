//! Recovery of the full state from two consecutive truncated outputs.
//!
//! A draw of width `bits` reveals the top `bits` bits of the state right after
//! it, so the state behind `output1` is `(output1 << missing) + k` for some
//! unknown `k < 2^missing`. The candidates are tried in ascending `k` and kept
//! when one more step of the recurrence reproduces `output2`.

use crate::error::{LcgError, LcgResult};
use crate::generator::Lcg48;
use crate::types::{Bits, State};

/// The first state consistent with `output1` followed by `output2`.
///
/// The returned state is the one right after the draw that produced
/// `output1`: installing it and drawing once yields `output2`. When several
/// states match, the lowest `k` wins. Costs up to `2^(48 - bits)` steps.
pub fn recover_state(output1: u64, output2: u64, bits: u32) -> LcgResult<State> {
    let mut candidates = Candidates::new(output1, output2, bits)?;
    tracing::debug!(
        output1,
        output2,
        bits,
        space = candidates.remaining(),
        "recovering lcg state"
    );

    match candidates.next() {
        Some(state) => {
            tracing::debug!(%state, tried = candidates.tried(), "lcg state recovered");
            Ok(state)
        }
        None => {
            tracing::debug!(tried = candidates.tried(), "no lcg state matches");
            Err(LcgError::NotFound {
                output1,
                output2,
                bits,
            })
        }
    }
}

/// A generator whose next draw of width `bits` is `output2`, continuing the
/// original stream from there.
pub fn recover_generator(output1: u64, output2: u64, bits: u32) -> LcgResult<Lcg48> {
    recover_state(output1, output2, bits).map(Lcg48::with_state)
}

/// Every state consistent with two consecutive outputs, in ascending `k`.
#[derive(Clone, Debug)]
pub struct Candidates {
    base: u64,
    output2: u64,
    bits: Bits,
    next_k: u64,
    end: u64,
}

impl Candidates {
    pub fn new(output1: u64, output2: u64, bits: u32) -> LcgResult<Self> {
        let bits = Bits::new(bits)?;
        let output1 = bits.check_output(output1)?;
        let output2 = bits.check_output(output2)?;
        let missing = bits.missing();
        Ok(Self {
            base: output1 << missing,
            output2,
            bits,
            next_k: 0,
            end: 1 << missing,
        })
    }

    /// Candidates not yet tested.
    pub fn remaining(&self) -> u64 {
        self.end - self.next_k
    }

    /// Candidates tested so far.
    pub fn tried(&self) -> u64 {
        self.next_k
    }
}

impl Iterator for Candidates {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        while self.next_k < self.end {
            // base < 2^48 with its low `missing` bits clear, so this stays in range.
            let candidate = State::masked(self.base | self.next_k);
            self.next_k += 1;
            if self.bits.truncate(candidate.successor()) == self.output2 {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining()).ok())
    }
}
