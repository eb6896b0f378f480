use rand::{RngCore, SeedableRng};

use crate::error::LcgResult;
use crate::seed::SeedSource;
use crate::types::{Bits, State, DEFAULT_BITS};

/// 48-bit LCG, bit-exact with the platform `Random`.
///
/// State advances as `state = (state * 0x5DEECE66D + 0xB) mod 2^48` and each
/// draw exposes the top `bits` bits of the advanced state. The full state is
/// never observable through draws; capture it with [`Lcg48::state`] to rewind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg48 {
    state: State,
}

impl Lcg48 {
    pub fn new(seed: u64) -> Self {
        let state = State::scrambled(seed);
        tracing::trace!(seed, %state, "lcg seeded");
        Self { state }
    }

    /// Seeds from an injected collaborator, called exactly once.
    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.next_seed())
    }

    pub fn with_state(state: State) -> Self {
        tracing::trace!(%state, "lcg state installed");
        Self { state }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn set_state(&mut self, state: State) {
        tracing::trace!(%state, "lcg state installed");
        self.state = state;
    }

    /// Replaces the state with the one `seed` maps to. The previous state plays
    /// no part.
    pub fn reseed(&mut self, seed: u64) {
        self.state = State::scrambled(seed);
        tracing::trace!(seed, state = %self.state, "lcg reseeded");
    }

    /// Advances once and returns the top `bits` bits of the new state.
    ///
    /// An invalid width is rejected before the state is touched.
    pub fn next(&mut self, bits: u32) -> LcgResult<u64> {
        Ok(self.draw(Bits::new(bits)?))
    }

    /// The next `count` draws of width `bits`, in order.
    pub fn next_values(&mut self, count: usize, bits: u32) -> LcgResult<Vec<u64>> {
        Bits::new(bits)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.next(bits)?);
        }
        Ok(out)
    }

    /// Endless draws of width `bits`, pulled on demand.
    pub fn draws(&mut self, bits: u32) -> LcgResult<Draws<'_>> {
        let bits = Bits::new(bits)?;
        Ok(Draws { lcg: self, bits })
    }

    pub(crate) fn draw(&mut self, bits: Bits) -> u64 {
        self.state = self.state.successor();
        bits.truncate(self.state)
    }

    fn draw_i32(&mut self) -> i32 {
        self.draw(Bits::default()) as u32 as i32
    }
}

/// Iterator returned by [`Lcg48::draws`]. Never ends.
#[derive(Debug)]
pub struct Draws<'a> {
    lcg: &'a mut Lcg48,
    bits: Bits,
}

impl Iterator for Draws<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.lcg.draw(self.bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl RngCore for Lcg48 {
    fn next_u32(&mut self) -> u32 {
        self.draw(Bits::default()) as u32
    }

    /// Platform `nextLong`: the low half is added as a signed value.
    fn next_u64(&mut self) -> u64 {
        let hi = i64::from(self.draw_i32());
        let lo = i64::from(self.draw_i32());
        (hi << DEFAULT_BITS).wrapping_add(lo) as u64
    }

    /// Platform `nextBytes`: each 32-bit draw is spent least significant byte
    /// first, and the unused tail of the last draw is dropped.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg48 {
    type Seed = [u8; 8];

    fn from_seed(seed: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}
