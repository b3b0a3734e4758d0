//! History-biased piece dealing.
//!
//! A candidate kind is drawn uniformly; if it appears in the recent
//! history (window of 4) it is redrawn, up to a fixed number of
//! attempts, after which the last candidate is accepted unconditionally
//! so a deal always terminates. The very first deal of a session
//! additionally avoids S, Z, and O so games never open with an overhang
//! piece.
//!
//! Randomness comes from a small seedable LCG rather than an OS source,
//! keeping games and tests reproducible.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

const HISTORY_LEN: usize = 4;
const DEAL_ATTEMPTS: usize = 6;
const FIRST_DEAL_EXCLUDED: [PieceKind; 3] = [PieceKind::S, PieceKind::Z, PieceKind::O];

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would stick near zero for the first draws.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Use the high bits; the low bits of an LCG cycle quickly.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: SimpleRng,
    history: ArrayVec<PieceKind, HISTORY_LEN>,
    dealt_any: bool,
}

impl Randomizer {
    pub fn new(seed: u32) -> Self {
        // Pre-seeded history biases the opening away from S/Z runs.
        let mut history = ArrayVec::new();
        history.push(PieceKind::Z);
        history.push(PieceKind::Z);
        history.push(PieceKind::S);
        history.push(PieceKind::S);

        Self {
            rng: SimpleRng::new(seed),
            history,
            dealt_any: false,
        }
    }

    fn random_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(7) as usize]
    }

    fn rejects(&self, candidate: PieceKind) -> bool {
        self.history.contains(&candidate)
            || (!self.dealt_any && FIRST_DEAL_EXCLUDED.contains(&candidate))
    }

    /// Deal the next piece kind. Bounded retries, never blocks.
    pub fn deal(&mut self) -> PieceKind {
        let mut candidate = self.random_kind();
        for _ in 1..DEAL_ATTEMPTS {
            if !self.rejects(candidate) {
                break;
            }
            candidate = self.random_kind();
        }

        self.dealt_any = true;
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(candidate);
        candidate
    }

    #[cfg(test)]
    pub(crate) fn history(&self) -> &[PieceKind] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic_for_a_seed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn deal_pushes_history_and_evicts_oldest() {
        let mut randomizer = Randomizer::new(1);
        let dealt = randomizer.deal();
        assert_eq!(randomizer.history().len(), HISTORY_LEN);
        assert_eq!(*randomizer.history().last().unwrap(), dealt);
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let mut a = Randomizer::new(9000);
        let mut b = Randomizer::new(9000);
        for _ in 0..50 {
            assert_eq!(a.deal(), b.deal());
        }
    }
}
