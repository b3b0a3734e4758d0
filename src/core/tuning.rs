//! Timing and speed configuration injected into the game at
//! construction. Immutable data, not process-wide globals, so tests can
//! pin a speed level or slow the throttle without touching constants.

/// Gravity periods (frames between automatic descents) indexed by speed
/// level, paired with the cumulative-lines milestone that unlocks the
/// next level.
pub const SPEEDS: [u32; 9] = [48, 42, 36, 30, 24, 18, 12, 9, 6];
pub const MILESTONES: [u32; 8] = [5, 20, 40, 60, 80, 100, 120, 140];

/// Held-key repeat throttle: frames of hold before the first repeat,
/// and frames between subsequent repeats.
pub const THROTTLE_FIRST: i32 = 9;
pub const THROTTLE_REPEAT: i32 = 3;

/// Base of the lock-delay grace window; the current speed index is
/// added so faster levels get a slightly longer reprieve relative to
/// their shorter gravity period.
pub const LOCK_GRACE: u32 = 9;

#[derive(Debug, Clone)]
pub struct Tuning {
    pub speeds: &'static [u32],
    pub milestones: &'static [u32],
    pub start_speed: usize,
    pub throttle_first: i32,
    pub throttle_repeat: i32,
    pub lock_grace: u32,
}

impl Tuning {
    /// Shortest gravity period in the table; speed stops advancing here.
    pub fn min_frames_per_move(&self) -> u32 {
        *self.speeds.last().unwrap_or(&1)
    }

    /// Highest reachable speed index (the "MAX" sentinel level).
    pub fn max_speed(&self) -> usize {
        self.speeds.len().saturating_sub(1)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speeds: &SPEEDS,
            milestones: &MILESTONES,
            start_speed: 1,
            throttle_first: THROTTLE_FIRST,
            throttle_repeat: THROTTLE_REPEAT,
            lock_grace: LOCK_GRACE,
        }
    }
}
