//! The frame-stepped game state machine.
//!
//! One `tick` call advances exactly one simulated frame: interpret the
//! frame's input signals, then advance the gravity/lock-delay counter,
//! which may descend the active shape, lock it into the grid, clear
//! rows, score, spawn the next piece, and advance the speed level.
//!
//! The machine never recreates itself. When the player asks for a
//! restart after game over it raises `should_reset`; the owning driver
//! discards this instance and builds a new one.

use crate::core::grid::Grid;
use crate::core::randomizer::Randomizer;
use crate::core::shape::Shape;
use crate::core::tuning::Tuning;
use crate::types::InputFrame;

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current: Shape,
    next: Shape,
    randomizer: Randomizer,
    tuning: Tuning,

    speed: usize,
    frames_per_move: u32,
    /// Counts up each frame; a gravity step fires when it reaches
    /// `frames_per_move`. Lock delay and hard drop manipulate it
    /// directly to stretch or collapse the wait.
    current_frame: u32,
    /// Armed when the shape can no longer descend; the next gravity
    /// step while armed resolves the lock.
    should_plant: bool,
    /// Shared repeat throttle for held left/right/down.
    held_key_throttle: i32,

    lines: u32,
    score: u32,

    paused: bool,
    over: bool,
    reset_requested: bool,
    planted_just_now: bool,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u32) -> Self {
        let mut randomizer = Randomizer::new(seed);
        let current = Shape::new(randomizer.deal());
        let next = Shape::new(randomizer.deal());

        let speed = tuning.start_speed.min(tuning.max_speed());
        let frames_per_move = tuning.speeds[speed];

        Self {
            grid: Grid::new(),
            current,
            next,
            randomizer,
            tuning,
            speed,
            frames_per_move,
            current_frame: 0,
            should_plant: false,
            held_key_throttle: 0,
            lines: 0,
            score: 0,
            paused: false,
            over: false,
            reset_requested: false,
            planted_just_now: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_shape(&self) -> &Shape {
        &self.current
    }

    pub fn next_shape(&self) -> &Shape {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn speed(&self) -> usize {
        self.speed
    }

    /// True once the speed curve has reached its shortest period; the
    /// renderer shows "MAX" instead of a number.
    pub fn at_max_speed(&self) -> bool {
        self.speed >= self.tuning.max_speed()
    }

    pub fn frames_per_move(&self) -> u32 {
        self.frames_per_move
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    /// Observed by the driver, which responds by discarding this
    /// instance and constructing a fresh game.
    pub fn should_reset(&self) -> bool {
        self.reset_requested
    }

    /// True only for the frame in which a shape locked; lets a cached
    /// renderer invalidate its settled-grid and preview layers.
    pub fn planted_shape_just_now(&self) -> bool {
        self.planted_just_now
    }

    /// Advance exactly one simulated frame.
    pub fn tick(&mut self, inputs: &InputFrame) {
        self.planted_just_now = false;
        self.handle_input(inputs);
        if self.paused || self.over {
            return;
        }
        self.game_move();
    }

    /// At most one shape action fires per frame, picked by priority:
    /// rotate, left, right, down, hard drop. Left/right/down fire on
    /// their down-edge or on a held level that passed the shared
    /// repeat throttle.
    fn handle_input(&mut self, inputs: &InputFrame) {
        if self.over {
            if inputs.enter {
                self.reset_requested = true;
            }
            return;
        }

        if inputs.escape {
            self.paused = !self.paused;
        }
        if self.paused {
            return;
        }

        if inputs.up {
            if self.current.rotate(&self.grid) {
                self.postpone_and_prevent_planting();
            }
        } else if inputs.left.pressed || (inputs.left.held && self.held_key_expired()) {
            if self.current.move_left(&self.grid) {
                self.postpone_and_prevent_planting();
            }
            self.throttle_held_key(inputs.left.pressed);
        } else if inputs.right.pressed || (inputs.right.held && self.held_key_expired()) {
            if self.current.move_right(&self.grid) {
                self.postpone_and_prevent_planting();
            }
            self.throttle_held_key(inputs.right.pressed);
        } else if inputs.down.pressed || (inputs.down.held && self.held_key_expired()) {
            if self.current.move_down(&self.grid) {
                self.postpone_and_prevent_planting();
            }
            // Soft drop always repeats at the fast cadence.
            self.throttle_held_key(false);
        } else if inputs.space && self.current.drop(&self.grid) {
            self.hasten_planting();
        }
    }

    fn held_key_expired(&mut self) -> bool {
        self.held_key_throttle -= 1;
        self.held_key_throttle <= 0
    }

    fn throttle_held_key(&mut self, down_edge: bool) {
        self.held_key_throttle = if down_edge {
            self.tuning.throttle_first
        } else {
            self.tuning.throttle_repeat
        };
    }

    /// Hard drop: arm the lock and collapse the wait so the next
    /// gravity step resolves it.
    fn hasten_planting(&mut self) {
        self.should_plant = true;
        self.current_frame = self.frames_per_move;
    }

    /// While a lock is pending, pull the frame counter down to leave
    /// `lock_grace + speed` frames before the lock resolves. Only ever
    /// shortens the wait; a counter already below the target is left
    /// alone.
    fn postpone_planting(&mut self) {
        if !self.should_plant {
            return;
        }
        let grace = self.tuning.lock_grace + self.speed as u32;
        let target = self.frames_per_move.saturating_sub(grace);
        if self.current_frame > target {
            self.current_frame = target;
        }
    }

    fn postpone_and_prevent_planting(&mut self) {
        self.postpone_planting();
        self.should_plant = false;
    }

    /// Arm the lock with its full grace window.
    fn force_postpone_planting(&mut self) {
        self.current_frame = self.frames_per_move;
        self.postpone_planting();
    }

    /// One gravity-counter step; fires a descent, arms the lock, or
    /// resolves it.
    fn game_move(&mut self) {
        self.current_frame += 1;
        if self.current_frame < self.frames_per_move {
            return;
        }
        self.current_frame = 0;

        if self.current.can_descend(&self.grid) {
            self.current.descend();
            return;
        }

        if !self.should_plant {
            self.should_plant = true;
            self.force_postpone_planting();
            return;
        }

        if self.grid.cannot_plant(&self.current) {
            self.over = true;
            return;
        }

        self.plant_shape();
    }

    fn plant_shape(&mut self) {
        self.grid.plant(&self.current);

        let rows = self.grid.rows_to_clear(&self.current);
        self.grid.clear_rows(&rows);
        let cleared = rows.len() as u32;
        self.lines += cleared;
        self.score += cleared * cleared;

        self.should_plant = false;
        self.planted_just_now = true;

        self.spawn_shape();
        self.speed_up();
    }

    fn spawn_shape(&mut self) {
        self.current = std::mem::replace(&mut self.next, Shape::new(self.randomizer.deal()));

        // A spawn into settled cells ends the game outright rather
        // than leaving an overlapping shape in play.
        if self.grid.cannot_plant(&self.current) {
            self.over = true;
        }
    }

    fn speed_up(&mut self) {
        if self.frames_per_move <= self.tuning.min_frames_per_move() {
            return;
        }
        if self.lines < self.tuning.milestones[self.speed] {
            return;
        }
        self.speed += 1;
        self.frames_per_move = self.tuning.speeds[self.speed];
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, shape: Shape) {
        self.current = shape;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Tuning::default(), 1)
    }
}
