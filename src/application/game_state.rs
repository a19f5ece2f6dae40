use crate::domain::{Board, BoardError, DEFAULT_DENSITY, demo_seed};

/// Default delay between generations, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 1000;
/// Fastest allowed update interval.
pub const MIN_INTERVAL_MS: u32 = 50;
/// Slowest allowed update interval.
pub const MAX_INTERVAL_MS: u32 = 2000;
/// Step applied by the Faster/Slower controls.
pub const INTERVAL_STEP_MS: u32 = 100;

/// GameState orchestrates the simulation.
/// Owns the board plus the scalar state the board deliberately does not:
/// run flag, generation counter, and the update schedule.
pub struct GameState {
    pub board: Board,
    pub is_running: bool,
    pub generation: u64,
    pub interval_ms: u32,
    update_timer: f32,
}

impl GameState {
    /// Create a paused game with the demonstration seed placed on a
    /// fresh board of the given dimensions.
    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        let mut board = Board::new(cols, rows)?;
        demo_seed().place_on(&mut board, 0, 0);

        Ok(Self {
            board,
            is_running: false,
            generation: 0,
            interval_ms: DEFAULT_INTERVAL_MS,
            update_timer: 0.0,
        })
    }

    /// Start (or restart) the simulation with a full interval ahead
    pub fn resume(mut self) -> Self {
        self.is_running = true;
        self.update_timer = 0.0;
        self
    }

    /// Pause the simulation; the board stays untouched until resumed
    pub fn pause(mut self) -> Self {
        self.is_running = false;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running {
            self.pause()
        } else {
            self.resume()
        }
    }

    /// Clear the board, reset the generation counter, and stop
    pub fn clear(mut self) -> Self {
        self.board.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize the board, reset the generation counter, and stop
    pub fn randomize(mut self) -> Self {
        self.board.randomize(DEFAULT_DENSITY);
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Shorten the update interval by one step, down to the floor
    pub fn speed_up(self) -> Self {
        let interval = self.interval_ms.saturating_sub(INTERVAL_STEP_MS);
        self.set_interval(interval)
    }

    /// Lengthen the update interval by one step, up to the ceiling
    pub fn slow_down(self) -> Self {
        let interval = self.interval_ms + INTERVAL_STEP_MS;
        self.set_interval(interval)
    }

    /// Install a new interval and discard any accumulated delay, so the
    /// next generation is scheduled a full interval from now.
    fn set_interval(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.update_timer = 0.0;
        self
    }

    /// Flip one cell (click-to-toggle editing)
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.board.toggle(x, y);
    }

    /// Advance the schedule by one frame. Runs at most one generation
    /// per call; does nothing while paused.
    pub fn tick(mut self, delta_seconds: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_seconds;
        let interval_seconds = self.interval_ms as f32 / 1000.0;

        if self.update_timer >= interval_seconds {
            self.board = self.board.advance();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}
