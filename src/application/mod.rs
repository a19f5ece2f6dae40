mod game_state;

pub use game_state::{
    DEFAULT_INTERVAL_MS, GameState, INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};
