// Domain layer - board state and the generation rule
pub mod domain;

// Application layer - simulation orchestration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::GameState;
pub use domain::{Board, BoardError, Cell};
pub use ui::Button;
