use super::{Board, Cell};

/// A set of live cells given as coordinates relative to a placement origin.
#[derive(Clone)]
pub struct Pattern {
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Stamp the pattern's live cells onto the board at (x, y).
    /// Cells falling outside the board are dropped.
    pub fn place_on(&self, board: &mut Board, x: usize, y: usize) {
        for &(dx, dy) in self.cells {
            board.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// The five-cell glider seeded on every fresh board for demonstration.
/// A presentation default, not load-bearing.
pub const fn demo_seed() -> Pattern {
    Pattern {
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    }
}
