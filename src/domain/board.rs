use super::Cell;
use rand::Rng;
use thiserror::Error;

/// Default probability that a randomized cell starts alive.
pub const DEFAULT_DENSITY: f64 = 0.3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
}

/// Board manages the 2D cellular automaton grid.
/// Generation transitions replace the whole grid, so neighbor counts
/// always read from a stable prior-generation snapshot.
#[derive(Debug)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells initially dead.
    /// Dimensions are fixed for the lifetime of the board.
    pub fn new(cols: usize, rows: usize) -> Result<Self, BoardError> {
        if cols == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        })
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.cols && y < self.rows).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.cols && y < self.rows {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Cell state at signed coordinates. Anything outside the board reads
    /// as dead; queries never wrap and never error.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize)
            .is_some_and(Cell::is_alive)
    }

    /// Count live cells in the 3x3 neighborhood excluding the center.
    /// Edge cells simply see fewer live candidates.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }

    /// Flip one cell in place; out-of-bounds toggles are ignored
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.cols && y < self.rows {
            let idx = self.get_index(x, y);
            self.cells[idx] = self.cells[idx].toggled();
        }
    }

    /// Replace the grid with a fresh all-dead grid of the same dimensions
    pub fn clear(&mut self) {
        self.cells = vec![Cell::Dead; self.cols * self.rows];
    }

    /// Replace the grid with an independently random one; each cell is
    /// live with probability `density`.
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// Randomize from a caller-supplied source, so tests can seed one
    pub fn randomize_with(&mut self, rng: &mut impl Rng, density: f64) {
        self.cells = (0..self.cols * self.rows)
            .map(|_| {
                if rng.random_bool(density) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();
    }

    /// Next generation under B3/S23, computed entirely from the current
    /// snapshot and returned as a new board.
    pub fn advance(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_neighbors(x as i32, y as i32);
                current.next_state(neighbors)
            })
            .collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn live_cells(board: &Board) -> Vec<(usize, usize)> {
        board
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 10).unwrap_err(),
            BoardError::InvalidDimensions { cols: 0, rows: 10 }
        );
        assert!(Board::new(10, 0).is_err());
        assert!(Board::new(0, 0).is_err());
    }

    #[test]
    fn test_new_board_is_all_dead() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.dimensions(), (4, 3));
        assert!(live_cells(&board).is_empty());
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let board = Board::new(10, 10).unwrap();
        let next = board.advance();
        assert!(live_cells(&next).is_empty());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut board = Board::new(5, 5).unwrap();
        board.set(2, 2, Cell::Alive);
        let next = board.advance();
        assert!(live_cells(&next).is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        // Vertical blinker in the middle of a 5x5 board flips horizontal.
        let mut board = Board::new(5, 5).unwrap();
        board.set(2, 1, Cell::Alive);
        board.set(2, 2, Cell::Alive);
        board.set(2, 3, Cell::Alive);

        let next = board.advance();
        assert_eq!(live_cells(&next), vec![(1, 2), (2, 2), (3, 2)]);

        let again = next.advance();
        assert_eq!(live_cells(&again), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_two_diagonal_cells_die_out() {
        // Hand-computed: each live cell has one neighbor, no dead cell
        // reaches three, so one step empties the board.
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 0, Cell::Alive);
        board.set(2, 1, Cell::Alive);

        let next = board.advance();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(next.get(x, y), Some(Cell::Dead), "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut board = Board::new(5, 5).unwrap();
        assert!(!board.is_alive(1, 1));
        board.toggle(1, 1);
        assert!(board.is_alive(1, 1));
        board.toggle(1, 1);
        assert!(!board.is_alive(1, 1));
    }

    #[test]
    fn test_toggle_out_of_bounds_is_ignored() {
        let mut board = Board::new(3, 3).unwrap();
        board.toggle(3, 0);
        board.toggle(0, 17);
        assert!(live_cells(&board).is_empty());
    }

    #[test]
    fn test_out_of_bounds_reads_as_dead() {
        let mut board = Board::new(3, 3).unwrap();
        board.randomize(1.0);
        assert!(!board.is_alive(-1, 0));
        assert!(!board.is_alive(0, -1));
        assert!(!board.is_alive(3, 0));
        assert!(!board.is_alive(0, 3));
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut board = Board::new(6, 4).unwrap();
        board.randomize(1.0);
        board.clear();
        let (cols, rows) = board.dimensions();
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                assert!(!board.is_alive(x, y));
            }
        }
    }

    #[test]
    fn test_randomize_boundary_densities() {
        let mut board = Board::new(8, 8).unwrap();

        board.randomize(0.0);
        assert!(live_cells(&board).is_empty());

        board.randomize(1.0);
        assert_eq!(live_cells(&board).len(), 64);
    }

    #[test]
    fn test_randomize_is_deterministic_with_seeded_rng() {
        let mut a = Board::new(10, 10).unwrap();
        let mut b = Board::new(10, 10).unwrap();
        a.randomize_with(&mut StdRng::seed_from_u64(42), DEFAULT_DENSITY);
        b.randomize_with(&mut StdRng::seed_from_u64(42), DEFAULT_DENSITY);
        assert_eq!(live_cells(&a), live_cells(&b));
    }

    #[test]
    fn test_corner_neighbor_count() {
        let mut board = Board::new(4, 6).unwrap();
        assert_eq!(board.count_neighbors(0, 0), 0);

        // A corner only has three in-bounds candidates.
        board.set(1, 0, Cell::Alive);
        board.set(0, 1, Cell::Alive);
        board.set(1, 1, Cell::Alive);
        board.set(2, 2, Cell::Alive); // outside the corner's neighborhood
        assert_eq!(board.count_neighbors(0, 0), 3);
    }

    #[test]
    fn test_interior_neighbor_count_is_capped_at_eight() {
        let mut board = Board::new(3, 3).unwrap();
        board.randomize(1.0);
        assert_eq!(board.count_neighbors(1, 1), 8);
        assert_eq!(board.count_neighbors(0, 0), 3);
        assert_eq!(board.count_neighbors(1, 0), 5);
    }

    #[test]
    fn test_advance_does_not_mutate_source() {
        let mut board = Board::new(5, 5).unwrap();
        board.set(2, 2, Cell::Alive);
        let _ = board.advance();
        assert!(board.is_alive(2, 2));
    }
}
