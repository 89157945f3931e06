use rand::Rng;

use crate::{GameRng, Vec2};

/// Addressable target cells on a board
///
/// Cells sit on a square lattice of `cell_size`. The outermost row and
/// column are reserved for layout, so for a board of `w × h` there are
/// `(w - cell) / cell` columns and `(h - cell) / cell` rows, addressed
/// from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGrid {
    cell_size: f64,
    cols: u32,
    rows: u32,
}

impl TargetGrid {
    pub fn for_board(width: f64, height: f64, cell_size: f64) -> Self {
        let count = |extent: f64| ((extent - cell_size) / cell_size).floor().max(0.0) as u32;
        Self {
            cell_size,
            cols: count(width),
            rows: count(height),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    /// Center of the cell at 1-based `(col, row)`
    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(f64::from(col) * self.cell_size, f64::from(row) * self.cell_size)
    }

    /// Every addressable cell center, column by column
    pub fn centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        (1..=self.cols).flat_map(move |col| (1..=self.rows).map(move |row| self.cell_center(col, row)))
    }

    /// Pick a cell uniformly at random. The previous pick is not excluded.
    pub fn random_cell(&self, rng: &mut GameRng) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let col = rng.0.gen_range(1..=self.cols);
        let row = rng.0.gen_range(1..=self.rows);
        Some(self.cell_center(col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_has_nine_by_nine_interior() {
        let grid = TargetGrid::for_board(500.0, 500.0, 50.0);
        assert_eq!(grid.cols(), 9);
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.centers().count(), 81);
    }

    #[test]
    fn test_centers_exclude_border() {
        let grid = TargetGrid::for_board(500.0, 500.0, 50.0);
        for c in grid.centers() {
            assert!(c.x >= 50.0 && c.x <= 450.0, "x {} outside interior", c.x);
            assert!(c.y >= 50.0 && c.y <= 450.0, "y {} outside interior", c.y);
        }
    }

    #[test]
    fn test_non_square_board() {
        let grid = TargetGrid::for_board(300.0, 200.0, 50.0);
        assert_eq!((grid.cols(), grid.rows()), (5, 3));
        assert_eq!(grid.cell_center(5, 3), Vec2::new(250.0, 150.0));
    }

    #[test]
    fn test_random_cell_stays_in_range() {
        let grid = TargetGrid::for_board(500.0, 500.0, 50.0);
        let mut rng = GameRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let cell = grid.random_cell(&mut rng).expect("non-empty grid");
            assert!(grid.centers().any(|c| c == cell));
            seen.insert((cell.x as i64, cell.y as i64));
        }
        assert_eq!(seen.len(), 81, "Every cell is reachable");
    }

    #[test]
    fn test_random_cell_on_tiny_board() {
        let grid = TargetGrid::for_board(50.0, 500.0, 50.0);
        assert!(grid.is_empty());
        assert_eq!(grid.random_cell(&mut GameRng::new(1)), None);
    }
}
