//! Grid module - the occupancy matrix pieces lock into
//!
//! Row-major flat storage, `rows x cols` cells, each empty or holding the kind of
//! the piece that filled it.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left edge.
//!
//! Occupancy queries take signed coordinates so the collision code can probe
//! outside the grid: any column outside `[0, cols)` and any row at or below the
//! bottom reports occupied, while rows above the top report empty (pieces spawn
//! partially above the visible area).

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Row indices removed by one clear, in original (pre-clear) indices, bottom to top
pub type ClearedRows = Vec<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Empty grid with the compatibility dimensions (20 rows x 10 columns)
    pub fn standard() -> Self {
        Self::new(BOARD_HEIGHT, BOARD_WIDTH)
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether `(row, col)` blocks a piece.
    ///
    /// Out-of-range columns and rows at or past the bottom are treated as
    /// occupied; rows above the top are open.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        if col < 0 || col as usize >= self.cols || (row >= 0 && row as usize >= self.rows) {
            return true;
        }
        if row < 0 {
            return false;
        }
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, kind: PieceKind) -> bool {
        self.put(row, col, Some(kind))
    }

    /// Write a raw cell value (`None` empties it). Returns false if out of bounds.
    pub fn put(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove a row: everything above shifts down one, an empty row enters at the top
    pub fn remove_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(None);
    }

    /// Remove every full row in one pass and return their original indices
    /// (bottom to top). Surviving rows keep their relative order and settle at the
    /// bottom; the top is padded with empty rows.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = self.cols;
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into `out`, reusing its allocation
    pub fn write_cells_into(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a grid from text rows, `.` = empty, a kind letter = filled.
    ///
    /// Rows are bottom-aligned: fewer rows than `rows` leaves the top empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: usize, cols: usize, text: &[&str]) -> Self {
        assert!(text.len() <= rows);
        let mut grid = Self::new(rows, cols);
        let offset = rows - text.len();
        for (r, line) in text.iter().enumerate() {
            assert_eq!(line.len(), cols, "row {r} has wrong width");
            for (c, ch) in line.chars().enumerate() {
                if let Some(kind) = PieceKind::from_str(&ch.to_string()) {
                    grid.set((offset + r) as i32, c as i32, kind);
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::standard();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 9), Some(9));
        assert_eq!(grid.index(1, 0), Some(10));
        assert_eq!(grid.index(19, 9), Some(199));
        assert_eq!(grid.index(0, -1), None);
        assert_eq!(grid.index(0, 10), None);
        assert_eq!(grid.index(20, 0), None);
    }

    #[test]
    fn test_out_of_bounds_occupancy() {
        let grid = Grid::standard();
        assert!(grid.is_occupied(5, -1));
        assert!(grid.is_occupied(5, 10));
        assert!(grid.is_occupied(20, 4));
        assert!(grid.is_occupied(-3, -1));
        // above the top is open
        assert!(!grid.is_occupied(-1, 4));
        assert!(!grid.is_occupied(-2, 0));
    }

    #[test]
    fn test_remove_row_shifts_above_down() {
        let mut grid = Grid::from_rows(4, 3, &["i..", ".t.", "sss", "..z"]);
        grid.remove_row(2);

        assert!(grid.row(0).iter().all(Option::is_none));
        assert_eq!(grid.row(1), &[Some(PieceKind::I), None, None]);
        assert_eq!(grid.row(2), &[None, Some(PieceKind::T), None]);
        assert_eq!(grid.row(3), &[None, None, Some(PieceKind::Z)]);
    }

    #[test]
    fn test_clear_full_rows_non_adjacent() {
        let mut grid = Grid::from_rows(5, 3, &["j..", "lll", ".o.", "ttt", "..s"]);
        let cleared = grid.clear_full_rows();

        assert_eq!(cleared, vec![3, 1]);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cells().len(), 15);
        assert!(grid.row(0).iter().all(Option::is_none));
        assert!(grid.row(1).iter().all(Option::is_none));
        assert_eq!(grid.row(2), &[Some(PieceKind::J), None, None]);
        assert_eq!(grid.row(3), &[None, Some(PieceKind::O), None]);
        assert_eq!(grid.row(4), &[None, None, Some(PieceKind::S)]);
    }

    #[test]
    fn test_clear_full_rows_none() {
        let mut grid = Grid::from_rows(3, 3, &["i..", "ii."]);
        let before = grid.clone();
        assert!(grid.clear_full_rows().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_write_cells_into_reuses_buffer() {
        let mut grid = Grid::standard();
        grid.set(19, 0, PieceKind::L);

        let mut out = Vec::with_capacity(200);
        grid.write_cells_into(&mut out);
        grid.write_cells_into(&mut out);
        assert_eq!(out.len(), 200);
        assert_eq!(out[190], Some(PieceKind::L));
        assert_eq!(grid.filled_count(), 1);
    }
}
