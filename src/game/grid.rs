use log::{info, warn};

use super::draw::{Color, DrawSink, TileSize};
use super::matrix::CellMatrix;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Empty,
    Filled(Color),
}

impl CellState {
    pub fn is_filled(&self) -> bool {
        matches!(self, CellState::Filled(_))
    }
}

/// The settled playfield. Rows are indexed top to bottom.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![Self::empty_row(width); height],
        }
    }

    fn empty_row(width: usize) -> Vec<CellState> {
        vec![CellState::Empty; width]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }

    fn index(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        Some((row, col))
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<CellState> {
        self.index(row, col).map(|(r, c)| self.rows[r][c])
    }

    /// Whether `(row, col)` holds a locked cell. Coordinates off the grid are
    /// never occupied; wall and floor checks belong to [`Grid::collides`].
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_filled())
    }

    /// Sets a single cell. Writes off the grid are ignored.
    pub fn set(&mut self, row: i32, col: i32, state: CellState) {
        if let Some((r, c)) = self.index(row, col) {
            self.rows[r][c] = state;
        }
    }

    /// Whether `cells` placed with its top-left corner at `(at_x, at_y)`
    /// overlaps a wall, the floor, or a locked cell. Rows above the top edge
    /// are open.
    pub fn collides(&self, cells: &CellMatrix, at_x: i32, at_y: i32) -> bool {
        cells.occupied().any(|(x, y)| {
            let col = at_x + x;
            let row = at_y + y;

            if col < 0 || col >= self.width as i32 || row >= self.height as i32 {
                return true;
            }
            row >= 0 && self.is_occupied(row, col)
        })
    }

    /// Merges `cells` into the grid. Callers check [`Grid::collides`] first;
    /// any cell that still falls off the grid is dropped.
    pub fn lock(&mut self, cells: &CellMatrix, at_x: i32, at_y: i32, color: Color) {
        for (x, y) in cells.occupied() {
            let (col, row) = (at_x + x, at_y + y);
            match self.index(row, col) {
                Some((r, c)) => self.rows[r][c] = CellState::Filled(color),
                None => warn!("dropping locked cell outside the grid at row {row}, col {col}"),
            }
        }
    }

    pub fn is_row_complete(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(CellState::is_filled))
    }

    /// Removes every full row and inserts an empty one at the top for each,
    /// so everything above a cleared row falls by one. Returns the count.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = 0;

        while row < self.height {
            if self.is_row_complete(row) {
                self.rows.remove(row);
                self.rows.insert(0, Self::empty_row(self.width));
                cleared += 1;
            }
            row += 1;
        }

        if cleared > 0 {
            info!("cleared {cleared} line(s)");
        }
        cleared
    }

    pub fn filled_count_in_row(&self, row: usize) -> usize {
        self.rows
            .get(row)
            .map_or(0, |cells| cells.iter().filter(|c| c.is_filled()).count())
    }

    pub fn total_filled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_filled()).count()
    }

    pub fn draw(&self, sink: &mut dyn DrawSink, tile: TileSize) {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let CellState::Filled(color) = cell {
                    sink.fill_rect(tile.cell(col as i32, row as i32, *color));
                }
            }
        }
    }
}
