use super::error::CatalogError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// A square, row-major grid of cells describing one orientation of a shape.
///
/// Matrices are never mutated after construction; rotating yields a new one,
/// so a rejected rotation leaves the original untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CellMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl CellMatrix {
    /// Builds a matrix from nested rows, rejecting empty or non-square input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, CatalogError> {
        let size = rows.len();
        if size == 0 {
            return Err(CatalogError::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(CatalogError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
            cells.extend(line);
        }

        Ok(Self { size, cells })
    }

    /// Builds a matrix from a fixed-size 0/1 array. Squareness is guaranteed
    /// by the type and emptiness is rejected at compile time.
    pub fn from_array<const N: usize>(rows: [[u8; N]; N]) -> Self {
        const { assert!(N > 0, "cell matrix must have at least one row") };

        Self {
            size: N,
            cells: rows.iter().flatten().map(|&cell| cell != 0).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates `(x, y)` offsets of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(move |(i, _)| ((i % size) as i32, (i / size) as i32))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn rotated(&self, rotation: Rotation) -> Self {
        let n = self.size;
        let mut cells = vec![false; n * n];

        for y in 0..n {
            for x in 0..n {
                // (row, col) of the destination cell
                let (row, col) = match rotation {
                    Rotation::Clockwise => (x, n - 1 - y),
                    Rotation::CounterClockwise => (n - 1 - x, y),
                };
                cells[row * n + col] = self.cells[y * n + x];
            }
        }

        Self { size: n, cells }
    }
}
