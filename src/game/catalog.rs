use super::draw::Color;
use super::error::CatalogError;
use super::matrix::CellMatrix;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stone {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Stone {
    pub const ALL: [Stone; 7] = [
        Stone::I,
        Stone::O,
        Stone::T,
        Stone::S,
        Stone::Z,
        Stone::J,
        Stone::L,
    ];

    /// Default orientation of the stone.
    pub fn matrix(&self) -> CellMatrix {
        match self {
            Stone::I => CellMatrix::from_array([
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            Stone::O => CellMatrix::from_array([[1, 1], [1, 1]]),
            Stone::T => CellMatrix::from_array([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
            Stone::S => CellMatrix::from_array([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
            Stone::Z => CellMatrix::from_array([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
            Stone::J => CellMatrix::from_array([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
            Stone::L => CellMatrix::from_array([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Stone::I => Color::CYAN,
            Stone::O => Color::YELLOW,
            Stone::T => Color::PURPLE,
            Stone::S => Color::GREEN,
            Stone::Z => Color::RED,
            Stone::J => Color::BLUE,
            Stone::L => Color::ORANGE,
        }
    }

    pub fn shape(&self) -> Shape {
        Shape {
            cells: self.matrix(),
            color: self.color(),
        }
    }
}

/// A read-only template: default orientation plus the color it locks with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    cells: CellMatrix,
    color: Color,
}

impl Shape {
    pub fn new(cells: CellMatrix, color: Color) -> Result<Self, CatalogError> {
        if cells.count() == 0 {
            return Err(CatalogError::NoCells);
        }
        Ok(Self { cells, color })
    }

    pub fn cells(&self) -> &CellMatrix {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Catalog {
    pub fn new(shapes: Vec<Shape>) -> Result<Self, CatalogError> {
        if shapes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self { shapes })
    }

    /// The seven tetrominoes.
    pub fn standard() -> Self {
        Self {
            shapes: Stone::ALL.iter().map(Stone::shape).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at `index`, wrapping around the catalog.
    pub fn get(&self, index: usize) -> &Shape {
        &self.shapes[index % self.shapes.len()]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Side length of the largest matrix in the catalog.
    pub fn max_size(&self) -> usize {
        self.shapes
            .iter()
            .map(|shape| shape.cells().size())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shapes_are_valid_tetrominoes() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 7);
        for shape in catalog.shapes() {
            assert!(Shape::new(shape.cells().clone(), shape.color()).is_ok());
            assert_eq!(shape.cells().count(), 4);
            assert!((2..=4).contains(&shape.cells().size()));
        }
    }

    #[test]
    fn blank_shape_is_rejected() {
        let blank = CellMatrix::from_array([[0, 0], [0, 0]]);
        assert_eq!(Shape::new(blank, Color::RED), Err(CatalogError::NoCells));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::EmptyCatalog));
    }

    #[test]
    fn max_size_is_the_widest_matrix() {
        assert_eq!(Catalog::standard().max_size(), 4);

        let o = Catalog::new(vec![Stone::O.shape()]).unwrap();
        assert_eq!(o.max_size(), 2);
    }

    #[test]
    fn get_wraps_index() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get(7), catalog.get(0));
    }
}
