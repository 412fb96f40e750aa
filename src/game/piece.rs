use super::catalog::Shape;
use super::draw::{Color, DrawSink, TileSize};
use super::matrix::{CellMatrix, Rotation};

/// Grid coordinate of a piece's top-left matrix corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    pub cells: CellMatrix,
    pub position: Position,
    pub color: Color,
}

impl Piece {
    pub fn new(shape: &Shape, position: Position) -> Self {
        Self {
            cells: shape.cells().clone(),
            position,
            color: shape.color(),
        }
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: Position::new(self.position.x + dx, self.position.y + dy),
            ..self.clone()
        }
    }

    pub fn rotated(&self, rotation: Rotation) -> Self {
        Self {
            cells: self.cells.rotated(rotation),
            ..self.clone()
        }
    }

    /// Absolute grid coordinates `(x, y)` of every occupied cell.
    pub fn blocks(&self) -> impl Iterator<Item = Position> + '_ {
        let Position { x, y } = self.position;
        self.cells
            .occupied()
            .map(move |(dx, dy)| Position::new(x + dx, y + dy))
    }

    pub fn draw(&self, sink: &mut dyn DrawSink, tile: TileSize) {
        for block in self.blocks() {
            sink.fill_rect(tile.cell(block.x, block.y, self.color));
        }
    }
}
