use log::{debug, info, warn};

use super::draw::{DrawSink, TileSize};
use super::factory::PieceFactory;
use super::grid::Grid;
use super::matrix::Rotation;
use super::piece::Piece;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
    Down,
    Turn,
}

/// One-element input buffer: a newer intent replaces an unconsumed one and
/// taking it leaves the slot empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputSlot(Option<Direction>);

impl InputSlot {
    pub fn queue(&mut self, direction: Direction) {
        self.0 = Some(direction);
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.0.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.0
    }
}

/// What a single [`Player::update`] did to the active piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Idle,
    Moved,
    Blocked,
    Rotated,
    Dropped,
    Locked { lines_cleared: usize },
    /// Locked, and the replacement piece has nowhere to go.
    ToppedOut { lines_cleared: usize },
}

pub struct Player {
    current: Piece,
    next: Piece,
    input: InputSlot,
    turn: Rotation,
    factory: Box<dyn PieceFactory>,
}

impl Player {
    pub fn new(mut factory: Box<dyn PieceFactory>, turn: Rotation) -> Self {
        let current = factory.create();
        let next = factory.create();
        Self {
            current,
            next,
            input: InputSlot::default(),
            turn,
            factory,
        }
    }

    /// Starts with a given active piece; the next one still comes from the
    /// factory.
    pub fn with_piece(current: Piece, mut factory: Box<dyn PieceFactory>, turn: Rotation) -> Self {
        let next = factory.create();
        Self {
            current,
            next,
            input: InputSlot::default(),
            turn,
            factory,
        }
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn pending_input(&self) -> Option<Direction> {
        self.input.peek()
    }

    pub fn queue_input(&mut self, direction: Direction) {
        self.input.queue(direction);
    }

    /// Consumes the pending input and applies it against `grid`.
    pub fn update(&mut self, grid: &mut Grid) -> Step {
        match self.input.take() {
            Some(Direction::Left) => self.shift(grid, -1),
            Some(Direction::Right) => self.shift(grid, 1),
            Some(Direction::Down) => self.descend(grid),
            Some(Direction::Turn) => self.turn(grid),
            None => Step::Idle,
        }
    }

    fn shift(&mut self, grid: &Grid, dx: i32) -> Step {
        let moved = self.current.moved(dx, 0);
        if grid.collides(&moved.cells, moved.position.x, moved.position.y) {
            debug!("horizontal move by {dx} blocked at {:?}", self.current.position);
            return Step::Blocked;
        }
        self.current = moved;
        Step::Moved
    }

    /// Falls one row, or locks in place when the row below is taken. The
    /// piece never moves and locks in the same step.
    fn descend(&mut self, grid: &mut Grid) -> Step {
        let Piece {
            cells,
            position,
            color,
        } = &self.current;

        if !grid.collides(cells, position.x, position.y + 1) {
            self.current.position.y += 1;
            return Step::Dropped;
        }

        grid.lock(cells, position.x, position.y, *color);
        let lines_cleared = grid.clear_completed_lines();
        info!("piece locked at {position:?}, {lines_cleared} line(s) cleared");

        self.spawn();
        if grid.collides(&self.current.cells, self.current.position.x, self.current.position.y) {
            warn!("spawned piece collides at {:?}", self.current.position);
            return Step::ToppedOut { lines_cleared };
        }
        Step::Locked { lines_cleared }
    }

    fn turn(&mut self, grid: &Grid) -> Step {
        let candidate = self.current.cells.rotated(self.turn);
        let position = self.current.position;
        if grid.collides(&candidate, position.x, position.y) {
            debug!("rotation blocked at {position:?}");
            return Step::Blocked;
        }
        self.current.cells = candidate;
        Step::Rotated
    }

    fn spawn(&mut self) {
        let next = self.factory.create();
        self.current = std::mem::replace(&mut self.next, next);
    }

    pub fn draw(&self, sink: &mut dyn DrawSink, tile: TileSize) {
        self.current.draw(sink, tile);
    }
}
