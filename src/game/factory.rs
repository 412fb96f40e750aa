use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::catalog::Catalog;
use super::error::CatalogError;
use super::piece::{Piece, Position};

/// Produces fresh pieces at the spawn position.
pub trait PieceFactory {
    fn create(&mut self) -> Piece;
}

/// Picks a catalog shape uniformly at random.
pub struct RandomPieceFactory {
    catalog: Catalog,
    spawn: Position,
    rng: ThreadRng,
}

impl RandomPieceFactory {
    pub fn new(catalog: Catalog, spawn: Position) -> Self {
        Self {
            catalog,
            spawn,
            rng: rand::thread_rng(),
        }
    }
}

impl PieceFactory for RandomPieceFactory {
    fn create(&mut self) -> Piece {
        let index = self.rng.gen_range(0..self.catalog.len());
        debug!("spawning catalog shape {index}");
        Piece::new(self.catalog.get(index), self.spawn)
    }
}

/// Cycles through a fixed list of catalog indices. Useful for replays and
/// tests where the next shape must be known.
pub struct SequencePieceFactory {
    catalog: Catalog,
    spawn: Position,
    order: Vec<usize>,
    index: usize,
}

impl SequencePieceFactory {
    pub fn new(catalog: Catalog, spawn: Position, order: Vec<usize>) -> Result<Self, CatalogError> {
        if order.is_empty() {
            return Err(CatalogError::EmptySequence);
        }
        Ok(Self {
            catalog,
            spawn,
            order,
            index: 0,
        })
    }
}

impl PieceFactory for SequencePieceFactory {
    fn create(&mut self) -> Piece {
        let shape = self.order[self.index % self.order.len()];
        self.index += 1;
        Piece::new(self.catalog.get(shape), self.spawn)
    }
}
