use thiserror::Error;

/// Rejected shape or catalog definitions. These are raised when a catalog is
/// assembled, never while a game is running.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CatalogError {
    #[error("cell matrix has no rows")]
    EmptyMatrix,
    #[error("cell matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("shape has no occupied cells")]
    NoCells,
    #[error("catalog has no shapes")]
    EmptyCatalog,
    #[error("piece sequence is empty")]
    EmptySequence,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number")]
    InvalidValue { var: &'static str, value: String },
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("spawn column {x} lies outside a grid {width} cells wide")]
    SpawnOutOfBounds { x: i32, width: usize },
    #[error("a {size}-wide shape spawned at column {x} overhangs a grid {width} cells wide")]
    SpawnOverhang { x: i32, size: usize, width: usize },
    #[error("tick period must be non-zero")]
    ZeroTick,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
