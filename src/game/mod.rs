use std::time::Instant;

use log::{info, warn};

pub mod catalog;
pub mod config;
pub mod draw;
pub mod error;
pub mod factory;
pub mod grid;
pub mod matrix;
pub mod piece;
pub mod player;
pub mod ticker;

pub use catalog::{Catalog, Shape, Stone};
pub use config::Config;
pub use draw::{Color, DrawSink, FillRect, TileSize};
pub use error::{CatalogError, ConfigError, Error};
pub use factory::{PieceFactory, RandomPieceFactory, SequencePieceFactory};
pub use grid::{CellState, Grid};
pub use matrix::{CellMatrix, Rotation};
pub use piece::{Piece, Position};
pub use player::{Direction, InputSlot, Player, Step};
pub use ticker::Ticker;

// ============================================================================
// Types
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    Over,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    PieceMoved,
    PieceRotated,
    PieceDropped,
    PieceLocked { lines_cleared: usize },
    ToppedOut,
}

// ============================================================================
// Game
// ============================================================================

/// Owns the grid, the player and the gravity ticker. A frame driver calls
/// [`Game::update`] then [`Game::draw`] once per frame.
pub struct Game {
    config: Config,
    grid: Grid,
    player: Player,
    ticker: Ticker,
    state: GameState,
    events: Vec<GameEvent>,
}

impl Game {
    /// A game over the standard catalog with random piece selection.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let catalog = Catalog::standard();
        let size = catalog.max_size();
        if config.spawn.x as usize + size > config.width {
            return Err(ConfigError::SpawnOverhang {
                x: config.spawn.x,
                size,
                width: config.width,
            }
            .into());
        }
        let factory = RandomPieceFactory::new(catalog, config.spawn);
        Self::with_factory(config, Box::new(factory))
    }

    pub fn with_factory(config: Config, factory: Box<dyn PieceFactory>) -> Result<Self, Error> {
        config.validate()?;
        let player = Player::new(factory, config.turn);
        Ok(Self::assemble(config, Grid::new(config.width, config.height), player))
    }

    /// Starts from a prepared grid and active piece. The grid's dimensions
    /// override the ones in `config`.
    pub fn with_grid(
        config: Config,
        grid: Grid,
        current: Piece,
        factory: Box<dyn PieceFactory>,
    ) -> Result<Self, Error> {
        let config = Config {
            width: grid.width(),
            height: grid.height(),
            ..config
        };
        config.validate()?;
        let player = Player::with_piece(current, factory, config.turn);
        Ok(Self::assemble(config, grid, player))
    }

    /// A game whose first piece already collides starts over, so `lock` is
    /// never reached with an overlapping piece.
    fn assemble(config: Config, grid: Grid, player: Player) -> Self {
        info!(
            "new {}x{} game, spawn at {:?}, tick every {:?}",
            config.width, config.height, config.spawn, config.tick
        );
        let current = player.current();
        let (state, events) =
            if grid.collides(&current.cells, current.position.x, current.position.y) {
                warn!("first piece collides at {:?}, game over", current.position);
                (GameState::Over, vec![GameEvent::ToppedOut])
            } else {
                (GameState::Playing, Vec::new())
            };
        Self {
            config,
            grid,
            player,
            ticker: Ticker::new(config.tick, Instant::now()),
            state,
            events,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_piece(&self) -> &Piece {
        self.player.current()
    }

    pub fn next_piece(&self) -> &Piece {
        self.player.next()
    }

    pub fn pending_input(&self) -> Option<Direction> {
        self.player.pending_input()
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    /// Records the latest player intent; it replaces any unconsumed one.
    pub fn queue_input(&mut self, direction: Direction) {
        self.player.queue_input(direction);
    }

    /// One frame of logic: the ticker may force a `Down`, then the pending
    /// input is applied.
    pub fn update(&mut self, now: Instant) {
        if self.state != GameState::Playing {
            return;
        }

        if self.ticker.update(now) {
            self.player.queue_input(Direction::Down);
        }

        match self.player.update(&mut self.grid) {
            Step::Idle | Step::Blocked => {}
            Step::Moved => self.events.push(GameEvent::PieceMoved),
            Step::Rotated => self.events.push(GameEvent::PieceRotated),
            Step::Dropped => self.events.push(GameEvent::PieceDropped),
            Step::Locked { lines_cleared } => {
                self.events.push(GameEvent::PieceLocked { lines_cleared })
            }
            Step::ToppedOut { lines_cleared } => {
                warn!("game over");
                self.events.push(GameEvent::PieceLocked { lines_cleared });
                self.events.push(GameEvent::ToppedOut);
                self.state = GameState::Over;
            }
        }
    }

    /// Emits the settled cells, then the active piece on top.
    pub fn draw(&self, sink: &mut dyn DrawSink) {
        self.grid.draw(sink, self.config.tile);
        self.player.draw(sink, self.config.tile);
    }

    /// Takes and clears all pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

pub mod test_helpers {
    use super::*;
    use std::time::Duration;

    pub fn empty_grid() -> Grid {
        Grid::new(config::GRID_WIDTH, config::GRID_HEIGHT)
    }

    pub fn fill_row(grid: &mut Grid, row: usize) {
        for col in 0..grid.width() {
            grid.set(row as i32, col as i32, CellState::Filled(Color::GRAY));
        }
    }

    pub fn fill_row_with_gap(grid: &mut Grid, row: usize, gap: usize) {
        for col in (0..grid.width()).filter(|&c| c != gap) {
            grid.set(row as i32, col as i32, CellState::Filled(Color::GRAY));
        }
    }

    pub fn dot_catalog() -> Catalog {
        let dot = Shape::new(CellMatrix::from_array([[1]]), Color::RED).expect("dot shape");
        Catalog::new(vec![dot]).expect("dot catalog")
    }

    /// Factory repeating the given stones in order.
    pub fn sequence(order: &[Stone]) -> Box<dyn PieceFactory> {
        let catalog = Catalog::standard();
        let indices = order
            .iter()
            .filter_map(|s| Stone::ALL.iter().position(|t| t == s))
            .collect();
        let spawn = Position::new(config::SPAWN_X, config::SPAWN_Y);
        Box::new(SequencePieceFactory::new(catalog, spawn, indices).expect("non-empty order"))
    }

    /// Factory producing 1x1 pieces at the spawn position.
    pub fn dots() -> Box<dyn PieceFactory> {
        let spawn = Position::new(config::SPAWN_X, config::SPAWN_Y);
        Box::new(RandomPieceFactory::new(dot_catalog(), spawn))
    }

    pub fn piece_at(stone: Stone, x: i32, y: i32) -> Piece {
        Piece::new(&stone.shape(), Position::new(x, y))
    }

    pub fn dot_at(x: i32, y: i32) -> Piece {
        let catalog = dot_catalog();
        Piece::new(catalog.get(0), Position::new(x, y))
    }

    /// Game whose ticker stays quiet for an hour, so only queued input moves
    /// the piece.
    pub fn game_with(grid: Grid, current: Piece, factory: Box<dyn PieceFactory>) -> Game {
        let config = Config {
            tick: Duration::from_secs(3600),
            ..Config::default()
        };
        Game::with_grid(config, grid, current, factory).expect("valid test game")
    }

    /// Queues `direction` and runs one frame.
    pub fn press(game: &mut Game, direction: Direction) {
        game.queue_input(direction);
        game.update(Instant::now());
    }
}
