use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{
    fs::File,
    io::{self, stdout, Write},
    time::{Duration, Instant},
};

use stones::game::{Color, Config, Direction, DrawSink, FillRect, Game, Piece, Position};

// ============================================================================
// Visual Constants
// ============================================================================

const CELL_WIDTH: u16 = 2;
const BLOCK_CHAR: &str = "██";
const EMPTY_CHAR: &str = "  ";
const PREVIEW_SIZE: usize = 4;
const FRAME: Duration = Duration::from_millis(16);

// ============================================================================
// Canvas
// ============================================================================

/// Cell buffer the game draws into; one cell per tile.
struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|cell| match cell {
                            Some(Color { r, g, b }) => {
                                Span::styled(BLOCK_CHAR, Style::default().fg(TermColor::Rgb(*r, *g, *b)))
                            }
                            None => Span::raw(EMPTY_CHAR),
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

impl DrawSink for Canvas {
    fn fill_rect(&mut self, rect: FillRect) {
        for y in rect.y..rect.y + rect.height as i32 {
            for x in rect.x..rect.x + rect.width as i32 {
                // pieces may hang above the top edge
                if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                    continue;
                }
                self.cells[y as usize * self.width + x as usize] = Some(rect.color);
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(frame: &mut Frame, game: &Game, board: &Canvas, preview: &Canvas) {
    let area = frame.size();

    let grid_width = board.width as u16 * CELL_WIDTH + 2;
    let grid_height = board.height as u16 + 2;
    let preview_width = PREVIEW_SIZE as u16 * CELL_WIDTH + 4;

    let main_area = centered_rect(grid_width + preview_width, grid_height + 2, area);
    let vertical = Layout::vertical([Constraint::Length(grid_height), Constraint::Fill(1)]).split(main_area);
    let horizontal = Layout::horizontal([
        Constraint::Length(grid_width),
        Constraint::Length(preview_width),
    ])
    .split(vertical[0]);

    let title = if game.is_over() { " Game Over " } else { " Stones " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(horizontal[0]);
    frame.render_widget(block, horizontal[0]);
    frame.render_widget(Paragraph::new(board.lines()), inner);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Next ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(horizontal[1]);
    frame.render_widget(block, horizontal[1]);
    frame.render_widget(Paragraph::new(preview.lines()), inner);

    let controls = Paragraph::new(Line::from("←→/AD: Move | ↓/S: Drop | ↑/W/Space: Turn | Q/ESC: Quit"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TermColor::DarkGray));
    frame.render_widget(controls, vertical[1]);
}

/// `width` x `height` box in the middle of `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(Direction::Turn)
        }
        _ => None,
    }
}

// ============================================================================
// Main Loop
// ============================================================================

/// Where log lines go while the terminal is in raw mode: the named file, or
/// nowhere at all so stderr never lands on the board.
fn log_target(path: Option<&str>) -> anyhow::Result<env_logger::Target> {
    let sink: Box<dyn Write + Send> = match path {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("opening log file {path}"))?)
        }
        None => Box::new(io::sink()),
    };
    Ok(env_logger::Target::Pipe(sink))
}

fn init_logging() -> anyhow::Result<()> {
    let path = std::env::var("STONES_LOG_FILE").ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(log_target(path.as_deref())?)
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut game: Game) -> anyhow::Result<()> {
    let config = *game.config();
    let mut board = Canvas::new(config.width, config.height);
    let mut preview = Canvas::new(PREVIEW_SIZE, PREVIEW_SIZE);

    loop {
        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        code => {
                            if let Some(direction) = direction_for(code) {
                                game.queue_input(direction);
                            }
                        }
                    }
                }
            }
        }

        game.update(Instant::now());
        for event in game.take_events() {
            log::trace!("{event:?}");
        }

        board.clear();
        game.draw(&mut board);

        preview.clear();
        let next = Piece {
            position: Position::default(),
            ..game.next_piece().clone()
        };
        next.draw(&mut preview, config.tile);

        terminal.draw(|frame| render(frame, &game, &board, &preview))?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("reading configuration")?;
    let game = Game::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, game);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
