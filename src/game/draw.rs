#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const RED: Color = Color::rgb(200, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 200, 200);
    pub const YELLOW: Color = Color::rgb(220, 200, 0);
    pub const PURPLE: Color = Color::rgb(150, 0, 200);
    pub const GREEN: Color = Color::rgb(0, 190, 0);
    pub const BLUE: Color = Color::rgb(30, 60, 220);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

/// A single filled-rectangle command, in the sink's own units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FillRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

/// Size of one grid cell in sink units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const UNIT: TileSize = TileSize {
        width: 1,
        height: 1,
    };

    /// Rectangle covering grid cell `(col, row)`.
    pub fn cell(&self, col: i32, row: i32, color: Color) -> FillRect {
        FillRect {
            x: col * self.width as i32,
            y: row * self.height as i32,
            width: self.width,
            height: self.height,
            color,
        }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Anything that can receive filled rectangles: a terminal canvas, a pixel
/// buffer, or a recorder in tests.
pub trait DrawSink {
    fn fill_rect(&mut self, rect: FillRect);
}

impl DrawSink for Vec<FillRect> {
    fn fill_rect(&mut self, rect: FillRect) {
        self.push(rect);
    }
}
