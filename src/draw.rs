use crate::food::Food;
use crate::game::Game;
use crate::grid::{Board, Cell};
use crate::snake::Snake;

pub type Rgb = (u8, u8, u8);

pub const BACKGROUND: Rgb = (0, 0, 0);
pub const BORDER: Rgb = (93, 216, 228);
pub const FOOD: Rgb = (255, 0, 0);
pub const SNAKE: Rgb = (0, 255, 0);

/// Anything that paints itself onto the board.
pub trait Renderable {
    fn draw(&self, canvas: &mut Canvas<'_>);
}

/// An RGBA framebuffer addressed in board cells.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    board: Board,
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], board: Board) -> Self {
        let (width, height) = board.pixel_size();
        Self { frame, board, width, height }
    }

    pub fn clear(&mut self, (r, g, b): Rgb) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    pub fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        let (x, y) = self.board.to_pixel(cell);
        let size = self.board.cell_size();
        self.fill_rect(x, y, size, size, color);
    }

    /// One-pixel outline just inside the cell.
    pub fn stroke_cell(&mut self, cell: Cell, color: Rgb) {
        let (x, y) = self.board.to_pixel(cell);
        let size = self.board.cell_size();
        self.stroke_rect(x, y, size, size, color);
    }

    /// Filled cell with a border, the look of every entity on the board.
    pub fn bordered_cell(&mut self, cell: Cell, fill: Rgb) {
        self.fill_cell(cell, fill);
        self.stroke_cell(cell, BORDER);
    }

    fn put_pixel(&mut self, x: u32, y: u32, (r, g, b): Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x2 = (x + w).min(self.width);
        let y2 = (y + h).min(self.height);
        for py in y..y2 {
            for px in x..x2 {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let x2 = (x + w - 1).min(self.width - 1);
        let y2 = (y + h - 1).min(self.height - 1);
        for px in x..=x2 {
            self.put_pixel(px, y, color);
            self.put_pixel(px, y2, color);
        }
        for py in y..=y2 {
            self.put_pixel(x, py, color);
            self.put_pixel(x2, py, color);
        }
    }
}

impl Renderable for Snake {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        for &cell in self.segments().iter().skip(1) {
            canvas.bordered_cell(cell, SNAKE);
        }
        canvas.bordered_cell(self.head(), SNAKE);
    }
}

impl Renderable for Food {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        canvas.bordered_cell(self.position(), FOOD);
    }
}

/// Repaints only what changed since the previous frame: the vacated tail is
/// erased and the entities drawn on top. A reset, a skipped tick, or the first
/// frame trigger a full clear.
#[derive(Default)]
pub struct Renderer {
    drawn: Option<(u64, u64)>, // (generation, ticks) of the last frame
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, game: &Game, frame: &mut [u8]) {
        let mut canvas = Canvas::new(frame, game.board());
        let now = (game.generation(), game.ticks());

        let incremental = matches!(self.drawn, Some((generation, ticks))
            if generation == now.0 && now.1 <= ticks + 1);
        if incremental {
            if let Some(cell) = game.vacated() {
                canvas.fill_cell(cell, BACKGROUND);
            }
        } else {
            canvas.clear(BACKGROUND);
        }

        game.snake().draw(&mut canvas);
        game.food().draw(&mut canvas);
        self.drawn = Some(now);
    }
}
