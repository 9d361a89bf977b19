use std::ops::Add;

/// A grid cell, addressed by (column, row). Not pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Toroidal board of `width` x `height` cells, each `cell_size` pixels square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: u32,
}

impl Board {
    /// Callers guarantee non-zero dimensions; `Settings::board` validates them.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self { width: width as i32, height: height as i32, cell_size }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Framebuffer size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width as u32 * self.cell_size, self.height as u32 * self.cell_size)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Folds any cell back onto the torus.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// The neighbour of `cell` one step towards `dir`, wrapped.
    pub fn step(&self, cell: Cell, dir: Direction) -> Cell {
        self.wrap(cell + dir)
    }

    /// Top-left pixel of a cell.
    pub fn to_pixel(&self, cell: Cell) -> (u32, u32) {
        let cell = self.wrap(cell);
        (cell.x as u32 * self.cell_size, cell.y as u32 * self.cell_size)
    }

    /// The cell covering a pixel, or `None` outside the board.
    pub fn to_cell(&self, px: u32, py: u32) -> Option<Cell> {
        let (w, h) = self.pixel_size();
        if px >= w || py >= h {
            return None;
        }
        Some(Cell::new((px / self.cell_size) as i32, (py / self.cell_size) as i32))
    }
}
