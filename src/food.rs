use crate::grid::{Board, Cell};
use ahash::AHashSet;
use log::{debug, warn};
use rand::Rng;

pub struct Food {
    position: Cell,
}

impl Food {
    /// Places a new food item on a free cell. On a completely full board it
    /// falls back to the centre and waits for the next relocation.
    pub fn spawn<R: Rng>(board: Board, occupied: &AHashSet<Cell>, rng: &mut R) -> Self {
        let mut food = Self { position: board.center() };
        food.relocate(board, occupied, rng);
        food
    }

    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Rejection-samples the board until it hits a cell outside `occupied`.
    /// Returns false, leaving the food where it was, when no cell is free.
    pub fn relocate<R: Rng>(&mut self, board: Board, occupied: &AHashSet<Cell>, rng: &mut R) -> bool {
        if occupied.len() >= board.area() {
            warn!("no free cell left for food, keeping it at {:?}", self.position);
            return false;
        }
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let cell = Cell::new(rng.gen_range(0..board.width()), rng.gen_range(0..board.height()));
            if !occupied.contains(&cell) {
                debug!("food placed at {:?} after {} attempt(s)", cell, attempts);
                self.position = cell;
                return true;
            }
        }
    }
}
