use crate::config::Settings;
use crate::food::Food;
use crate::grid::{Board, Cell};
use crate::input::Command;
use crate::snake::Snake;
use crate::timing::TickRate;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// What a single tick did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Moved,
    Ate,
    /// The snake ran into itself at `length` segments and started over.
    Reset { length: usize },
}

pub struct Game {
    board: Board,
    snake: Snake,
    food: Food,
    rate: TickRate,
    rng: SmallRng,
    vacated: Option<Cell>,
    generation: u64,
    ticks: u64,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings.board(), settings.tick_rate(), SmallRng::from_entropy())
    }

    pub fn with_seed(board: Board, rate: TickRate, seed: u64) -> Self {
        Self::with_rng(board, rate, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, rate: TickRate, mut rng: SmallRng) -> Self {
        let snake = Snake::new(board, &mut rng);
        let food = Food::spawn(board, &snake.occupied(), &mut rng);
        Self { board, snake, food, rate, rng, vacated: None, generation: 0, ticks: 0 }
    }

    /// Starts from an explicit snake and food, for scripted positions.
    pub fn with_parts(board: Board, rate: TickRate, snake: Snake, food: Food, seed: u64) -> Self {
        Self { board, snake, food, rate, rng: SmallRng::seed_from_u64(seed), vacated: None, generation: 0, ticks: 0 }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn tick_rate(&self) -> TickRate {
        self.rate
    }

    /// Cell freed by the last move, if the tail moved.
    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    /// Bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one fixed step: queued commands in arrival order, then the buffered
    /// turn, the move, eating, and the self-collision reset.
    pub fn tick(&mut self, commands: impl IntoIterator<Item = Command>) -> Tick {
        for cmd in commands {
            self.apply(cmd);
        }

        self.ticks += 1;
        self.snake.apply_pending_direction();
        self.vacated = self.snake.advance();

        let mut outcome = Tick::Moved;
        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food.relocate(self.board, &self.snake.occupied(), &mut self.rng);
            debug!("ate food, target length now {}", self.snake.target_len());
            outcome = Tick::Ate;
        }

        if self.snake.has_self_collision() {
            let length = self.snake.len();
            self.snake.reset(&mut self.rng);
            self.food.relocate(self.board, &self.snake.occupied(), &mut self.rng);
            self.vacated = None;
            self.generation += 1;
            info!("snake hit itself at length {}, starting over", length);
            outcome = Tick::Reset { length };
        }

        outcome
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) => self.snake.set_direction(dir),
            Command::SpeedUp => self.set_rate(self.rate.faster()),
            Command::SpeedDown => self.set_rate(self.rate.slower()),
            // handled by the window loop before it reaches the queue
            Command::Quit => {}
        }
    }

    fn set_rate(&mut self, rate: TickRate) {
        if rate != self.rate {
            info!("speed {} -> {} ticks/s", self.rate.per_second(), rate.per_second());
            self.rate = rate;
        }
    }
}
