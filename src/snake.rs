use crate::grid::{Board, Cell, Direction};
use ahash::AHashSet;
use rand::Rng;
use std::collections::VecDeque;

pub struct Snake {
    board: Board,
    segments: VecDeque<Cell>, // head at the front
    dir: Direction,
    pending: Option<Direction>,
    target_len: usize,
}

impl Snake {
    /// A one-segment snake at the board centre heading in a random direction.
    pub fn new<R: Rng>(board: Board, rng: &mut R) -> Self {
        let mut snake = Self {
            board,
            segments: VecDeque::new(),
            dir: Direction::Right,
            pending: None,
            target_len: 1,
        };
        snake.reset(rng);
        snake
    }

    /// Builds a snake from explicit cells, head first. The target length is the
    /// number of cells given; an empty list yields a single centre segment.
    pub fn from_segments(board: Board, cells: impl IntoIterator<Item = Cell>, dir: Direction) -> Self {
        let mut segments: VecDeque<Cell> = cells.into_iter().map(|c| board.wrap(c)).collect();
        if segments.is_empty() {
            segments.push_back(board.center());
        }
        Self { board, target_len: segments.len(), segments, dir, pending: None }
    }

    pub fn head(&self) -> Cell {
        // never empty: every constructor and `advance` keep at least one cell
        self.segments.front().copied().unwrap_or_else(|| self.board.center())
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    pub fn occupied(&self) -> AHashSet<Cell> {
        self.segments.iter().copied().collect()
    }

    /// Buffers a turn for the next tick. Reversing onto the body is ignored;
    /// a later valid request overwrites an earlier one.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested == self.dir.opposite() {
            return;
        }
        self.pending = Some(requested);
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.pending.take() {
            self.dir = dir;
        }
    }

    /// Moves one cell forward, wrapping at the edges. The tail is kept while the
    /// snake is shorter than its target length; otherwise the dropped tail cell
    /// is returned.
    pub fn advance(&mut self) -> Option<Cell> {
        let new_head = self.board.step(self.head(), self.dir);
        self.segments.push_front(new_head);
        if self.segments.len() > self.target_len {
            self.segments.pop_back()
        } else {
            None
        }
    }

    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// True when any two segments share a cell, whatever their distance along the body.
    pub fn has_self_collision(&self) -> bool {
        let mut seen = AHashSet::with_capacity(self.segments.len());
        !self.segments.iter().all(|&cell| seen.insert(cell))
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.segments.clear();
        self.segments.push_back(self.board.center());
        self.target_len = 1;
        self.dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn board() -> Board {
        Board::new(32, 24, 20)
    }

    fn snake_at(head: Cell, dir: Direction) -> Snake {
        Snake::from_segments(board(), [head], dir)
    }

    #[test]
    fn new_snake_starts_at_center() {
        let mut rng = SmallRng::seed_from_u64(7);
        let s = Snake::new(board(), &mut rng);
        assert_eq!(s.segments().len(), 1);
        assert_eq!(s.head(), Cell::new(16, 12));
        assert_eq!(s.target_len(), 1);
        assert_eq!(s.pending_direction(), None);
    }

    #[test]
    fn advance_moves_head() {
        let mut s = snake_at(Cell::new(10, 10), Direction::Right);
        let vacated = s.advance();
        assert_eq!(s.segments().iter().copied().collect::<Vec<_>>(), vec![Cell::new(11, 10)]);
        assert_eq!(vacated, Some(Cell::new(10, 10)));
    }

    #[test]
    fn grow_then_advance_twice() {
        let mut s = snake_at(Cell::new(10, 10), Direction::Right);
        s.grow();
        assert_eq!(s.advance(), None);
        assert_eq!(s.advance(), Some(Cell::new(10, 10)));
        assert_eq!(s.len(), 2);
        assert_eq!(s.head(), Cell::new(12, 10));
    }

    #[test]
    fn grow_across_the_edge_wraps() {
        let mut s = snake_at(Cell::new(31, 5), Direction::Right);
        s.grow();
        s.advance();
        s.advance();
        assert_eq!(s.len(), 2);
        assert_eq!(s.head(), Cell::new(1, 5));
        assert_eq!(s.segments()[1], Cell::new(0, 5));
    }

    #[test]
    fn growth_law() {
        let mut s = snake_at(Cell::new(3, 3), Direction::Down);
        let before = s.len();
        s.grow();
        s.advance();
        assert_eq!(s.len(), before + 1);
        for _ in 0..10 {
            s.advance();
            assert_eq!(s.len(), before + 1);
        }
    }

    #[test]
    fn advance_stays_on_board() {
        let b = board();
        for dir in Direction::ALL {
            for head in [Cell::new(0, 0), Cell::new(31, 23), Cell::new(0, 23), Cell::new(31, 0)] {
                let mut s = Snake::from_segments(b, [head], dir);
                s.advance();
                assert!(b.contains(s.head()), "{dir:?} from {head:?}");
            }
        }
    }

    #[test]
    fn reversal_is_ignored() {
        for dir in Direction::ALL {
            let mut s = snake_at(Cell::new(5, 5), dir);
            s.set_direction(dir.opposite());
            assert_eq!(s.pending_direction(), None);
        }
    }

    #[test]
    fn non_reversal_is_buffered() {
        for dir in Direction::ALL {
            for requested in Direction::ALL.into_iter().filter(|d| *d != dir.opposite()) {
                let mut s = snake_at(Cell::new(5, 5), dir);
                s.set_direction(requested);
                assert_eq!(s.pending_direction(), Some(requested));
            }
        }
    }

    #[test]
    fn reversal_keeps_earlier_pending() {
        let mut s = snake_at(Cell::new(5, 5), Direction::Right);
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Left);
        assert_eq!(s.pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn last_valid_request_wins() {
        let mut s = snake_at(Cell::new(5, 5), Direction::Right);
        s.set_direction(Direction::Up);
        s.set_direction(Direction::Down);
        s.apply_pending_direction();
        assert_eq!(s.direction(), Direction::Down);
        assert_eq!(s.pending_direction(), None);
    }

    #[test]
    fn apply_without_pending_keeps_direction() {
        let mut s = snake_at(Cell::new(5, 5), Direction::Left);
        s.apply_pending_direction();
        assert_eq!(s.direction(), Direction::Left);
    }

    #[test]
    fn duplicate_neighbour_collides() {
        let s = Snake::from_segments(board(), [Cell::new(5, 5), Cell::new(5, 5)], Direction::Up);
        assert!(s.has_self_collision());
    }

    #[test]
    fn short_distinct_bodies_do_not_collide() {
        let cells = [Cell::new(5, 5), Cell::new(4, 5), Cell::new(4, 6), Cell::new(5, 6)];
        for n in 1..=cells.len() {
            let s = Snake::from_segments(board(), cells[..n].iter().copied(), Direction::Right);
            assert!(!s.has_self_collision(), "length {n}");
        }
    }

    #[test]
    fn short_loop_collides() {
        // head turned back into the segment right behind the neck
        let cells = [Cell::new(5, 5), Cell::new(5, 6), Cell::new(4, 6), Cell::new(4, 5), Cell::new(5, 5)];
        let s = Snake::from_segments(board(), cells, Direction::Up);
        assert!(s.has_self_collision());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut s = Snake::from_segments(
            board(),
            [Cell::new(2, 2), Cell::new(3, 2), Cell::new(3, 3), Cell::new(2, 3), Cell::new(2, 2)],
            Direction::Up,
        );
        s.set_direction(Direction::Left);
        assert!(s.has_self_collision());
        s.reset(&mut rng);
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), board().center());
        assert_eq!(s.target_len(), 1);
        assert_eq!(s.pending_direction(), None);
        assert!(!s.has_self_collision());
    }

    #[test]
    fn reset_picks_every_direction_eventually() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut s = Snake::new(board(), &mut rng);
        let mut seen = AHashSet::new();
        for _ in 0..200 {
            s.reset(&mut rng);
            seen.insert(s.direction());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn target_len_only_drops_on_reset() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut s = Snake::new(board(), &mut rng);
        let mut last = s.target_len();
        for i in 0..50 {
            if i % 3 == 0 {
                s.grow();
            }
            s.advance();
            assert!(s.target_len() >= last);
            assert!(s.len() <= s.target_len());
            last = s.target_len();
        }
        s.reset(&mut rng);
        assert_eq!(s.target_len(), 1);
    }
}
