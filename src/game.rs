// every snake lives on the board as a chain of oriented glyphs, the game
// only remembers where each chain starts and ends; a tick moves the head
// one cell along its glyph and, unless food was eaten, pulls the tail along
use std::path::Path;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::codec::{load_board, parse_board, render_board, save_board};
use crate::config::{
    DEFAULT_FOOD, DEFAULT_HEIGHT, DEFAULT_SNAKE_HEAD, DEFAULT_SNAKE_TAIL, DEFAULT_WIDTH,
};
use crate::error::{Result, SnakeError};
use crate::food::FoodPlacer;
use crate::glyph::Glyph;
use crate::snake::{Coordinates, Snake, SnakeDirection};
use crate::topology::{chain_length, recover_snakes};

/// What happened to the snakes during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub moved: usize,
    pub grew: usize,
    pub died: usize,
    pub food_placed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    snakes: Vec<Snake>,
}

impl GameState {
    /// The 14x10 walled board with one snake heading right and one food.
    pub fn new_default() -> Result<Self> {
        let mut board = Board::walled(DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
        board.set(&DEFAULT_FOOD, Glyph::Food);
        board.set(&DEFAULT_SNAKE_TAIL, Glyph::Tail(SnakeDirection::Right));
        board.set(&DEFAULT_SNAKE_HEAD, Glyph::Body(SnakeDirection::Right));
        let snakes = vec![Snake::new(DEFAULT_SNAKE_HEAD, DEFAULT_SNAKE_TAIL)];
        Ok(GameState { board, snakes })
    }

    /// Takes ownership of `board` and finds the snakes drawn on it.
    pub fn from_board(board: Board) -> Result<Self> {
        let snakes = recover_snakes(&board)?;
        Ok(GameState { board, snakes })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_board(parse_board(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_board(load_board(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_board(&self.board, path)
    }

    pub fn to_text(&self) -> String {
        render_board(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access for callers that edit terrain (walls, food). Snake
    /// glyphs must be left alone or the descriptors go stale.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn snake(&self, index: usize) -> Result<&Snake> {
        let count = self.snakes.len();
        self.snakes.get(index).ok_or_else(|| {
            warn!(index, count, "No snake with this index");
            SnakeError::InvalidSnakeIndex { index, count }
        })
    }

    /// Cells covered by snake `index`, tail and head included.
    pub fn snake_length(&self, index: usize) -> Result<usize> {
        let snake = self.snake(index)?;
        chain_length(&self.board, snake.tail(), snake.head())
    }

    pub fn live_snakes(&self) -> usize {
        self.snakes.iter().filter(|snake| snake.is_alive()).count()
    }

    /// No snake can move anymore.
    pub fn is_over(&self) -> bool {
        self.live_snakes() == 0
    }

    /// Advances every live snake by one cell, in index order.
    ///
    /// Each snake sees the board as left by the snakes before it, so a lower
    /// index wins any race for the same cell.
    pub fn tick(&mut self, food: &mut impl FoodPlacer) -> TickSummary {
        let mut summary = TickSummary::default();
        for index in 0..self.snakes.len() {
            if !self.snakes[index].is_alive() {
                continue;
            }
            match self.next_square(index) {
                Some(Glyph::Empty) => {
                    self.update_head(index);
                    self.update_tail(index);
                    summary.moved += 1;
                    debug!(index, head = %self.snakes[index].head(), "Snake moved");
                }
                Some(Glyph::Food) => {
                    self.update_head(index);
                    summary.grew += 1;
                    let placed = food.add_food(&mut self.board);
                    summary.food_placed += placed;
                    debug!(index, head = %self.snakes[index].head(), placed, "Snake ate");
                }
                // walls, any snake glyph and the board edge
                _ => {
                    self.kill(index);
                    summary.died += 1;
                }
            }
        }
        summary
    }

    /// Turns the head of snake `index` towards `direction`.
    ///
    /// Only quarter turns are applied; keeping or reversing the heading is
    /// ignored and returns `Ok(false)`.
    pub fn steer(&mut self, index: usize, direction: SnakeDirection) -> Result<bool> {
        let snake = *self.snake(index)?;
        if !snake.is_alive() {
            warn!(index, "Ignoring steer request for a dead snake");
            return Err(SnakeError::DeadSnake { index });
        }
        let head = snake.head();
        let Some(glyph) = self.board.get(&head) else {
            return Ok(false);
        };
        let Some(current) = glyph.direction() else {
            return Ok(false);
        };
        if current == direction || current == direction.opposite() {
            return Ok(false);
        }
        if let Some(turned) = glyph.facing(direction) {
            self.board.set(&head, turned);
        }
        Ok(true)
    }

    fn head_direction(&self, index: usize) -> (i32, i32) {
        self.board
            .get(&self.snakes[index].head())
            .map_or((0, 0), Glyph::delta)
    }

    fn next_position(&self, index: usize) -> Coordinates {
        let (dx, dy) = self.head_direction(index);
        self.snakes[index].head().offset(dx, dy)
    }

    /// Glyph in front of the head, `None` past the board edge.
    fn next_square(&self, index: usize) -> Option<Glyph> {
        self.board.get(&self.next_position(index))
    }

    fn update_head(&mut self, index: usize) {
        let head = self.snakes[index].head();
        let Some(direction) = self.board.get(&head).and_then(Glyph::direction) else {
            return;
        };
        let new_head = head.get_towards(direction);
        // a one-cell snake's head is its tail glyph: never copy it forward
        self.board.set(&new_head, Glyph::Body(direction));
        self.snakes[index].move_head(new_head);
    }

    fn update_tail(&mut self, index: usize) {
        let tail = self.snakes[index].tail();
        let Some(direction) = self.board.get(&tail).and_then(Glyph::direction) else {
            return;
        };
        self.board.set(&tail, Glyph::Empty);
        let new_tail = tail.get_towards(direction);
        match self.board.get(&new_tail).and_then(Glyph::body_to_tail) {
            Some(tail_glyph) => {
                self.board.set(&new_tail, tail_glyph);
            }
            None => warn!(index, tail = %new_tail, "No segment to turn into a tail"),
        }
        self.snakes[index].move_tail(new_tail);
    }

    fn kill(&mut self, index: usize) {
        let snake = &mut self.snakes[index];
        snake.kill();
        self.board.set(&snake.head(), Glyph::Dead);
        info!(index, head = %snake.head(), "Snake died");
    }
}
