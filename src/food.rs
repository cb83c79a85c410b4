//! Food placement. The engine only decides *when* food is needed; where it
//! goes is up to the placer handed to `GameState::tick`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::config::RANDOM_FOOD_ATTEMPTS;
use crate::glyph::Glyph;
use crate::snake::Coordinates;

/// Puts new food on the board after a snake has eaten.
///
/// Implementors may only turn empty cells into food. They must not touch
/// snake glyphs.
pub trait FoodPlacer {
    /// Returns how many food items were placed.
    fn add_food(&mut self, board: &mut Board) -> usize;
}

impl<F> FoodPlacer for F
where
    F: FnMut(&mut Board) -> usize,
{
    fn add_food(&mut self, board: &mut Board) -> usize {
        self(board)
    }
}

/// Never places anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFood;

impl FoodPlacer for NoFood {
    fn add_food(&mut self, _board: &mut Board) -> usize {
        0
    }
}

/// Always places food at the same cell, if it is empty.
#[derive(Debug, Clone, Copy)]
pub struct FixedFood(pub Coordinates);

impl FoodPlacer for FixedFood {
    fn add_food(&mut self, board: &mut Board) -> usize {
        place_if_empty(board, &self.0)
    }
}

/// Places food on a uniformly chosen empty cell.
#[derive(Debug, Clone)]
pub struct RandomFood {
    rng: StdRng,
}

impl RandomFood {
    pub fn new() -> Self {
        RandomFood {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomFood {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_empty_cell(&mut self, board: &Board) -> Option<Coordinates> {
        // guessing is cheap while the board is mostly free, collecting every
        // empty cell is needed once it fills up
        for _ in 0..RANDOM_FOOD_ATTEMPTS {
            let x = self.rng.random_range(0..board.width()) as i32;
            let y = self.rng.random_range(0..board.height()) as i32;
            let position = Coordinates::new(x, y);
            if board.get(&position) == Some(Glyph::Empty) {
                return Some(position);
            }
        }
        let empty_positions = board.empty_cells();
        if empty_positions.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..empty_positions.len());
        Some(empty_positions[index])
    }
}

impl Default for RandomFood {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodPlacer for RandomFood {
    fn add_food(&mut self, board: &mut Board) -> usize {
        match self.random_empty_cell(board) {
            Some(position) => place_if_empty(board, &position),
            None => 0,
        }
    }
}

fn place_if_empty(board: &mut Board, position: &Coordinates) -> usize {
    if board.get(position) == Some(Glyph::Empty) {
        board.set(position, Glyph::Food);
        1
    } else {
        0
    }
}
