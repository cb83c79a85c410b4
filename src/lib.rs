//! Snake simulation on a character grid.
//!
//! Snakes have no segment list: each one is a chain of oriented glyphs on
//! the board, from its tail (`w a s d`) through its body (`^ < v >`) to the
//! head. A saved board is just its rows of glyphs, and loading one recovers
//! the snakes by walking those chains.

pub mod board;
pub mod codec;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod glyph;
pub mod render;
pub mod snake;
pub mod terminal;
pub mod topology;

pub use board::Board;
pub use error::{Result, SnakeError};
pub use food::{FixedFood, FoodPlacer, NoFood, RandomFood};
pub use game::{GameState, TickSummary};
pub use glyph::{Glyph, GlyphCategory};
pub use snake::{Coordinates, Snake, SnakeDirection};
