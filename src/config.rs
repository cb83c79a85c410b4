//! Game configuration constants

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::snake::Coordinates;

/// Default board width, walls included
pub const DEFAULT_WIDTH: usize = 14;

/// Default board height, walls included
pub const DEFAULT_HEIGHT: usize = 10;

pub const DEFAULT_SNAKE_TAIL: Coordinates = Coordinates::new(4, 4);
pub const DEFAULT_SNAKE_HEAD: Coordinates = Coordinates::new(5, 4);
pub const DEFAULT_FOOD: Coordinates = Coordinates::new(9, 2);

/// Random cells tried before falling back to a scan of every empty cell
pub const RANDOM_FOOD_ATTEMPTS: usize = 64;

/// Bytes kept from the keyboard between two ticks
pub const INPUT_BUFFER_SIZE: usize = 1024;

/// Sleep between two polls of the keyboard channel
pub const FRAME_POLL: Duration = Duration::from_millis(3);

/// Ticks between two snapshots while playing
pub const DEFAULT_SAVE_EVERY: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
    Impossible,
}

impl GameDifficulty {
    /// Time between two ticks.
    pub fn get_speed(&self) -> Duration {
        let millis = match self {
            GameDifficulty::Easy => 500,       // 2 fps
            GameDifficulty::Medium => 250,     // 4 fps
            GameDifficulty::Hard => 166,       // 6 fps
            GameDifficulty::Extreme => 125,    // 8 fps
            GameDifficulty::Impossible => 100, // 10 fps
        };
        Duration::from_millis(millis)
    }
}

/// Settings of an interactive session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub difficulty: GameDifficulty,
    /// Index of the snake steered with the arrow keys.
    pub player: usize,
    pub save_path: Option<PathBuf>,
    /// Snapshot period in ticks; 0 disables periodic saves.
    pub save_every: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            difficulty: GameDifficulty::default(),
            player: 0,
            save_path: None,
            save_every: DEFAULT_SAVE_EVERY,
        }
    }
}
