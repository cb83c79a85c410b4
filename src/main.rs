use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gridsnake::config::{GameDifficulty, PlayConfig, DEFAULT_SAVE_EVERY};
use gridsnake::render::render_game;
use gridsnake::terminal::play;
use gridsnake::{GameState, RandomFood};

#[derive(Debug, Parser)]
#[command(name = "gridsnake", about = "Snake simulation on a character grid")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the default board to a file
    New { path: PathBuf },
    /// Print a board with its snakes
    Show { path: PathBuf },
    /// Advance a board without a terminal
    Step {
        path: PathBuf,
        #[arg(long, default_value_t = 1)]
        ticks: u64,
        /// Seed for food placement
        #[arg(long)]
        seed: Option<u64>,
        /// Where to write the result; printed when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Steer a snake with the arrow keys
    Play {
        /// Board to start from; the default board when omitted
        #[arg(long)]
        board: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = GameDifficulty::Medium)]
        difficulty: GameDifficulty,
        /// Index of the snake to steer
        #[arg(long, default_value_t = 0)]
        player: usize,
        #[arg(long)]
        save: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_SAVE_EVERY)]
        save_every: u64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::New { path } => {
            let game = GameState::new_default()?;
            game.save(&path)
                .with_context(|| format!("writing default board to {}", path.display()))?;
        }
        Command::Show { path } => {
            let game = GameState::load(&path)?;
            print!("{}", render_game(&game));
        }
        Command::Step {
            path,
            ticks,
            seed,
            out,
        } => {
            let mut game = GameState::load(&path)?;
            let mut food = food_placer(seed);
            for tick in 0..ticks {
                let summary = game.tick(&mut food);
                info!(
                    tick,
                    moved = summary.moved,
                    grew = summary.grew,
                    died = summary.died,
                    "Advanced board"
                );
                if game.is_over() {
                    break;
                }
            }
            match out {
                Some(out) => game.save(&out)?,
                None => print!("{}", game.to_text()),
            }
        }
        Command::Play {
            board,
            difficulty,
            player,
            save,
            save_every,
            seed,
        } => {
            let mut game = match board {
                Some(path) => GameState::load(&path)?,
                None => GameState::new_default()?,
            };
            let config = PlayConfig {
                difficulty,
                player,
                save_path: save,
                save_every,
            };
            let mut food = food_placer(seed);
            play(&mut game, &config, &mut food)?;
        }
    }
    Ok(())
}

fn food_placer(seed: Option<u64>) -> RandomFood {
    seed.map_or_else(RandomFood::new, RandomFood::seeded)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
