// keyboard handling for the interactive game: stdin is put in raw mode and
// read byte by byte on its own thread, only arrow key bytes are buffered,
// and each tick consumes them until one gives a usable turn
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::{bail, Result};
use circular_buffer::CircularBuffer;
use termios::{tcsetattr, Termios, ECHO, ICANON, TCSANOW};
use tracing::{info, warn};

use crate::config::{PlayConfig, FRAME_POLL, INPUT_BUFFER_SIZE};
use crate::food::FoodPlacer;
use crate::game::GameState;
use crate::render::{clear_screen, display_board, display_final_screen};
use crate::snake::SnakeDirection;

type InputBuffer = CircularBuffer<INPUT_BUFFER_SIZE, u8>;

const STDIN_FD: i32 = 0;
const ESCAPE: u8 = 27;
const BRACKET: u8 = 91;

/// Keeps stdin unbuffered and silent while alive.
pub struct RawTerminal {
    old_termios: Termios,
}

impl RawTerminal {
    pub fn enable() -> io::Result<Self> {
        let old_termios = Termios::from_fd(STDIN_FD)?;
        let mut new_termios = old_termios;
        new_termios.c_lflag &= !(ICANON | ECHO); // no echo and canonical mode for stdin
        tcsetattr(STDIN_FD, TCSANOW, &new_termios)?;
        Ok(RawTerminal { old_termios })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(error) = tcsetattr(STDIN_FD, TCSANOW, &self.old_termios) {
            warn!(%error, "Failed to restore terminal settings");
        }
    }
}

fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut reader = io::stdin();
        let mut buffer = [0u8; 1];
        while reader.read_exact(&mut buffer).is_ok() {
            if tx.send(buffer[0]).is_err() {
                break;
            }
        }
    });
    rx
}

/// Arrow keys arrive as `ESC [ A..D`.
#[derive(Debug)]
pub struct ArrowKeys {
    buffer: InputBuffer,
}

impl ArrowKeys {
    pub fn new() -> Self {
        ArrowKeys {
            buffer: InputBuffer::new(),
        }
    }

    pub fn push(&mut self, key: u8) {
        // anything that cannot be part of an arrow sequence is dropped
        if matches!(key, ESCAPE | BRACKET | b'A'..=b'D') && !self.buffer.is_full() {
            self.buffer.push_back(key);
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Pops bytes until an arrow that `accept` takes, and returns it.
    pub fn next_direction(
        &mut self,
        mut accept: impl FnMut(SnakeDirection) -> bool,
    ) -> Option<SnakeDirection> {
        while self.buffer.len() >= 3 {
            let direction = match (
                self.buffer.nth_front(0).copied(),
                self.buffer.nth_front(1).copied(),
                self.buffer.nth_front(2).copied(),
            ) {
                (Some(ESCAPE), Some(BRACKET), Some(key)) => arrow_direction(key),
                _ => None,
            };
            self.buffer.pop_front();
            if let Some(direction) = direction {
                if accept(direction) {
                    return Some(direction);
                }
            }
        }
        None
    }
}

impl Default for ArrowKeys {
    fn default() -> Self {
        Self::new()
    }
}

fn arrow_direction(key: u8) -> Option<SnakeDirection> {
    match key {
        b'A' => Some(SnakeDirection::Up),
        b'B' => Some(SnakeDirection::Down),
        b'C' => Some(SnakeDirection::Right),
        b'D' => Some(SnakeDirection::Left),
        _ => None,
    }
}

/// Runs the game in the terminal until every snake is dead.
pub fn play(game: &mut GameState, config: &PlayConfig, food: &mut impl FoodPlacer) -> Result<()> {
    if let Err(error) = game.snake(config.player) {
        bail!("cannot steer snake {}: {}", config.player, error);
    }
    let raw = RawTerminal::enable()?;
    let stdin_channel = spawn_stdin_channel();
    let mut keys = ArrowKeys::new();
    let mut ticks: u64 = 0;
    let mut frame_start_time = Instant::now();
    clear_screen();
    display_board(game, ticks);
    while !game.is_over() {
        match stdin_channel.try_recv() {
            Ok(key) => keys.push(key),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => bail!("keyboard channel disconnected"),
        }
        if frame_start_time.elapsed() < config.difficulty.get_speed() {
            thread::sleep(FRAME_POLL);
            continue;
        }
        frame_start_time = Instant::now();

        // steer before moving; turns the snake cannot take are skipped
        let player = config.player;
        if game.snake(player).is_ok_and(|snake| snake.is_alive()) {
            keys.next_direction(|direction| matches!(game.steer(player, direction), Ok(true)));
        }
        game.tick(food);
        ticks += 1;

        if let Some(path) = &config.save_path {
            if config.save_every > 0 && ticks % config.save_every == 0 {
                game.save(path)?;
            }
        }
        clear_screen();
        display_board(game, ticks);
    }
    drop(raw);
    if let Some(path) = &config.save_path {
        game.save(path)?;
    }
    info!(ticks, "Game finished");
    display_final_screen(game, ticks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keys: &mut ArrowKeys, bytes: &[u8]) {
        for byte in bytes {
            keys.push(*byte);
        }
    }

    #[test]
    fn test_only_arrow_bytes_are_kept() {
        let mut keys = ArrowKeys::new();
        press(&mut keys, b"hello\x1b[Aq");
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.next_direction(|_| true), Some(SnakeDirection::Up));
    }

    #[test]
    fn test_rejected_turns_are_skipped() {
        let mut keys = ArrowKeys::new();
        press(&mut keys, b"\x1b[D\x1b[B");
        let direction = keys.next_direction(|direction| direction.is_vertical());
        assert_eq!(direction, Some(SnakeDirection::Down));
    }

    #[test]
    fn test_incomplete_sequence_waits() {
        let mut keys = ArrowKeys::new();
        press(&mut keys, b"\x1b[");
        assert_eq!(keys.next_direction(|_| true), None);
        press(&mut keys, b"C");
        assert_eq!(keys.next_direction(|_| true), Some(SnakeDirection::Right));
    }

    #[test]
    fn test_all_arrows_decode() {
        let mut keys = ArrowKeys::new();
        press(&mut keys, b"\x1b[A\x1b[B\x1b[C\x1b[D");
        let mut seen = Vec::new();
        while let Some(direction) = keys.next_direction(|_| true) {
            seen.push(direction);
        }
        assert_eq!(
            seen,
            vec![
                SnakeDirection::Up,
                SnakeDirection::Down,
                SnakeDirection::Right,
                SnakeDirection::Left,
            ]
        );
    }
}
