use std::collections::HashSet;

use colored::{ColoredString, Colorize};

use crate::game::GameState;
use crate::glyph::{Glyph, GlyphCategory};
use crate::snake::Coordinates;

pub fn clear_screen() {
    print!("{}[2J", 27 as char);
    print!("{}[1;1H", 27 as char);
}

/// The board as coloured text, one line per row.
pub fn render_game(game: &GameState) -> String {
    let heads: HashSet<Coordinates> = game
        .snakes()
        .iter()
        .filter(|snake| snake.is_alive())
        .map(|snake| snake.head())
        .collect();
    let mut out = String::new();
    for (position, glyph) in game.board().cells() {
        if position.x() == 0 && position.y() > 0 {
            out.push('\n');
        }
        out.push_str(&paint(glyph, heads.contains(&position)).to_string());
    }
    out.push('\n');
    out
}

fn paint(glyph: Glyph, is_live_head: bool) -> ColoredString {
    let text = glyph.to_char().to_string();
    if is_live_head {
        return text.yellow().bold();
    }
    match glyph.category() {
        GlyphCategory::Empty => text.normal(),
        GlyphCategory::Wall => text.dimmed(),
        GlyphCategory::Food => text.red(),
        GlyphCategory::SnakeBody | GlyphCategory::SnakeTail => text.green(),
        GlyphCategory::DeadMarker => text.red().bold(),
    }
}

pub fn display_board(game: &GameState, ticks: u64) {
    print!("{}", render_game(game));
    println!("Tick: {}  Live snakes: {}/{}", ticks, game.live_snakes(), game.snakes().len());
}

pub fn display_final_screen(game: &GameState, ticks: u64) {
    println!("Game Over!");
    println!("Survived {} ticks", ticks);
    for (index, snake) in game.snakes().iter().enumerate() {
        let length = game
            .snake_length(index)
            .map_or_else(|_| "?".to_string(), |length| length.to_string());
        println!("Snake {}: length {}, head at {}", index, length, snake.head());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_layout() {
        colored::control::set_override(false);
        let game = GameState::new_default().unwrap();
        assert_eq!(render_game(&game), game.to_text());
    }
}
