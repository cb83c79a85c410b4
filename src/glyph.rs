//! The closed set of characters a board may contain.

use crate::snake::SnakeDirection;

pub const EMPTY_CHAR: char = ' ';
pub const WALL_CHAR: char = '#';
pub const FOOD_CHAR: char = '*';
pub const DEAD_CHAR: char = 'x';

/// Body glyph for each direction of travel.
const BODY_GLYPHS: [(char, SnakeDirection); 4] = [
    ('^', SnakeDirection::Up),
    ('<', SnakeDirection::Left),
    ('v', SnakeDirection::Down),
    ('>', SnakeDirection::Right),
];

/// Tail glyph for each direction of travel.
const TAIL_GLYPHS: [(char, SnakeDirection); 4] = [
    ('w', SnakeDirection::Up),
    ('a', SnakeDirection::Left),
    ('s', SnakeDirection::Down),
    ('d', SnakeDirection::Right),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphCategory {
    Empty,
    Wall,
    Food,
    SnakeBody,
    SnakeTail,
    DeadMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Empty,
    Wall,
    Food,
    Body(SnakeDirection),
    Tail(SnakeDirection),
    /// Head of a snake that collided; never moves again.
    Dead,
}

impl Glyph {
    pub fn from_char(ch: char) -> Option<Glyph> {
        match ch {
            EMPTY_CHAR => Some(Glyph::Empty),
            WALL_CHAR => Some(Glyph::Wall),
            FOOD_CHAR => Some(Glyph::Food),
            DEAD_CHAR => Some(Glyph::Dead),
            _ => lookup_direction(&BODY_GLYPHS, ch)
                .map(Glyph::Body)
                .or_else(|| lookup_direction(&TAIL_GLYPHS, ch).map(Glyph::Tail)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Glyph::Empty => EMPTY_CHAR,
            Glyph::Wall => WALL_CHAR,
            Glyph::Food => FOOD_CHAR,
            Glyph::Dead => DEAD_CHAR,
            Glyph::Body(direction) => lookup_char(&BODY_GLYPHS, direction),
            Glyph::Tail(direction) => lookup_char(&TAIL_GLYPHS, direction),
        }
    }

    pub fn category(self) -> GlyphCategory {
        match self {
            Glyph::Empty => GlyphCategory::Empty,
            Glyph::Wall => GlyphCategory::Wall,
            Glyph::Food => GlyphCategory::Food,
            Glyph::Body(_) => GlyphCategory::SnakeBody,
            Glyph::Tail(_) => GlyphCategory::SnakeTail,
            Glyph::Dead => GlyphCategory::DeadMarker,
        }
    }

    /// Orientation of a snake segment; `None` for terrain and dead markers.
    pub fn direction(self) -> Option<SnakeDirection> {
        match self {
            Glyph::Body(direction) | Glyph::Tail(direction) => Some(direction),
            _ => None,
        }
    }

    /// Unit step encoded by the glyph, `(0, 0)` when it has no orientation.
    pub fn delta(self) -> (i32, i32) {
        self.direction().map_or((0, 0), SnakeDirection::delta)
    }

    pub fn is_snake(self) -> bool {
        matches!(self, Glyph::Body(_) | Glyph::Tail(_) | Glyph::Dead)
    }

    pub fn is_tail(self) -> bool {
        matches!(self, Glyph::Tail(_))
    }

    /// The glyph a segment becomes once the old tail in front of it is cleared.
    /// A tail stays a tail (one-cell snakes); anything else has no conversion.
    pub fn body_to_tail(self) -> Option<Glyph> {
        match self {
            Glyph::Body(direction) | Glyph::Tail(direction) => Some(Glyph::Tail(direction)),
            _ => None,
        }
    }

    /// Same segment, turned to face `direction`.
    pub fn facing(self, direction: SnakeDirection) -> Option<Glyph> {
        match self {
            Glyph::Body(_) => Some(Glyph::Body(direction)),
            Glyph::Tail(_) => Some(Glyph::Tail(direction)),
            _ => None,
        }
    }
}

fn lookup_direction(table: &[(char, SnakeDirection); 4], ch: char) -> Option<SnakeDirection> {
    table
        .iter()
        .find(|(glyph, _)| *glyph == ch)
        .map(|(_, direction)| *direction)
}

fn lookup_char(table: &[(char, SnakeDirection); 4], direction: SnakeDirection) -> char {
    table
        .iter()
        .find(|(_, candidate)| *candidate == direction)
        .map_or(EMPTY_CHAR, |(glyph, _)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = " #*^<v>wasdx";

    #[test]
    fn test_alphabet_is_closed() {
        for ch in ALPHABET.chars() {
            let glyph = Glyph::from_char(ch).unwrap();
            assert_eq!(glyph.to_char(), ch);
        }
        for ch in ['o', 'W', 'X', '.', '\t', '\n'] {
            assert_eq!(Glyph::from_char(ch), None);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(Glyph::from_char('#').unwrap().category(), GlyphCategory::Wall);
        assert_eq!(Glyph::from_char('*').unwrap().category(), GlyphCategory::Food);
        assert_eq!(Glyph::from_char('>').unwrap().category(), GlyphCategory::SnakeBody);
        assert_eq!(Glyph::from_char('s').unwrap().category(), GlyphCategory::SnakeTail);
        assert_eq!(Glyph::from_char('x').unwrap().category(), GlyphCategory::DeadMarker);
        assert!(Glyph::Dead.is_snake());
        assert!(!Glyph::Food.is_snake());
        assert!(Glyph::Tail(SnakeDirection::Up).is_tail());
        assert!(!Glyph::Body(SnakeDirection::Up).is_tail());
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Glyph::from_char('^').unwrap().delta(), (0, -1));
        assert_eq!(Glyph::from_char('a').unwrap().delta(), (-1, 0));
        assert_eq!(Glyph::from_char('v').unwrap().delta(), (0, 1));
        assert_eq!(Glyph::from_char('d').unwrap().delta(), (1, 0));
        assert_eq!(Glyph::Dead.delta(), (0, 0));
        assert_eq!(Glyph::Food.delta(), (0, 0));
    }

    #[test]
    fn test_body_to_tail() {
        for (body, tail) in [('^', 'w'), ('<', 'a'), ('v', 's'), ('>', 'd')] {
            let converted = Glyph::from_char(body).unwrap().body_to_tail().unwrap();
            assert_eq!(converted.to_char(), tail);
        }
        assert_eq!(Glyph::Dead.body_to_tail(), None);
        assert_eq!(Glyph::Empty.body_to_tail(), None);
    }
}
