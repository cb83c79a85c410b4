// a snake's body is never stored here: it is the chain of oriented glyphs
// on the board, walked from the tail towards the head
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SnakeDirection {
    pub const ALL: [SnakeDirection; 4] = [
        SnakeDirection::Up,
        SnakeDirection::Left,
        SnakeDirection::Down,
        SnakeDirection::Right,
    ];

    /// Unit step `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            SnakeDirection::Up => (0, -1),
            SnakeDirection::Down => (0, 1),
            SnakeDirection::Left => (-1, 0),
            SnakeDirection::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> SnakeDirection {
        match self {
            SnakeDirection::Up => SnakeDirection::Down,
            SnakeDirection::Down => SnakeDirection::Up,
            SnakeDirection::Left => SnakeDirection::Right,
            SnakeDirection::Right => SnakeDirection::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, SnakeDirection::Left | SnakeDirection::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, SnakeDirection::Up | SnakeDirection::Down)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    x: i32,
    y: i32,
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Coordinates {
        Coordinates { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Coordinates {
        Coordinates::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn get_towards(&self, direction: SnakeDirection) -> Coordinates {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Where a snake starts and ends on the board, and whether it still moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    head: Coordinates,
    tail: Coordinates,
    alive: bool,
}

impl Snake {
    pub fn new(head: Coordinates, tail: Coordinates) -> Self {
        Snake {
            head,
            tail,
            alive: true,
        }
    }

    pub(crate) fn with_liveness(head: Coordinates, tail: Coordinates, alive: bool) -> Self {
        Snake { head, tail, alive }
    }

    pub fn head(&self) -> Coordinates {
        self.head
    }

    pub fn tail(&self) -> Coordinates {
        self.tail
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn move_head(&mut self, head: Coordinates) {
        self.head = head;
    }

    pub(crate) fn move_tail(&mut self, tail: Coordinates) {
        self.tail = tail;
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
