//! Rebuilds snake descriptors from a bare board by following glyph chains
//! from each tail towards its head.
//!
//! A head may face another segment (its own body, another snake, a dead
//! marker). Cells are therefore claimed by the first chain that reaches them,
//! in row-major order of the tails, and a chain never continues into a tail
//! or into a cell that is already claimed.
//!
//! A one-cell snake that died leaves a lone dead marker and no tail glyph.
//! Any dead marker no chain reaches is such a snake.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{Result, SnakeError};
use crate::glyph::Glyph;
use crate::snake::{Coordinates, Snake};

/// One snake as found on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub tail: Coordinates,
    pub head: Coordinates,
    /// Cells occupied, tail and head included.
    pub length: usize,
}

/// Follows the chain starting at the tail glyph found at `tail`.
pub fn walk_chain(board: &Board, tail: Coordinates) -> Result<Chain> {
    walk(board, tail, &mut HashSet::new(), None)
}

/// Cells between `tail` and `head`, both included.
pub fn chain_length(board: &Board, tail: Coordinates, head: Coordinates) -> Result<usize> {
    let chain = walk(board, tail, &mut HashSet::new(), Some(head))?;
    if chain.head != head {
        return Err(SnakeError::corrupt(
            tail,
            format!("chain ends at {} instead of {head}", chain.head),
        ));
    }
    Ok(chain.length)
}

fn walk(
    board: &Board,
    tail: Coordinates,
    claimed: &mut HashSet<Coordinates>,
    stop_at: Option<Coordinates>,
) -> Result<Chain> {
    match board.get(&tail) {
        Some(glyph) if glyph.is_tail() => {}
        // a dead one-cell snake
        Some(Glyph::Dead) if stop_at == Some(tail) => {}
        _ => return Err(SnakeError::corrupt(tail, "no tail glyph here")),
    }
    // claimed cells are never entered again, so the walk ends within
    // width*height steps
    let mut current = tail;
    let mut length = 1;
    claimed.insert(tail);
    while stop_at != Some(current) {
        let Some(direction) = board.get(&current).and_then(Glyph::direction) else {
            break;
        };
        let next = current.get_towards(direction);
        let continues = matches!(board.get(&next), Some(Glyph::Body(_) | Glyph::Dead))
            && !claimed.contains(&next);
        if !continues {
            break;
        }
        claimed.insert(next);
        current = next;
        length += 1;
    }
    Ok(Chain {
        tail,
        head: current,
        length,
    })
}

/// Finds every snake on the board, indexed in row-major order of their tails.
///
/// A snake whose head is a dead marker comes back dead, and so does a dead
/// marker no chain reaches (a one-cell snake). Body segments that no chain
/// reaches make the board corrupt.
pub fn recover_snakes(board: &Board) -> Result<Vec<Snake>> {
    let mut snakes = Vec::new();
    let mut claimed = HashSet::new();
    for (position, glyph) in board.cells() {
        if !glyph.is_tail() {
            continue;
        }
        let chain = walk(board, position, &mut claimed, None)?;
        let alive = board.get(&chain.head) != Some(Glyph::Dead);
        debug!(
            index = snakes.len(),
            tail = %chain.tail,
            head = %chain.head,
            length = chain.length,
            alive,
            "Recovered snake"
        );
        snakes.push(Snake::with_liveness(chain.head, chain.tail, alive));
    }
    let lone_dead: Vec<_> = board
        .cells()
        .filter(|(position, glyph)| *glyph == Glyph::Dead && !claimed.contains(position))
        .map(|(position, _)| position)
        .collect();
    for position in lone_dead {
        debug!(at = %position, "Recovered dead one-cell snake");
        claimed.insert(position);
        snakes.push(Snake::with_liveness(position, position, false));
    }
    snakes.sort_by_key(|snake| (snake.tail().y(), snake.tail().x()));
    let orphan = board
        .cells()
        .find(|(position, glyph)| matches!(glyph, Glyph::Body(_)) && !claimed.contains(position));
    if let Some((position, _)) = orphan {
        return Err(SnakeError::corrupt(
            position,
            "body segment is not reachable from any tail",
        ));
    }
    info!(count = snakes.len(), "Recovered snakes from board");
    Ok(snakes)
}
