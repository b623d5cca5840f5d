use super::direction::Direction;
use super::geometry::Cell;
use std::collections::VecDeque;

/// Snake state.
///
/// The body is ordered head-first and never empty; the head cell is the one
/// used for every collision and food test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// Body cells, head at the front.  Length >= 1 always.
    pub(super) body: VecDeque<Cell>,

    /// The direction the head moves on the next advance
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a single-cell snake at `head` facing `heading`
    pub(crate) fn new(head: Cell, heading: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            heading,
        }
    }

    /// The position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    /// The positions of all body cells, head first
    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Point the snake in a new direction
    pub(crate) fn turn(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Prepend the next head cell, one grid step along the heading, and
    /// return it.  Tail handling is the caller's concern.
    pub(crate) fn push_head(&mut self) -> Cell {
        let (dx, dy) = self.heading.delta();
        let head = self.head();
        let next = Cell::new(head.x + dx, head.y + dy);
        self.body.push_front(next);
        next
    }

    /// Whether the head coincides with any other body cell.  Vacuously false
    /// for a snake of length 1.
    pub(crate) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Drop the tail cell; keeps the length constant across a non-eating
    /// advance.
    pub(crate) fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }
}
