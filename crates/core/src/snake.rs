//! Snake module - segmented body, heading and the per-tick movement rule
//!
//! The snake is stored head-first: element 0 is the only `Head` object and
//! every following element is a `Body` segment, ordered from neck to tail.
//!
//! Movement is the classic "grow at the front, trim at the back" step:
//! the old head cell becomes a body segment, the head advances one cell, and
//! the tail is dropped unless food was eaten on this step.

use crate::object::GameObject;
use crate::types::{Direction, ObjectKind, Position};

#[derive(Debug, Clone)]
pub struct Snake {
    cells: Vec<GameObject>,
    heading: Direction,
}

impl Snake {
    /// Create a snake with its head at `head` and `length - 1` body cells
    /// trailing behind it, opposite to `heading`.
    ///
    /// A `length` of zero still produces a head.
    pub fn new(head: Position, length: usize, heading: Direction) -> Self {
        let length = length.max(1);
        let back = heading.opposite();

        let mut cells = Vec::with_capacity(length);
        cells.push(GameObject::head(head));
        let mut pos = head;
        for _ in 1..length {
            pos = pos.step(back);
            cells.push(GameObject::body(pos));
        }

        Self { cells, heading }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_cells(cells: &[Position], heading: Direction) -> Option<Self> {
        let (&head, body) = cells.split_first()?;
        let mut out = Vec::with_capacity(cells.len());
        out.push(GameObject::head(head));
        out.extend(body.iter().map(|&p| GameObject::body(p)));
        Some(Self {
            cells: out,
            heading,
        })
    }

    pub fn head(&self) -> &GameObject {
        &self.cells[0]
    }

    pub fn head_pos(&self) -> Position {
        self.cells[0].pos
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All segments, head first.
    pub fn iter(&self) -> std::slice::Iter<'_, GameObject> {
        self.cells.iter()
    }

    /// Turn towards `dir` unless it is a 180° reversal.
    ///
    /// Returns whether the heading changed.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.heading.opposite() || dir == self.heading {
            return false;
        }
        self.heading = dir;
        true
    }

    /// Advance one cell.
    ///
    /// `input` is applied first via [`Snake::steer`]; `None` keeps the current
    /// heading. Returns `true` when the new head lands on `food`, in which
    /// case the tail is kept and the snake grows by one cell.
    pub fn advance(&mut self, input: Option<Direction>, food: Option<&GameObject>) -> bool {
        if let Some(dir) = input {
            self.steer(dir);
        }

        let old_head = self.cells[0].pos;
        let new_head = old_head.step(self.heading);

        self.cells[0].pos = new_head;
        self.cells.insert(1, GameObject::body(old_head));

        let ate = food.is_some_and(|f| self.cells[0].same_cell(f));
        if !ate {
            self.cells.pop();
        }
        ate
    }

    /// True when a body segment (never the head) occupies `pos`.
    pub fn contains_body(&self, pos: Position) -> bool {
        self.cells
            .iter()
            .any(|c| c.kind == ObjectKind::Body && c.is_at(pos))
    }

    /// True when any segment, head included, occupies `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.iter().any(|c| c.is_at(pos))
    }

    /// True when the head overlaps its own body.
    pub fn bites_itself(&self) -> bool {
        self.contains_body(self.head_pos())
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a GameObject;
    type IntoIter = std::slice::Iter<'a, GameObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
