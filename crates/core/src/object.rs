//! Positioned game objects.

use crate::types::{ObjectKind, Position};

/// A glyph placed on the arena: a snake segment or a piece of food.
///
/// The derived `PartialEq` is structural. Collision and spawn checks only care
/// about the occupied cell and go through [`GameObject::same_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameObject {
    pub pos: Position,
    pub glyph: char,
    pub kind: ObjectKind,
}

impl GameObject {
    /// Object of `kind` at `pos`, using the kind's default glyph.
    pub fn new(pos: Position, kind: ObjectKind) -> Self {
        Self {
            pos,
            glyph: kind.glyph(),
            kind,
        }
    }

    pub fn head(pos: Position) -> Self {
        Self::new(pos, ObjectKind::Head)
    }

    pub fn body(pos: Position) -> Self {
        Self::new(pos, ObjectKind::Body)
    }

    pub fn food(pos: Position) -> Self {
        Self::new(pos, ObjectKind::Food)
    }

    /// True when both objects occupy the same cell, regardless of kind.
    pub fn same_cell(&self, other: &GameObject) -> bool {
        self.pos == other.pos
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.pos == pos
    }
}
