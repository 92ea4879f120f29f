use crate::graph::Position;
use serde::{Deserialize, Serialize};

/// Spacing used when nodes are placed automatically.
///
/// Positions double as the sibling-order key, so only the horizontal spacing
/// matters for correctness; the rest is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Where the root lands on materialize.
    pub anchor: Position,
    /// Horizontal gap between consecutive siblings.
    pub spacing_x: f64,
    /// Vertical gap between a container and its children.
    pub spacing_y: f64,
    /// Vertical gap between a Requirement and its single child.
    pub gate_offset_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: Position::new(0.0, 0.0),
            spacing_x: 200.0,
            spacing_y: 150.0,
            gate_offset_y: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Where the `index`-th child of a container at `parent` goes.
    pub fn container_child(&self, parent: Position, index: usize) -> Position {
        Position::new(
            parent.x + index as f64 * self.spacing_x,
            parent.y + self.spacing_y,
        )
    }

    /// Where the child of a Requirement at `parent` goes.
    pub fn gate_child(&self, parent: Position) -> Position {
        Position::new(parent.x, parent.y + self.gate_offset_y)
    }

    /// The slot right of an existing sibling.
    pub fn right_of(&self, sibling: Position) -> Position {
        Position::new(sibling.x + self.spacing_x, sibling.y)
    }
}
