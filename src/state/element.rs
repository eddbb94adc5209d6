// Scene items: value nodes, connectors and sentinel labels.
//
// Items only describe *what* is shown and *where*. How an item is drawn
// lives behind an opaque `ShapeHandle` issued by the geometry provider.

use crate::geometry::{Direction, Position};

/// Opaque handle to a drawable created by the geometry/font provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub u64);

/// A value-bearing node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    value: String,

    /// Recomputed by the layout engine on every structural change.
    pub position: Position,

    shape: Option<ShapeHandle>,
}

impl Element {
    pub fn new(value: impl Into<String>, position: Position) -> Self {
        Self {
            value: value.into(),
            position,
            shape: None,
        }
    }

    pub fn with_shape(mut self, shape: Option<ShapeHandle>) -> Self {
        self.shape = shape;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn shape(&self) -> Option<ShapeHandle> {
        self.shape
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

/// Arrow between two adjacent elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub position: Position,
}

impl Connector {
    pub const fn at(position: Position) -> Self {
        Self { position }
    }
}

/// Role of a sentinel label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentinelRole {
    /// "Top" for list/stack, "Front" for queue.
    Head,
    /// "Back" for queue.
    Tail,
    /// Empty-structure marker.
    Null,
}

/// Small arrow drawn next to a sentinel label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub position: Position,
    pub direction: Direction,
}

/// Fixed-role marker that is not itself a data element.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentinel {
    pub role: SentinelRole,
    pub text: String,
    pub visible: bool,
    pub position: Position,
    pub pointer: Option<Pointer>,
}

impl Sentinel {
    pub fn new(role: SentinelRole, text: impl Into<String>, position: Position) -> Self {
        Self {
            role,
            text: text.into(),
            visible: true,
            position,
            pointer: None,
        }
    }

    pub fn with_pointer(mut self, position: Position, direction: Direction) -> Self {
        self.pointer = Some(Pointer {
            position,
            direction,
        });
        self
    }
}
