// src/layout/mod.rs
//
// Layout engine.
//
// Keeps node meshes, connector arrows and sentinel labels evenly spaced
// after every structural mutation. The engine is deterministic: the same
// sequence state and mutation always produce the same positions.
//
// - `horizontal`: linked list and queue (grow along +x)
// - `vertical`: stack (grows downward, newest on top)
// - `sentinel`: label placement and the empty marker

mod horizontal;
mod sentinel;
mod vertical;

use std::fmt;

use crate::{
    error::CommandError,
    geometry::{Axis, Position},
    state::{Element, Sequence, ShapeHandle},
};

/// Scene units per character of a node's text.
pub const CHAR_WIDTH: f64 = 2.5;

/// Which of the three demos a structure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    LinkedList,
    Queue,
    Stack,
}

impl StructureKind {
    pub fn title(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "Linked List",
            StructureKind::Queue => "Queue",
            StructureKind::Stack => "Stack",
        }
    }

    pub fn growth_axis(self) -> Axis {
        match self {
            StructureKind::LinkedList | StructureKind::Queue => Axis::X,
            StructureKind::Stack => Axis::Y,
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Geometry constants for one structure.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProfile {
    pub kind: StructureKind,

    /// Base position the structure is anchored to.
    pub anchor: Position,

    /// Width of one character of node text.
    pub char_width: f64,

    /// Minimum gap between nodes along the growth axis.
    pub gap: f64,

    /// Connector offset from the anchor across the growth axis
    /// (above the baseline for lists/queues, below the top label for stacks).
    pub connector_offset: f64,
}

impl LayoutProfile {
    pub fn linked_list() -> Self {
        Self {
            kind: StructureKind::LinkedList,
            anchor: Position::new(-65.0, 0.0),
            char_width: CHAR_WIDTH,
            gap: 4.0,
            connector_offset: 1.5,
        }
    }

    pub fn queue() -> Self {
        Self {
            kind: StructureKind::Queue,
            ..Self::linked_list()
        }
    }

    pub fn stack() -> Self {
        Self {
            kind: StructureKind::Stack,
            anchor: Position::new(0.0, 35.0),
            char_width: CHAR_WIDTH,
            gap: 3.5,
            connector_offset: 3.5,
        }
    }

    pub fn for_kind(kind: StructureKind) -> Self {
        match kind {
            StructureKind::LinkedList => Self::linked_list(),
            StructureKind::Queue => Self::queue(),
            StructureKind::Stack => Self::stack(),
        }
    }

    pub fn with_char_width(mut self, char_width: f64) -> Self {
        self.char_width = char_width;
        self
    }

    /// Rendered width of a node's text.
    #[inline]
    pub fn width(&self, value: &str) -> f64 {
        value.chars().count() as f64 * self.char_width
    }

    /// Distance between two stacked slots.
    #[inline]
    pub fn step(&self) -> f64 {
        self.gap * 2.0
    }

    /// Position of a value placed into an empty structure.
    pub fn first_slot(&self, value: &str) -> Position {
        let half = self.width(value) / 2.0;
        match self.kind {
            StructureKind::LinkedList => self.anchor,
            StructureKind::Queue => self.anchor.offset(-half, 0.0),
            StructureKind::Stack => Position::new(self.anchor.x - half, self.anchor.y - self.step()),
        }
    }
}

/// Positions elements, connectors and sentinels for one structure.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    profile: LayoutProfile,
}

impl LayoutEngine {
    pub fn new(profile: LayoutProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &LayoutProfile {
        &self.profile
    }

    pub fn kind(&self) -> StructureKind {
        self.profile.kind
    }

    /// Create the sentinel labels for an empty structure.
    pub fn initialize(&self, seq: &mut Sequence) {
        seq.sentinels = sentinel::initial(&self.profile);
        sentinel::arrange(&self.profile, seq);
    }

    /// Insert at the natural insertion end. Returns the new element's index.
    pub fn append(&self, seq: &mut Sequence, value: String, shape: Option<ShapeHandle>) -> usize {
        let index = match self.profile.kind {
            StructureKind::LinkedList | StructureKind::Queue => {
                horizontal::append(&self.profile, seq, value, shape)
            }
            StructureKind::Stack => vertical::push(&self.profile, seq, value, shape),
        };
        sentinel::arrange(&self.profile, seq);
        index
    }

    /// Remove from the natural removal end: list tail, queue front, stack top.
    ///
    /// Returns the removed element and the index it had, or `None` when empty.
    pub fn remove_end(&self, seq: &mut Sequence) -> Option<(usize, Element)> {
        let removed = match self.profile.kind {
            StructureKind::LinkedList => horizontal::pop_back(seq),
            StructureKind::Queue => horizontal::pop_front(&self.profile, seq),
            StructureKind::Stack => vertical::pop(&self.profile, seq),
        };
        sentinel::arrange(&self.profile, seq);
        removed
    }

    /// Insert before `index`. `index == len` behaves exactly like `append`.
    ///
    /// Only the linked list supports positions other than the end.
    pub fn insert_at(
        &self,
        seq: &mut Sequence,
        index: usize,
        value: String,
        shape: Option<ShapeHandle>,
    ) -> Result<usize, CommandError> {
        let len = seq.len();
        if index > len {
            return Err(CommandError::InvalidIndex {
                index: index.to_string(),
                len,
            });
        }
        if index == len {
            return Ok(self.append(seq, value, shape));
        }

        match self.profile.kind {
            StructureKind::LinkedList => {
                horizontal::insert_at(&self.profile, seq, index, value, shape);
                sentinel::arrange(&self.profile, seq);
                Ok(index)
            }
            kind => Err(CommandError::Unsupported {
                command: "insert",
                kind,
            }),
        }
    }

    /// Remove the element at `index` (linked list only).
    pub fn remove_at(&self, seq: &mut Sequence, index: usize) -> Result<Element, CommandError> {
        let kind = self.profile.kind;
        if kind != StructureKind::LinkedList {
            return Err(CommandError::Unsupported {
                command: "delete",
                kind,
            });
        }

        let len = seq.len();
        if index >= len {
            return Err(CommandError::InvalidIndex {
                index: index.to_string(),
                len,
            });
        }

        let removed = horizontal::remove_at(&self.profile, seq, index);
        sentinel::arrange(&self.profile, seq);
        Ok(removed)
    }
}
