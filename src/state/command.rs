// Commands from the UI to a structure controller.
//
// A `Command` carries raw field contents exactly as the user typed them.
// The controller validates it into an `Action`, which is what actually
// gets applied to the registries.

use super::{Color, ColorTarget};

/// A user action on one structure.
///
/// Commands are:
/// - Immutable once created
/// - Validated right before they are applied, against the state they mutate
/// - Applied one at a time, in submission order
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add at the natural insertion end (list tail, stack top).
    Push { value: String },

    /// Remove from the natural removal end (list tail, stack top).
    Pop,

    /// Add at the back of a queue.
    Enqueue { value: String },

    /// Remove the front of a queue.
    Dequeue,

    /// Insert `value` before position `index` (index text as entered).
    Insert { value: String, index: String },

    /// Remove the element at `index` (index text as entered).
    Delete { index: String },

    /// Report all values in logical order.
    Iterate,

    /// Change a material color from a color picker value.
    Recolor { target: ColorTarget, color: String },
}

impl Command {
    pub fn push(value: impl Into<String>) -> Self {
        Command::Push {
            value: value.into(),
        }
    }

    pub fn enqueue(value: impl Into<String>) -> Self {
        Command::Enqueue {
            value: value.into(),
        }
    }

    pub fn insert(value: impl Into<String>, index: impl ToString) -> Self {
        Command::Insert {
            value: value.into(),
            index: index.to_string(),
        }
    }

    pub fn delete(index: impl ToString) -> Self {
        Command::Delete {
            index: index.to_string(),
        }
    }

    pub fn recolor(target: ColorTarget, color: impl Into<String>) -> Self {
        Command::Recolor {
            target,
            color: color.into(),
        }
    }

    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Push { .. } => "push",
            Command::Pop => "pop",
            Command::Enqueue { .. } => "enqueue",
            Command::Dequeue => "dequeue",
            Command::Insert { .. } => "insert",
            Command::Delete { .. } => "delete",
            Command::Iterate => "iterate",
            Command::Recolor { .. } => "recolor",
        }
    }
}

/// A validated command, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push or enqueue.
    Append { value: String },

    /// Insert at a checked index.
    InsertAt { value: String, index: usize },

    /// Pop or dequeue.
    RemoveEnd,

    /// Delete at a checked index.
    RemoveAt { index: usize },

    Iterate,

    Recolor { target: ColorTarget, color: Color },
}

impl Action {
    /// Text that needs a drawable before this action can be applied.
    pub fn shape_text(&self) -> Option<&str> {
        match self {
            Action::Append { value } | Action::InsertAt { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new element now sits at `index`.
    Added { value: String, index: usize },

    /// The element that was at `index` is gone.
    Removed { value: String, index: usize },

    /// Values in logical order.
    Listed { values: Vec<String> },

    Recolored { target: ColorTarget, rgb: u32 },
}

/// Response from a controller after processing a command.
pub type CommandResult = Result<Outcome, crate::error::CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_text() {
        let append = Action::Append {
            value: "42".to_string(),
        };
        assert_eq!(append.shape_text(), Some("42"));
        assert_eq!(Action::RemoveEnd.shape_text(), None);
        assert_eq!(Action::RemoveAt { index: 0 }.shape_text(), None);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Command::insert("A", 3),
            Command::Insert {
                value: "A".to_string(),
                index: "3".to_string()
            }
        );
        assert_eq!(Command::delete(0).name(), "delete");
    }
}
