// src/error.rs
//
// Command rejection reasons.
//
// Every error is detected before any registry mutation, so a rejected
// command never leaves a structure half-updated.

use thiserror::Error;

use crate::layout::StructureKind;

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A value or index field was left blank.
    #[error("Entered value is empty")]
    EmptyInput,

    /// Index outside the range allowed by the operation.
    #[error("Invalid Index")]
    InvalidIndex { index: String, len: usize },

    /// Pop/dequeue on a structure with no elements.
    #[error("Pop failed")]
    EmptyStructure,

    /// The structure has no such operation (e.g. delete on a stack).
    #[error("{command} is not supported by the {kind}")]
    Unsupported {
        command: &'static str,
        kind: StructureKind,
    },

    #[error("Invalid color {input}")]
    InvalidColor { input: String },
}

impl CommandError {
    /// Whether the rejection is reported in the output area.
    ///
    /// Blank input and unsupported commands only produce a diagnostic.
    pub fn is_user_visible(&self) -> bool {
        !matches!(
            self,
            CommandError::EmptyInput | CommandError::Unsupported { .. }
        )
    }
}
