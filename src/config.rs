// src/config.rs
//
// Demo-wide settings.

use crate::layout::{CHAR_WIDTH, LayoutProfile, StructureKind};
use crate::state::DEFAULT_MAX_OUTPUTS;

/// Settings shared by every structure controller.
#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    /// Lines kept in the output area.
    pub max_outputs: usize,
    /// Scene units per character of node text.
    pub char_width: f64,
}

impl VizConfig {
    /// Layout profile for `kind` with this config's text metrics.
    pub fn profile(&self, kind: StructureKind) -> LayoutProfile {
        LayoutProfile::for_kind(kind).with_char_width(self.char_width)
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            max_outputs: DEFAULT_MAX_OUTPUTS,
            char_width: CHAR_WIDTH,
        }
    }
}
