// src/state/mod.rs
//
// Scene state for the structure demos.
//
// This module contains the per-structure data the UI sees: ordered
// registries of elements and connectors, sentinel labels, colors and the
// rolling output log.
//
// Key principles:
// - Each demo instance owns its own state, nothing is global
// - Registries are plain ordered containers, positioning lives in `layout`
// - Mutations happen through Commands

mod command;
mod element;
mod output_log;
mod palette;
mod registry;
mod sequence;

pub use command::*;
pub use element::*;
pub use output_log::*;
pub use palette::*;
pub use registry::*;
pub use sequence::*;
