// src/lib.rs
//
// Library entry point for the structure demos (browser via `web`, native
// via the sanity-run binary).

mod config;
mod controller;
mod error;
mod geometry;
mod layout;
mod queue;
mod render;
mod state;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use config::VizConfig;
pub use controller::StructureController;
pub use error::CommandError;
pub use geometry::{Axis, Direction, Position};
pub use layout::{CHAR_WIDTH, LayoutEngine, LayoutProfile, StructureKind};
pub use queue::{CommandQueue, ImmediateShapes, ShapeProvider, ShapeRequest, Ticket};
pub use render::{Primitive, Renderer, primitives, render_frame};
pub use state::{
    Action, Color, ColorTarget, Command, CommandResult, Connector, Element, OutputLog, Outcome,
    Palette, Pointer, Registry, Sentinel, SentinelRole, Sequence, ShapeHandle,
};
