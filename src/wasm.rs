//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { structviz_init, StructvizDemo } from './structviz.js';
//!
//! await init();
//! structviz_init();
//!
//! const demo = StructvizDemo.linked_list();
//! demo.push(pushValue.value);
//!
//! // Build a text mesh for every requested value, then hand it back
//! let ticket;
//! while ((ticket = demo.next_shape_ticket()) !== undefined) {
//!     const text = demo.shape_text(ticket);
//!     fontLoader.load(FONT, (font) => {
//!         meshes.set(nextHandle, new THREE.Mesh(new TextGeometry(text, { font })));
//!         demo.shape_ready(ticket, nextHandle++);
//!     });
//! }
//!
//! // Every frame
//! const xy = demo.node_positions(); // [x0, y0, x1, y1, ...]
//! ```

use std::collections::VecDeque;

use wasm_bindgen::prelude::*;

use crate::config::VizConfig;
use crate::controller::StructureController;
use crate::layout::StructureKind;
use crate::queue::{CommandQueue, ShapeProvider, ShapeRequest, Ticket};
use crate::state::{ColorTarget, Command, SentinelRole, ShapeHandle};

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn structviz_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration for creating a demo.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct StructvizConfig {
    /// Lines kept in the output area.
    pub max_outputs: u32,
    /// Scene units per character of node text.
    pub char_width: f64,
}

#[wasm_bindgen]
impl StructvizConfig {
    /// Create a new configuration with default values.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for StructvizConfig {
    fn default() -> Self {
        let config = VizConfig::default();
        Self {
            max_outputs: config.max_outputs as u32,
            char_width: config.char_width,
        }
    }
}

impl From<StructvizConfig> for VizConfig {
    fn from(c: StructvizConfig) -> Self {
        Self {
            max_outputs: c.max_outputs as usize,
            char_width: c.char_width,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shape requests
// ═══════════════════════════════════════════════════════════════════════════

/// Shape provider backed by JavaScript: every request is answered later
/// through `StructvizDemo::shape_ready`.
#[derive(Default)]
struct BrowserShapes {
    next_ticket: u64,
    requests: VecDeque<(Ticket, String)>,
    text_by_ticket: Vec<(Ticket, String)>,
}

impl ShapeProvider for BrowserShapes {
    fn request(&mut self, text: &str) -> ShapeRequest {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.requests.push_back((ticket, text.to_string()));
        self.text_by_ticket.push((ticket, text.to_string()));
        ShapeRequest::Pending(ticket)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Demo (one structure)
// ═══════════════════════════════════════════════════════════════════════════

/// One visualized structure with its command queue.
#[wasm_bindgen]
pub struct StructvizDemo {
    queue: CommandQueue,
    shapes: BrowserShapes,
}

impl StructvizDemo {
    fn create(kind: StructureKind, config: StructvizConfig) -> Self {
        let controller = StructureController::with_config(kind, &config.into());
        Self {
            queue: CommandQueue::new(controller),
            shapes: BrowserShapes::default(),
        }
    }

    fn send(&mut self, command: Command) {
        // Rejections are already written to the output area.
        let _ = self.queue.submit(command, &mut self.shapes);
    }

    fn sentinel_visible(&self, role: SentinelRole) -> bool {
        self.queue
            .controller()
            .sequence()
            .sentinel(role)
            .is_some_and(|s| s.visible)
    }
}

#[wasm_bindgen]
impl StructvizDemo {
    pub fn linked_list() -> StructvizDemo {
        Self::create(StructureKind::LinkedList, StructvizConfig::default())
    }

    pub fn queue() -> StructvizDemo {
        Self::create(StructureKind::Queue, StructvizConfig::default())
    }

    pub fn stack() -> StructvizDemo {
        Self::create(StructureKind::Stack, StructvizConfig::default())
    }

    /// Create a demo by name ("linked_list", "queue" or "stack").
    pub fn with_config(kind: &str, config: StructvizConfig) -> Result<StructvizDemo, JsValue> {
        let kind = match kind {
            "linked_list" => StructureKind::LinkedList,
            "queue" => StructureKind::Queue,
            "stack" => StructureKind::Stack,
            other => return Err(JsValue::from_str(&format!("unknown structure '{other}'"))),
        };
        Ok(Self::create(kind, config))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn push(&mut self, value: &str) {
        self.send(Command::push(value));
    }

    pub fn pop(&mut self) {
        self.send(Command::Pop);
    }

    pub fn enqueue(&mut self, value: &str) {
        self.send(Command::enqueue(value));
    }

    pub fn dequeue(&mut self) {
        self.send(Command::Dequeue);
    }

    /// Insert `value` before `index`. Both are raw input-field contents.
    pub fn insert(&mut self, value: &str, index: &str) {
        self.send(Command::Insert {
            value: value.to_string(),
            index: index.to_string(),
        });
    }

    /// Delete the element at `index` (raw input-field contents).
    pub fn delete(&mut self, index: &str) {
        self.send(Command::Delete {
            index: index.to_string(),
        });
    }

    pub fn iterate(&mut self) {
        self.send(Command::Iterate);
    }

    /// Set the node color from a color picker value ("#rrggbb").
    pub fn set_node_color(&mut self, color: &str) {
        self.send(Command::recolor(ColorTarget::Node, color));
    }

    /// Set the connector color from a color picker value ("#rrggbb").
    pub fn set_connector_color(&mut self, color: &str) {
        self.send(Command::recolor(ColorTarget::Connector, color));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shape requests
    // ─────────────────────────────────────────────────────────────────────────

    /// Next drawable request to fulfil, if any.
    pub fn next_shape_ticket(&mut self) -> Option<u32> {
        self.shapes
            .requests
            .pop_front()
            .map(|(ticket, _)| ticket.0 as u32)
    }

    /// Text to build the drawable for `ticket` from.
    pub fn shape_text(&self, ticket: u32) -> Option<String> {
        self.shapes
            .text_by_ticket
            .iter()
            .find(|(t, _)| t.0 == u64::from(ticket))
            .map(|(_, text)| text.clone())
    }

    /// Hand back the drawable for `ticket`. `handle` is a JS-side mesh id.
    pub fn shape_ready(&mut self, ticket: u32, handle: u32) {
        let ticket = Ticket(u64::from(ticket));
        self.shapes.text_by_ticket.retain(|(t, _)| *t != ticket);
        let _ = self.queue.resolve(
            ticket,
            ShapeHandle(u64::from(handle)),
            &mut self.shapes,
        );
    }

    /// True when every submitted command has fully applied.
    pub fn is_idle(&self) -> bool {
        self.queue.is_idle()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame readback
    // ─────────────────────────────────────────────────────────────────────────

    pub fn len(&self) -> u32 {
        self.queue.controller().sequence().len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.queue.controller().sequence().is_empty()
    }

    /// Element values in logical order.
    pub fn values(&self) -> Vec<String> {
        self.queue.controller().values()
    }

    /// Drawable handle per element, in logical order (`u32::MAX` if none).
    pub fn node_shapes(&self) -> Vec<u32> {
        self.queue
            .controller()
            .sequence()
            .elements
            .iter()
            .map(|e| e.shape().map_or(u32::MAX, |s| s.0 as u32))
            .collect()
    }

    /// Element positions flattened as `[x0, y0, x1, y1, ...]`.
    pub fn node_positions(&self) -> Vec<f64> {
        self.queue
            .controller()
            .sequence()
            .elements
            .iter()
            .flat_map(|e| [e.position.x, e.position.y])
            .collect()
    }

    /// Connector positions flattened as `[x0, y0, x1, y1, ...]`.
    pub fn connector_positions(&self) -> Vec<f64> {
        self.queue
            .controller()
            .sequence()
            .connectors
            .iter()
            .flat_map(|c| [c.position.x, c.position.y])
            .collect()
    }

    /// Label positions flattened as `[x, y, visible]` in creation order.
    pub fn label_positions(&self) -> Vec<f64> {
        self.queue
            .controller()
            .sequence()
            .sentinels
            .iter()
            .flat_map(|s| [s.position.x, s.position.y, f64::from(u8::from(s.visible))])
            .collect()
    }

    pub fn null_visible(&self) -> bool {
        self.sentinel_visible(SentinelRole::Null)
    }

    pub fn node_color(&self) -> u32 {
        self.queue.controller().palette().node.to_rgb()
    }

    pub fn connector_color(&self) -> u32 {
        self.queue.controller().palette().connector.to_rgb()
    }

    /// Output area text, one message per line.
    pub fn output_text(&self) -> String {
        self.queue.controller().output().to_string()
    }
}
