//! Serialized command pipeline between the UI and a structure controller.
//!
//! New elements need a drawable from the geometry/font provider, which may
//! only be ready later. Commands are therefore queued and processed strictly
//! one at a time: a command is validated right before it runs, and the next
//! command waits until the current one has fully applied (drawable
//! included). Registry order always matches submission order.
//!
//! # Usage
//!
//! ```ignore
//! let mut queue = CommandQueue::new(StructureController::new(StructureKind::Queue));
//!
//! // UI: submit commands as buttons are clicked
//! queue.submit(Command::enqueue("X"), &mut fonts);
//! queue.submit(Command::Dequeue, &mut fonts); // waits behind "X"
//!
//! // Later, when the font provider finishes "X"
//! queue.resolve(ticket, handle, &mut fonts);
//! ```

use std::collections::VecDeque;

use log::{debug, warn};

use crate::{
    controller::StructureController,
    state::{Action, Command, CommandResult, ShapeHandle},
};

/// Identifies an outstanding drawable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

/// Answer from a shape provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRequest {
    /// Drawable available immediately.
    Ready(ShapeHandle),
    /// Drawable will be delivered through `CommandQueue::resolve`.
    Pending(Ticket),
}

/// Geometry/font provider that turns node text into a drawable.
pub trait ShapeProvider {
    fn request(&mut self, text: &str) -> ShapeRequest;
}

/// Provider whose drawables are always ready. Handles count up from 0.
#[derive(Debug, Default)]
pub struct ImmediateShapes {
    next: u64,
}

impl ShapeProvider for ImmediateShapes {
    fn request(&mut self, _text: &str) -> ShapeRequest {
        let handle = ShapeHandle(self.next);
        self.next += 1;
        ShapeRequest::Ready(handle)
    }
}

/// A validated command waiting on its drawable.
struct InFlight {
    action: Action,
    ticket: Ticket,
}

/// Runs commands against one controller, one complete command at a time.
pub struct CommandQueue {
    controller: StructureController,

    /// Submitted commands not yet started.
    pending: VecDeque<Command>,

    /// Command blocked on a drawable, if any.
    in_flight: Option<InFlight>,
}

impl CommandQueue {
    pub fn new(controller: StructureController) -> Self {
        Self {
            controller,
            pending: VecDeque::new(),
            in_flight: None,
        }
    }

    /// Queue a command and process as much as possible.
    ///
    /// Returns the results of every command that finished during this call,
    /// in submission order.
    pub fn submit(
        &mut self,
        command: Command,
        provider: &mut impl ShapeProvider,
    ) -> Vec<CommandResult> {
        debug!(command:% = command.name(), queued = self.pending.len(); "command submitted");
        self.pending.push_back(command);
        self.drain(provider)
    }

    /// Deliver the drawable for an outstanding request and continue.
    ///
    /// A ticket that is not currently in flight is ignored.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        shape: ShapeHandle,
        provider: &mut impl ShapeProvider,
    ) -> Vec<CommandResult> {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.ticket == ticket => in_flight,
            other => {
                self.in_flight = other;
                warn!(ticket = ticket.0; "ignoring drawable for unknown request");
                return Vec::new();
            }
        };

        let mut results = vec![self.controller.apply(in_flight.action, Some(shape))];
        results.extend(self.drain(provider));
        results
    }

    fn drain(&mut self, provider: &mut impl ShapeProvider) -> Vec<CommandResult> {
        let mut results = Vec::new();

        while self.in_flight.is_none() {
            let Some(command) = self.pending.pop_front() else {
                break;
            };

            let action = match self.controller.prepare(&command) {
                Ok(action) => action,
                Err(err) => {
                    results.push(Err(err));
                    continue;
                }
            };

            let shape = match action.shape_text().map(|text| provider.request(text)) {
                Some(ShapeRequest::Ready(handle)) => Some(handle),
                Some(ShapeRequest::Pending(ticket)) => {
                    debug!(ticket = ticket.0; "waiting for drawable");
                    self.in_flight = Some(InFlight { action, ticket });
                    break;
                }
                None => None,
            };

            results.push(self.controller.apply(action, shape));
        }

        results
    }

    /// True when nothing is queued or waiting on a drawable.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none() && self.pending.is_empty()
    }

    /// Commands submitted but not yet started.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Ticket of the command currently waiting on a drawable.
    pub fn awaiting(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(|in_flight| in_flight.ticket)
    }

    pub fn controller(&self) -> &StructureController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::layout::StructureKind;
    use crate::state::Outcome;

    /// Provider that never answers synchronously.
    #[derive(Default)]
    struct DeferredShapes {
        next: u64,
        requested: Vec<(Ticket, String)>,
    }

    impl ShapeProvider for DeferredShapes {
        fn request(&mut self, text: &str) -> ShapeRequest {
            let ticket = Ticket(self.next);
            self.next += 1;
            self.requested.push((ticket, text.to_string()));
            ShapeRequest::Pending(ticket)
        }
    }

    #[test]
    fn test_immediate_shapes_attach_handles() {
        let mut shapes = ImmediateShapes::default();
        let mut queue = CommandQueue::new(StructureController::new(StructureKind::LinkedList));

        queue.submit(Command::push("a"), &mut shapes);
        queue.submit(Command::push("b"), &mut shapes);

        let handles: Vec<_> = queue
            .controller()
            .sequence()
            .elements
            .iter()
            .map(|e| e.shape())
            .collect();
        assert_eq!(handles, vec![Some(ShapeHandle(0)), Some(ShapeHandle(1))]);
        assert!(queue.is_idle());
    }

    #[test]
    fn test_commands_wait_for_pending_shape() {
        let mut shapes = DeferredShapes::default();
        let mut queue = CommandQueue::new(StructureController::new(StructureKind::Queue));

        assert!(queue.submit(Command::enqueue("X"), &mut shapes).is_empty());
        assert!(queue.submit(Command::Dequeue, &mut shapes).is_empty());
        assert!(queue.submit(Command::enqueue("Y"), &mut shapes).is_empty());
        assert_eq!(queue.pending(), 2);
        assert_eq!(queue.awaiting(), Some(Ticket(0)));

        // Dequeue runs right after X lands, then Y asks for its drawable.
        let results = queue.resolve(Ticket(0), ShapeHandle(10), &mut shapes);
        assert_eq!(
            results,
            vec![
                Ok(Outcome::Added {
                    value: "X".to_string(),
                    index: 0
                }),
                Ok(Outcome::Removed {
                    value: "X".to_string(),
                    index: 0
                }),
            ]
        );
        assert_eq!(queue.awaiting(), Some(Ticket(1)));
        assert_eq!(shapes.requested[1].1, "Y");

        queue.resolve(Ticket(1), ShapeHandle(11), &mut shapes);
        let seq = queue.controller().sequence();
        assert_eq!(seq.snapshot(), vec!["Y"]);
        assert!(seq.connectors.is_empty());
        assert!(queue.is_idle());
    }

    #[test]
    fn test_index_checked_when_command_runs() {
        let mut shapes = DeferredShapes::default();
        let mut queue = CommandQueue::new(StructureController::new(StructureKind::LinkedList));

        queue.submit(Command::push("a"), &mut shapes);
        // Valid only once "a" has landed.
        queue.submit(Command::insert("b", 1), &mut shapes);

        queue.resolve(Ticket(0), ShapeHandle(0), &mut shapes);
        queue.resolve(Ticket(1), ShapeHandle(1), &mut shapes);
        assert_eq!(queue.controller().values(), vec!["a", "b"]);
    }

    #[test]
    fn test_rejected_command_does_not_block() {
        let mut shapes = ImmediateShapes::default();
        let mut queue = CommandQueue::new(StructureController::new(StructureKind::Stack));

        let results = queue.submit(Command::Pop, &mut shapes);
        assert_eq!(results, vec![Err(CommandError::EmptyStructure)]);

        let results = queue.submit(Command::push("1"), &mut shapes);
        assert!(results[0].is_ok());
        assert!(queue.is_idle());
    }

    #[test]
    fn test_unknown_ticket_ignored() {
        let mut shapes = DeferredShapes::default();
        let mut queue = CommandQueue::new(StructureController::new(StructureKind::Stack));

        queue.submit(Command::push("1"), &mut shapes);
        assert!(queue.resolve(Ticket(7), ShapeHandle(0), &mut shapes).is_empty());
        assert_eq!(queue.awaiting(), Some(Ticket(0)));
        assert!(queue.controller().sequence().is_empty());
    }
}
