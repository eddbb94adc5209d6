// src/controller.rs
//
// Command handlers for one structure.
//
// This module validates commands from the UI, applies them through the
// layout engine, and writes a line to the rolling output for each one.

use log::{debug, info, warn};

use crate::{
    config::VizConfig,
    error::CommandError,
    layout::{LayoutEngine, LayoutProfile, StructureKind},
    state::{
        Action, Color, Command, CommandResult, OutputLog, Outcome, Palette, Sequence, ShapeHandle,
    },
};

/// Owns one structure's state and processes its commands.
///
/// Processing is split in two so a caller can fetch a drawable in between:
/// - `prepare` validates a command against the current state
/// - `apply` performs the mutation and layout
pub struct StructureController {
    /// Positioning policy for this structure.
    engine: LayoutEngine,

    /// Elements, connectors and labels.
    sequence: Sequence,

    /// Node and connector colors.
    palette: Palette,

    /// Rolling output area.
    output: OutputLog,
}

impl StructureController {
    pub fn new(kind: StructureKind) -> Self {
        Self::with_config(kind, &VizConfig::default())
    }

    pub fn with_config(kind: StructureKind, config: &VizConfig) -> Self {
        let engine = LayoutEngine::new(config.profile(kind));
        let mut sequence = Sequence::new();
        engine.initialize(&mut sequence);

        let mut output = OutputLog::new(config.max_outputs);
        output.push(format!("{} Initialized", kind.title()));
        info!(kind:% = kind; "structure initialized");

        Self {
            engine,
            sequence,
            palette: Palette::default(),
            output,
        }
    }

    /// Validate and apply a command whose drawable is not tracked.
    pub fn execute(&mut self, command: &Command) -> CommandResult {
        let action = self.prepare(command)?;
        self.apply(action, None)
    }

    /// Validate a command against the current state.
    ///
    /// Rejections are reported here; no state changes either way.
    pub fn prepare(&mut self, command: &Command) -> Result<Action, CommandError> {
        let result = self.validate(command);
        if let Err(err) = &result {
            self.report(command.name(), err);
        }
        result
    }

    fn validate(&self, command: &Command) -> Result<Action, CommandError> {
        let kind = self.kind();
        let len = self.sequence.len();

        match command {
            Command::Push { value } if kind != StructureKind::Queue => Ok(Action::Append {
                value: non_empty(value)?,
            }),

            Command::Enqueue { value } if kind == StructureKind::Queue => Ok(Action::Append {
                value: non_empty(value)?,
            }),

            Command::Pop if kind != StructureKind::Queue => self.require_elements(),

            Command::Dequeue if kind == StructureKind::Queue => self.require_elements(),

            Command::Insert { value, index } => {
                if value.trim().is_empty() || index.trim().is_empty() {
                    return Err(CommandError::EmptyInput);
                }
                let index = parse_index(index, len, len)?;
                if kind != StructureKind::LinkedList && index != len {
                    return Err(CommandError::Unsupported {
                        command: command.name(),
                        kind,
                    });
                }
                Ok(Action::InsertAt {
                    value: value.clone(),
                    index,
                })
            }

            Command::Delete { index } if kind == StructureKind::LinkedList => {
                if index.trim().is_empty() {
                    return Err(CommandError::EmptyInput);
                }
                // An empty list has no valid index at all.
                let index = match len.checked_sub(1) {
                    Some(max) => parse_index(index, max, len)?,
                    None => {
                        return Err(CommandError::InvalidIndex {
                            index: index.trim().to_string(),
                            len,
                        });
                    }
                };
                Ok(Action::RemoveAt { index })
            }

            Command::Iterate => Ok(Action::Iterate),

            Command::Recolor { target, color } => {
                if color.trim().is_empty() {
                    return Err(CommandError::EmptyInput);
                }
                Ok(Action::Recolor {
                    target: *target,
                    color: Color::new(color)?,
                })
            }

            other => Err(CommandError::Unsupported {
                command: other.name(),
                kind,
            }),
        }
    }

    fn require_elements(&self) -> Result<Action, CommandError> {
        if self.sequence.is_empty() {
            Err(CommandError::EmptyStructure)
        } else {
            Ok(Action::RemoveEnd)
        }
    }

    /// Apply a validated action and write its output line.
    pub fn apply(&mut self, action: Action, shape: Option<ShapeHandle>) -> CommandResult {
        let result = self.mutate(action, shape);
        match result {
            Ok((outcome, line)) => {
                self.output.push(line);
                Ok(outcome)
            }
            Err(err) => {
                self.report("apply", &err);
                Err(err)
            }
        }
    }

    fn mutate(
        &mut self,
        action: Action,
        shape: Option<ShapeHandle>,
    ) -> Result<(Outcome, String), CommandError> {
        match action {
            Action::Append { value } => {
                let line = match self.kind() {
                    StructureKind::Stack => format!("{value} was added to the stack"),
                    _ => format!("{value} was pushed"),
                };
                let index = self.engine.append(&mut self.sequence, value.clone(), shape);
                debug!(index = index, len = self.sequence.len(); "element appended");
                Ok((Outcome::Added { value, index }, line))
            }

            Action::InsertAt { value, index } => {
                let line = format!("Value {value} was inserted at {index}");
                let index =
                    self.engine
                        .insert_at(&mut self.sequence, index, value.clone(), shape)?;
                debug!(index = index, len = self.sequence.len(); "element inserted");
                Ok((Outcome::Added { value, index }, line))
            }

            Action::RemoveEnd => {
                let (index, removed) = self
                    .engine
                    .remove_end(&mut self.sequence)
                    .ok_or(CommandError::EmptyStructure)?;
                let value = removed.into_value();
                let line = format!("{value} was removed");
                Ok((Outcome::Removed { value, index }, line))
            }

            Action::RemoveAt { index } => {
                let removed = self.engine.remove_at(&mut self.sequence, index)?;
                let line = format!("Index {index} was removed");
                Ok((
                    Outcome::Removed {
                        value: removed.into_value(),
                        index,
                    },
                    line,
                ))
            }

            Action::Iterate => {
                let values = self.sequence.snapshot();
                let mut line = String::from("[ ");
                for value in &values {
                    line.push_str(value);
                    line.push(' ');
                }
                line.push(']');
                Ok((Outcome::Listed { values }, line))
            }

            Action::Recolor { target, color } => {
                let rgb = color.to_rgb();
                let line = format!("{target} color set to {color}");
                self.palette.set(target, color);
                Ok((Outcome::Recolored { target, rgb }, line))
            }
        }
    }

    fn report(&mut self, command: &str, err: &CommandError) {
        if err.is_user_visible() {
            self.output.push(err.to_string());
        } else {
            warn!(command:% = command, kind:% = self.kind(); "{err}");
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.engine.kind()
    }

    pub fn profile(&self) -> &LayoutProfile {
        self.engine.profile()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    /// Element values in logical order.
    pub fn values(&self) -> Vec<String> {
        self.sequence.snapshot()
    }
}

fn non_empty(value: &str) -> Result<String, CommandError> {
    if value.trim().is_empty() {
        Err(CommandError::EmptyInput)
    } else {
        Ok(value.to_string())
    }
}

/// Parse index text and check it lies in `0..=max`.
fn parse_index(text: &str, max: usize, len: usize) -> Result<usize, CommandError> {
    let text = text.trim();
    text.parse::<usize>()
        .ok()
        .filter(|index| *index <= max)
        .ok_or_else(|| CommandError::InvalidIndex {
            index: text.to_string(),
            len,
        })
}
