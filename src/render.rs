// src/render.rs
//
// Frame snapshot handed to the renderer.
//
// The renderer itself (scene graph, camera, materials) is external. Each
// frame it receives a flat list of positioned primitives built from the
// current controller state.

use crate::{
    controller::StructureController,
    geometry::{Direction, Position},
    layout::StructureKind,
    state::ShapeHandle,
};

/// One drawable item of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Node {
        value: String,
        position: Position,
        shape: Option<ShapeHandle>,
        color: u32,
    },
    Connector {
        position: Position,
        direction: Direction,
        color: u32,
    },
    Label {
        text: String,
        position: Position,
        color: u32,
    },
    Pointer {
        position: Position,
        direction: Direction,
        color: u32,
    },
}

/// Draws a frame of primitives.
pub trait Renderer {
    fn draw(&mut self, primitives: &[Primitive]);
}

/// Build the primitives for the current state of `controller`.
///
/// Hidden sentinels are left out.
pub fn primitives(controller: &StructureController) -> Vec<Primitive> {
    let seq = controller.sequence();
    let palette = controller.palette();
    let node_color = palette.node.to_rgb();
    let connector_color = palette.connector.to_rgb();
    let connector_direction = match controller.kind() {
        StructureKind::Stack => Direction::Down,
        StructureKind::LinkedList | StructureKind::Queue => Direction::Right,
    };

    let mut frame = Vec::with_capacity(seq.len() * 2 + seq.sentinels.len() * 2);

    frame.extend(seq.elements.iter().map(|element| Primitive::Node {
        value: element.value().to_string(),
        position: element.position,
        shape: element.shape(),
        color: node_color,
    }));

    frame.extend(seq.connectors.iter().map(|connector| Primitive::Connector {
        position: connector.position,
        direction: connector_direction,
        color: connector_color,
    }));

    for sentinel in seq.sentinels.iter().filter(|s| s.visible) {
        frame.push(Primitive::Label {
            text: sentinel.text.clone(),
            position: sentinel.position,
            color: node_color,
        });
        if let Some(pointer) = sentinel.pointer {
            frame.push(Primitive::Pointer {
                position: pointer.position,
                direction: pointer.direction,
                color: connector_color,
            });
        }
    }

    frame
}

/// Render one frame of `controller` with `renderer`.
pub fn render_frame(controller: &StructureController, renderer: &mut impl Renderer) {
    let frame = primitives(controller);
    renderer.draw(&frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Command;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Primitive>>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, primitives: &[Primitive]) {
            self.frames.push(primitives.to_vec());
        }
    }

    fn count(frame: &[Primitive], pred: impl Fn(&Primitive) -> bool) -> usize {
        frame.iter().filter(|p| pred(p)).count()
    }

    #[test]
    fn test_empty_list_frame() {
        let list = StructureController::new(StructureKind::LinkedList);
        let frame = primitives(&list);

        // "Top" + its pointer + "Null"
        assert_eq!(frame.len(), 3);
        assert!(frame.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "Null"
        )));
    }

    #[test]
    fn test_null_hidden_when_populated() {
        let mut stack = StructureController::new(StructureKind::Stack);
        stack.execute(&Command::push("1")).unwrap();
        stack.execute(&Command::push("2")).unwrap();

        let mut recorder = Recorder::default();
        render_frame(&stack, &mut recorder);
        let frame = &recorder.frames[0];

        assert_eq!(count(frame, |p| matches!(p, Primitive::Node { .. })), 2);
        assert_eq!(
            count(frame, |p| matches!(
                p,
                Primitive::Connector {
                    direction: Direction::Down,
                    ..
                }
            )),
            1
        );
        assert!(!frame.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "Null"
        )));
    }

    #[test]
    fn test_colors_follow_palette() {
        let mut queue = StructureController::new(StructureKind::Queue);
        queue.execute(&Command::enqueue("a")).unwrap();
        queue
            .execute(&Command::recolor(
                crate::state::ColorTarget::Node,
                "#123456",
            ))
            .unwrap();

        let frame = primitives(&queue);
        let node_color = frame.iter().find_map(|p| match p {
            Primitive::Node { color, .. } => Some(*color),
            _ => None,
        });
        assert_eq!(node_color, Some(0x123456));
    }
}
