// src/main.rs
//
// Native sanity run: drives each demo through a short script and prints
// the resulting layout and output area.

use log::{LevelFilter, info};

use structviz::{
    ColorTarget, Command, CommandQueue, ImmediateShapes, Primitive, StructureController,
    StructureKind, primitives,
};

/// ===============================
/// Scripts
/// ===============================

fn script(kind: StructureKind) -> Vec<Command> {
    match kind {
        StructureKind::LinkedList => vec![
            Command::insert("B", 0),
            Command::insert("A", 0),
            Command::insert("C", 2),
            Command::push("tail"),
            Command::delete(1),
            Command::insert("x", 9),
            Command::Iterate,
        ],
        StructureKind::Queue => vec![
            Command::enqueue("X"),
            Command::enqueue("Y"),
            Command::enqueue("Zed"),
            Command::Dequeue,
            Command::recolor(ColorTarget::Connector, "#00aa00"),
            Command::Iterate,
        ],
        StructureKind::Stack => vec![
            Command::push("1"),
            Command::push("2"),
            Command::push("33"),
            Command::Pop,
            Command::Iterate,
        ],
    }
}

fn print_frame(controller: &StructureController) {
    for primitive in primitives(controller) {
        match primitive {
            Primitive::Node {
                value, position, ..
            } => println!("  node {value:>6} @ ({:.2}, {:.2})", position.x, position.y),
            Primitive::Connector { position, .. } => {
                println!("  arrow        @ ({:.2}, {:.2})", position.x, position.y)
            }
            Primitive::Label { text, position, .. } => {
                println!("  label {text:>6} @ ({:.2}, {:.2})", position.x, position.y)
            }
            Primitive::Pointer { .. } => {}
        }
    }
}

/// ===============================
/// Main
/// ===============================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(LevelFilter::Info)
        .init();

    info!("Starting structure sanity run");

    let mut shapes = ImmediateShapes::default();

    for kind in [
        StructureKind::LinkedList,
        StructureKind::Queue,
        StructureKind::Stack,
    ] {
        println!("--- {kind} ---");

        let mut queue = CommandQueue::new(StructureController::new(kind));
        for command in script(kind) {
            queue.submit(command, &mut shapes);
        }

        let controller = queue.controller();
        print_frame(controller);
        println!("  output:");
        for line in controller.output().lines() {
            println!("    {line}");
        }
    }

    info!("Sanity run completed");
}
