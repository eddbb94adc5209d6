use structviz::{
    Command, CommandError, CommandQueue, ImmediateShapes, Outcome, StructureController,
    StructureKind,
};

fn run(kind: StructureKind, commands: Vec<Command>) -> CommandQueue {
    let mut shapes = ImmediateShapes::default();
    let mut queue = CommandQueue::new(StructureController::new(kind));
    for command in commands {
        queue.submit(command, &mut shapes);
        let seq = queue.controller().sequence();
        assert_eq!(seq.connectors.len(), seq.len().saturating_sub(1));
        assert_eq!(seq.null_visible(), seq.is_empty());
    }
    queue
}

#[test]
fn list_insert_scenario() {
    let queue = run(
        StructureKind::LinkedList,
        vec![
            Command::insert("B", 0),
            Command::insert("A", 0),
            Command::insert("C", 2),
        ],
    );
    assert_eq!(queue.controller().values(), vec!["A", "B", "C"]);
}

#[test]
fn queue_dequeue_scenario() {
    let mut shapes = ImmediateShapes::default();
    let mut queue = run(
        StructureKind::Queue,
        vec![Command::enqueue("X"), Command::enqueue("Y")],
    );

    let results = queue.submit(Command::Dequeue, &mut shapes);
    assert_eq!(
        results,
        vec![Ok(Outcome::Removed {
            value: "X".to_string(),
            index: 0
        })]
    );
    assert_eq!(queue.controller().values(), vec!["Y"]);
    assert!(!queue.controller().sequence().null_visible());

    queue.submit(Command::Dequeue, &mut shapes);
    assert!(queue.controller().sequence().null_visible());
}

#[test]
fn stack_pop_scenario() {
    let mut shapes = ImmediateShapes::default();
    let mut queue = run(
        StructureKind::Stack,
        vec![Command::push("1"), Command::push("2")],
    );

    let results = queue.submit(Command::Pop, &mut shapes);
    assert_eq!(
        results,
        vec![Ok(Outcome::Removed {
            value: "2".to_string(),
            index: 0
        })]
    );
    assert_eq!(queue.controller().values(), vec!["1"]);
}

#[test]
fn empty_pop_leaves_state_unchanged() {
    let mut shapes = ImmediateShapes::default();
    for (kind, command) in [
        (StructureKind::LinkedList, Command::Pop),
        (StructureKind::Queue, Command::Dequeue),
        (StructureKind::Stack, Command::Pop),
    ] {
        let mut queue = CommandQueue::new(StructureController::new(kind));
        let sentinels = queue.controller().sequence().sentinels.clone();

        let results = queue.submit(command, &mut shapes);
        assert_eq!(results, vec![Err(CommandError::EmptyStructure)]);

        let seq = queue.controller().sequence();
        assert!(seq.is_empty());
        assert!(seq.connectors.is_empty());
        assert_eq!(seq.sentinels, sentinels);
        assert_eq!(queue.controller().output().latest(), Some("Pop failed"));
    }
}

#[test]
fn output_keeps_latest_five() {
    let queue = run(
        StructureKind::Stack,
        (0..8).map(|i| Command::push(i.to_string())).collect(),
    );
    let lines: Vec<_> = queue.controller().output().lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "3 was added to the stack");
    assert_eq!(lines[4], "7 was added to the stack");
}
