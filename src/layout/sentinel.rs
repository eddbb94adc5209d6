// Sentinel label placement.
//
// Labels are laid out purely from the current sequence state, so they are
// simply re-arranged after every mutation.

use crate::{
    geometry::{Direction, Position},
    state::{Element, Sentinel, SentinelRole, Sequence},
};

use super::{LayoutProfile, StructureKind};

const LABEL_HEIGHT: f64 = 8.0;

/// Labels present on a freshly created structure.
pub(super) fn initial(profile: &LayoutProfile) -> Vec<Sentinel> {
    let a = profile.anchor;

    match profile.kind {
        StructureKind::LinkedList => vec![
            Sentinel::new(SentinelRole::Head, "Top", a.offset(-2.0, LABEL_HEIGHT))
                .with_pointer(a.offset(1.5, 4.0), Direction::Down),
            Sentinel::new(SentinelRole::Null, "Null", a.offset(-2.0, 0.0)),
        ],
        StructureKind::Queue => vec![
            Sentinel::new(SentinelRole::Head, "Front", a.offset(-3.0, LABEL_HEIGHT))
                .with_pointer(a.offset(1.5, 3.5), Direction::Down),
            Sentinel::new(SentinelRole::Null, "Null", a.offset(-2.0, 0.0)),
            Sentinel::new(SentinelRole::Tail, "Back", a.offset(-3.0, -LABEL_HEIGHT))
                .with_pointer(a.offset(1.5, -1.0), Direction::Up),
        ],
        StructureKind::Stack => vec![
            Sentinel::new(SentinelRole::Head, "Top", a.offset(-3.5, 0.0))
                .with_pointer(a.offset(0.0, -profile.connector_offset), Direction::Down),
            Sentinel::new(SentinelRole::Null, "Null", a.offset(-3.0, -profile.step())),
        ],
    }
}

/// Update sentinel visibility and positions from the current elements.
pub(super) fn arrange(profile: &LayoutProfile, seq: &mut Sequence) {
    let empty = seq.is_empty();
    if let Some(null) = seq.sentinel_mut(SentinelRole::Null) {
        null.visible = empty;
    }

    if profile.kind == StructureKind::Queue {
        arrange_queue_ends(profile, seq);
    }
}

fn center(profile: &LayoutProfile, element: &Element) -> f64 {
    element.position.x + profile.width(element.value()) / 2.0
}

/// Front/Back labels follow the first/last queue element.
fn arrange_queue_ends(profile: &LayoutProfile, seq: &mut Sequence) {
    let a = profile.anchor;
    let (front, back) = match (seq.elements.first(), seq.elements.last()) {
        (Some(first), Some(last)) => (center(profile, first), center(profile, last)),
        _ => (a.x + 1.5, a.x + 1.5),
    };
    let (front_label, back_label) = if seq.is_empty() {
        (a.x - 3.0, a.x - 3.0)
    } else {
        (front - 4.5, back - 5.0)
    };

    place(seq, SentinelRole::Head, front_label, front);
    place(seq, SentinelRole::Tail, back_label, back);
}

fn place(seq: &mut Sequence, role: SentinelRole, label_x: f64, pointer_x: f64) {
    if let Some(sentinel) = seq.sentinel_mut(role) {
        sentinel.position = Position::new(label_x, sentinel.position.y);
        if let Some(pointer) = sentinel.pointer.as_mut() {
            pointer.position.x = pointer_x;
        }
    }
}
