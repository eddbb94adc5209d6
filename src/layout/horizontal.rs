// Left-to-right layout shared by the linked list and the queue.
//
// Connector `i` sits at the right edge of element `i` and points at
// element `i + 1`.

use crate::{
    geometry::{Axis, Position},
    state::{Connector, Element, Sequence, ShapeHandle},
};

use super::LayoutProfile;

/// Right edge of an element's text.
fn right_edge(profile: &LayoutProfile, element: &Element) -> f64 {
    element.position.x + profile.width(element.value())
}

fn connector_at(profile: &LayoutProfile, x: f64) -> Connector {
    Connector::at(Position::new(x, profile.anchor.y + profile.connector_offset))
}

/// Move every element and connector from `index` onward by `distance`.
fn shift_tail(seq: &mut Sequence, index: usize, distance: f64) {
    for element in seq.elements.tail_mut(index) {
        element.position.shift(Axis::X, distance);
    }
    for connector in seq.connectors.tail_mut(index) {
        connector.position.shift(Axis::X, distance);
    }
}

pub(super) fn append(
    profile: &LayoutProfile,
    seq: &mut Sequence,
    value: String,
    shape: Option<ShapeHandle>,
) -> usize {
    let position = match seq.elements.last() {
        Some(last) => {
            let edge = right_edge(profile, last);
            seq.connectors.append(connector_at(profile, edge));
            Position::new(edge + profile.gap, profile.anchor.y)
        }
        None => profile.first_slot(&value),
    };

    seq.elements
        .append(Element::new(value, position).with_shape(shape));
    seq.elements.len() - 1
}

/// Remove the tail. Nothing else moves.
pub(super) fn pop_back(seq: &mut Sequence) -> Option<(usize, Element)> {
    let removed = seq.elements.remove_last()?;
    seq.connectors.remove_last();
    Some((seq.elements.len(), removed))
}

/// Remove the head and slide the rest back so the sequence stays anchored.
pub(super) fn pop_front(profile: &LayoutProfile, seq: &mut Sequence) -> Option<(usize, Element)> {
    let removed = seq.elements.remove_first()?;

    let mut distance = profile.width(removed.value());
    if seq.connectors.remove_first().is_some() {
        distance += profile.gap;
    }
    shift_tail(seq, 0, -distance);

    Some((0, removed))
}

/// Insert before an existing element. Caller guarantees `index < len`.
pub(super) fn insert_at(
    profile: &LayoutProfile,
    seq: &mut Sequence,
    index: usize,
    value: String,
    shape: Option<ShapeHandle>,
) {
    let distance = profile.width(&value) + profile.gap;
    shift_tail(seq, index, distance);

    let position = match index.checked_sub(1).and_then(|prev| seq.elements.at(prev)) {
        Some(prev) => Position::new(right_edge(profile, prev) + profile.gap, profile.anchor.y),
        None => profile.first_slot(&value),
    };

    let element = Element::new(value, position).with_shape(shape);
    let edge = right_edge(profile, &element);
    seq.connectors.insert_at(index, connector_at(profile, edge));
    seq.elements.insert_at(index, element);
}

/// Remove an element by index. Caller guarantees `index < len`.
pub(super) fn remove_at(profile: &LayoutProfile, seq: &mut Sequence, index: usize) -> Element {
    let len = seq.elements.len();

    if len == 1 {
        return seq.elements.remove_at(0);
    }

    if index == len - 1 {
        seq.connectors.remove_last();
        return seq.elements.remove_at(index);
    }

    let removed = seq.elements.remove_at(index);
    seq.connectors.remove_at(index);
    shift_tail(seq, index, -(profile.width(removed.value()) + profile.gap));
    removed
}
