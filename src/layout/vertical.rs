// Top-down layout for the stack.
//
// The newest element always takes the top slot right under the "Top"
// label; older elements move down one step per push. Connectors occupy
// fixed slots below the label's pointer and are only appended/removed at
// the bottom.

use crate::{
    geometry::{Axis, Position},
    state::{Connector, Element, Sequence, ShapeHandle},
};

use super::LayoutProfile;

fn centered_x(profile: &LayoutProfile, value: &str) -> f64 {
    profile.anchor.x - profile.width(value) / 2.0
}

pub(super) fn push(
    profile: &LayoutProfile,
    seq: &mut Sequence,
    value: String,
    shape: Option<ShapeHandle>,
) -> usize {
    let step = profile.step();

    let position = match seq.elements.first().map(|top| top.position.y) {
        Some(top_y) => {
            for element in seq.elements.iter_mut() {
                element.position.shift(Axis::Y, -step);
            }

            let above = seq
                .connectors
                .last()
                .map(|c| c.position.y)
                .unwrap_or(profile.anchor.y - profile.connector_offset);
            seq.connectors
                .append(Connector::at(Position::new(profile.anchor.x, above - step)));

            Position::new(centered_x(profile, &value), top_y)
        }
        None => profile.first_slot(&value),
    };

    seq.elements
        .insert_at(0, Element::new(value, position).with_shape(shape));
    0
}

pub(super) fn pop(profile: &LayoutProfile, seq: &mut Sequence) -> Option<(usize, Element)> {
    let removed = seq.elements.remove_first()?;

    let step = profile.step();
    for element in seq.elements.iter_mut() {
        element.position.shift(Axis::Y, step);
    }
    seq.connectors.remove_last();

    Some((0, removed))
}
