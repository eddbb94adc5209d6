// Per-structure scene state.
//
// One `Sequence` per demo instance. There is no shared or global state:
// each controller owns its own registries.

use super::{Connector, Element, Registry, Sentinel, SentinelRole};

/// Elements, connectors and sentinels of one visualized structure.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub elements: Registry<Element>,
    pub connectors: Registry<Connector>,
    pub sentinels: Vec<Sentinel>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn sentinel(&self, role: SentinelRole) -> Option<&Sentinel> {
        self.sentinels.iter().find(|s| s.role == role)
    }

    pub fn sentinel_mut(&mut self, role: SentinelRole) -> Option<&mut Sentinel> {
        self.sentinels.iter_mut().find(|s| s.role == role)
    }

    /// Whether the empty marker is currently shown.
    pub fn null_visible(&self) -> bool {
        self.sentinel(SentinelRole::Null)
            .is_some_and(|sentinel| sentinel.visible)
    }

    /// Iterate element values in logical order without touching state.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(Element::value)
    }

    /// Owned snapshot of the element values in logical order.
    pub fn snapshot(&self) -> Vec<String> {
        self.values().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn test_snapshot_is_restartable() {
        let mut seq = Sequence::new();
        seq.elements.append(Element::new("a", Position::default()));
        seq.elements.append(Element::new("b", Position::default()));

        let first: Vec<_> = seq.values().collect();
        let second: Vec<_> = seq.values().collect();
        assert_eq!(first, second);
        assert_eq!(seq.snapshot(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_null_visible_without_sentinel() {
        let seq = Sequence::new();
        assert!(!seq.null_visible());
    }
}
