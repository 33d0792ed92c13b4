//! Frame construction.

use std::collections::BTreeMap;

/// One atomic batch of slot assignments.
///
/// Distinct slots are commutative; setting the same slot twice keeps the
/// later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    slots: BTreeMap<u16, u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `slot`.
    pub fn set(&mut self, slot: u16, value: u8) {
        self.slots.insert(slot, value);
    }

    /// Value staged for `slot`, if any.
    pub fn get(&self, slot: u16) -> Option<u8> {
        self.slots.get(&slot).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterate `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.slots.iter().map(|(&s, &v)| (s, v))
    }
}

impl FromIterator<(u16, u8)> for Frame {
    fn from_iter<I: IntoIterator<Item = (u16, u8)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
