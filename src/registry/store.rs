//! Value storage indexed by declaration handle

use crate::argument::Value;

/// Stable handle to a declaration within one [`Registry`](super::Registry).
///
/// Handles index the registry's arena and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgId(pub(crate) usize);

impl ArgId {
    /// Position of the declaration in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    supplied: bool,
}

/// One slot per declaration. Slots are created with the kind's zero value
/// and never removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct ValueStore {
    slots: Vec<Slot>,
}

impl ValueStore {
    /// Append a slot holding `zero` and return its handle.
    pub(crate) fn push(&mut self, zero: Value) -> ArgId {
        self.slots.push(Slot {
            value: zero,
            supplied: false,
        });
        ArgId(self.slots.len() - 1)
    }

    /// Store a parsed value. List values append; every other kind overwrites.
    pub(crate) fn store(&mut self, id: ArgId, value: Value) {
        let slot = &mut self.slots[id.0];
        match (&mut slot.value, value) {
            (Value::List(items), Value::List(more)) => items.extend(more),
            (current, value) => *current = value,
        }
        slot.supplied = true;
    }

    pub(crate) fn get(&self, id: ArgId) -> Option<&Value> {
        self.slots.get(id.0).map(|slot| &slot.value)
    }

    pub(crate) fn is_supplied(&self, id: ArgId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.supplied)
    }

    /// Put a slot back to `zero` and clear its presence bit.
    pub(crate) fn reset(&mut self, id: ArgId, zero: Value) {
        let slot = &mut self.slots[id.0];
        slot.value = zero;
        slot.supplied = false;
    }
}
