//! Host slot contract and an in-memory host implementation.
//!
//! Slots belong to the host form engine. The coordinator only calls through
//! [`SlotArray`] / [`SlotHandle`] while an operation runs, so every mutator
//! takes `&self` and implementations synchronize internally.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rusty_file_slots_common::{slot_name, SLOT_NAME_PREFIX};

/// Lifecycle state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No value and no transfer in flight.
    Empty,
    /// A transfer is in flight.
    Awaiting,
    /// Value (and usually a reference) is set.
    Filled,
}

/// Point-in-time copy of a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Stored value (the original file name).
    pub value: Option<String>,
    /// Storage reference, or inline content when no adapter is used.
    pub reference: Option<String>,
    /// Whether a transfer is in flight.
    pub awaiting: bool,
}

impl SlotSnapshot {
    /// Check if the slot holds a value.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Derived lifecycle state.
    pub fn state(&self) -> SlotState {
        if self.awaiting {
            SlotState::Awaiting
        } else if self.has_value() {
            SlotState::Filled
        } else {
            SlotState::Empty
        }
    }
}

/// Handle to one host-owned value slot.
pub trait SlotHandle: Send + Sync {
    /// Whether the slot holds a value.
    fn has_value(&self) -> bool;

    /// Whether a transfer is in flight.
    fn is_awaiting(&self) -> bool;

    /// Stored value (the original file name).
    fn value(&self) -> Option<String>;

    /// Storage reference, or inline content.
    fn reference(&self) -> Option<String>;

    /// Mark a transfer as in flight.
    fn mark_awaiting(&self);

    /// Store a value and reference; ends any await state.
    fn set(&self, value: String, reference: Option<String>);

    /// End the await state, keeping value and reference.
    fn cancel_await(&self);

    /// Reset to empty, ending any await state.
    fn clear(&self);

    /// Point-in-time copy of the slot.
    fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            value: self.value(),
            reference: self.reference(),
            awaiting: self.is_awaiting(),
        }
    }

    /// Derived lifecycle state.
    fn state(&self) -> SlotState {
        self.snapshot().state()
    }
}

/// The host's set of indexed slots.
pub trait SlotArray: Send + Sync {
    /// Slot at `index`, if the host defines one.
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle>;
}

/// In-memory slot guarded by a lock.
#[derive(Debug, Default)]
pub struct MemorySlot {
    state: RwLock<SlotSnapshot>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SlotSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SlotSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotHandle for MemorySlot {
    fn has_value(&self) -> bool {
        self.read().has_value()
    }

    fn is_awaiting(&self) -> bool {
        self.read().awaiting
    }

    fn value(&self) -> Option<String> {
        self.read().value.clone()
    }

    fn reference(&self) -> Option<String> {
        self.read().reference.clone()
    }

    fn mark_awaiting(&self) {
        self.write().awaiting = true;
    }

    fn set(&self, value: String, reference: Option<String>) {
        let mut state = self.write();
        state.value = Some(value);
        state.reference = reference;
        state.awaiting = false;
    }

    fn cancel_await(&self) {
        self.write().awaiting = false;
    }

    fn clear(&self) {
        *self.write() = SlotSnapshot::default();
    }

    fn snapshot(&self) -> SlotSnapshot {
        self.read().clone()
    }
}

/// In-memory host slot array with slots named `file-0`, `file-1`, ...
#[derive(Debug, Default)]
pub struct MemorySlotArray {
    slots: Vec<MemorySlot>,
}

impl MemorySlotArray {
    /// Create `count` empty slots.
    pub fn new(count: usize) -> Self {
        let mut array = Self::default();
        array.resize(count);
        array
    }

    /// Redefine the slot set for a new file count.
    ///
    /// Slots at or beyond `count` are dropped; missing slots are added empty.
    /// Slots below `count` keep their state.
    pub fn resize(&mut self, count: usize) {
        self.slots.truncate(count);
        while self.slots.len() < count {
            self.slots.push(MemorySlot::new());
        }
    }

    /// Number of defined slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slots are defined.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Look up a slot by host name (`file-{index}`).
    pub fn by_name(&self, name: &str) -> Option<&dyn SlotHandle> {
        let index: usize = name.strip_prefix(SLOT_NAME_PREFIX)?.parse().ok()?;
        if slot_name(index) != name {
            return None;
        }
        self.slot(index)
    }

    /// Snapshots of every slot, in index order.
    pub fn snapshots(&self) -> Vec<SlotSnapshot> {
        self.slots.iter().map(|slot| slot.snapshot()).collect()
    }
}

impl SlotArray for MemorySlotArray {
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle> {
        self.slots.get(index).map(|slot| slot as &dyn SlotHandle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lifecycle() {
        let slot: MemorySlot = MemorySlot::new();
        assert_eq!(slot.state(), SlotState::Empty);

        slot.mark_awaiting();
        assert_eq!(slot.state(), SlotState::Awaiting);
        assert!(!slot.has_value());

        slot.set("a.png".to_string(), Some("ref-1".to_string()));
        assert_eq!(slot.state(), SlotState::Filled);
        assert_eq!(slot.value().as_deref(), Some("a.png"));
        assert_eq!(slot.reference().as_deref(), Some("ref-1"));

        slot.clear();
        assert_eq!(slot.snapshot(), SlotSnapshot::default());
    }

    #[test]
    fn test_cancel_await_keeps_value() {
        let slot: MemorySlot = MemorySlot::new();
        slot.set("a.png".to_string(), Some("ref-1".to_string()));

        slot.mark_awaiting();
        assert_eq!(slot.state(), SlotState::Awaiting);
        assert!(slot.has_value());

        slot.cancel_await();
        assert_eq!(slot.state(), SlotState::Filled);
        assert_eq!(slot.reference().as_deref(), Some("ref-1"));
    }

    #[test]
    fn test_clear_ends_await() {
        let slot: MemorySlot = MemorySlot::new();
        slot.mark_awaiting();
        slot.clear();
        assert_eq!(slot.state(), SlotState::Empty);
    }

    #[test]
    fn test_array_resize_keeps_existing() {
        let mut array: MemorySlotArray = MemorySlotArray::new(2);
        array
            .slot(1)
            .unwrap()
            .set("keep.txt".to_string(), Some("r".to_string()));

        array.resize(4);
        assert_eq!(array.len(), 4);
        assert_eq!(array.slot(1).unwrap().value().as_deref(), Some("keep.txt"));
        assert_eq!(array.slot(3).unwrap().state(), SlotState::Empty);

        array.resize(1);
        assert_eq!(array.len(), 1);
        assert!(array.slot(1).is_none());
    }

    #[test]
    fn test_array_by_name() {
        let array: MemorySlotArray = MemorySlotArray::new(3);
        array.slot(2).unwrap().set("c.pdf".to_string(), None);

        assert_eq!(array.by_name("file-2").unwrap().value().as_deref(), Some("c.pdf"));
        assert!(array.by_name("file-3").is_none());
        assert!(array.by_name("file-02").is_none());
        assert!(array.by_name("slot-0").is_none());
    }

    #[test]
    fn test_snapshots() {
        let array: MemorySlotArray = MemorySlotArray::new(2);
        array.slot(0).unwrap().mark_awaiting();

        let states: Vec<SlotState> = array.snapshots().iter().map(SlotSnapshot::state).collect();
        assert_eq!(states, vec![SlotState::Awaiting, SlotState::Empty]);
    }
}
