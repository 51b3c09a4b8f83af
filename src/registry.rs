//! Handle Registry — generational arenas and the cross-boundary handle table.
//!
//! Responsibilities:
//! - Generation-checked slot storage for views and widgets
//! - Opaque `u64` handles encoding (generation, index), `0` = null
//! - Distinguishing Widget handles from raw View handles
//! - Detecting use-after-release instead of dereferencing freed memory

use std::marker::PhantomData;

use crate::error::{BridgeError, Result};

// ============================================================================
// Slots
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    index: u32,
    generation: u32,
}

/// Typed key into an [`Arena`].
pub trait ArenaKey: Copy {
    fn from_slot(slot: SlotId) -> Self;
    fn slot(self) -> SlotId;
}

macro_rules! arena_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(SlotId);

        impl ArenaKey for $name {
            fn from_slot(slot: SlotId) -> Self {
                Self(slot)
            }

            fn slot(self) -> SlotId {
                self.0
            }
        }
    };
}

arena_key!(
    /// Identifies a live native view.
    ViewId
);
arena_key!(
    /// Identifies a live widget.
    WidgetId
);
arena_key!(HandleSlot);

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot storage with recycled indices. A slot's generation is bumped on
/// removal so keys issued for the previous occupant no longer resolve.
pub struct Arena<K, T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
    _key: PhantomData<K>,
}

impl<K: ArenaKey, T> Default for Arena<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ArenaKey, T> Arena<K, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
            _key: PhantomData,
        }
    }

    pub fn insert(&mut self, value: T) -> K {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.value = Some(value);
            K::from_slot(SlotId {
                index,
                generation: entry.generation,
            })
        } else {
            let index = self.entries.len() as u32;
            self.entries.push(Entry {
                generation: 0,
                value: Some(value),
            });
            K::from_slot(SlotId {
                index,
                generation: 0,
            })
        }
    }

    pub fn get(&self, key: K) -> Option<&T> {
        let slot = key.slot();
        self.entries
            .get(slot.index as usize)
            .filter(|e| e.generation == slot.generation)
            .and_then(|e| e.value.as_ref())
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        let slot = key.slot();
        self.entries
            .get_mut(slot.index as usize)
            .filter(|e| e.generation == slot.generation)
            .and_then(|e| e.value.as_mut())
    }

    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: K) -> Option<T> {
        let slot = key.slot();
        let entry = self.entries.get_mut(slot.index as usize)?;
        if entry.generation != slot.generation {
            return None;
        }
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot.index);
        self.len -= 1;
        Some(value)
    }

    /// Whether `slot` was ever issued by this arena (live or released).
    fn was_issued(&self, slot: SlotId) -> bool {
        self.entries
            .get(slot.index as usize)
            .is_some_and(|e| slot.generation < e.generation)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ============================================================================
// Handles
// ============================================================================

/// Encode a handle slot as the opaque value handed to the foreign caller.
/// The low word is `index + 1` so that no live handle is ever `0`.
pub fn encode_handle(slot: HandleSlot) -> u64 {
    let slot = slot.slot();
    ((slot.generation as u64) << 32) | (slot.index as u64 + 1)
}

pub fn decode_handle(raw: u64) -> Result<HandleSlot> {
    let low = (raw & u32::MAX as u64) as u32;
    if low == 0 {
        return Err(if raw == 0 {
            BridgeError::NullHandle
        } else {
            BridgeError::UnknownHandle(raw)
        });
    }
    Ok(HandleSlot(SlotId {
        index: low - 1,
        generation: (raw >> 32) as u32,
    }))
}

/// What an owning handle refers to. The two kinds are distinct ownership
/// units even when they name the same underlying view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleTarget {
    Widget(WidgetId),
    View(ViewId),
}

impl HandleTarget {
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Widget(_) => "widget",
            Self::View(_) => "view",
        }
    }
}

#[derive(Default)]
pub struct HandleTable {
    slots: Arena<HandleSlot, HandleTarget>,
}

impl HandleTable {
    pub fn issue(&mut self, target: HandleTarget) -> u64 {
        encode_handle(self.slots.insert(target))
    }

    pub fn resolve(&self, raw: u64) -> Result<HandleTarget> {
        let slot = decode_handle(raw)?;
        match self.slots.get(slot) {
            Some(target) => Ok(*target),
            None if self.slots.was_issued(slot.slot()) => Err(BridgeError::StaleHandle(raw)),
            None => Err(BridgeError::UnknownHandle(raw)),
        }
    }

    pub fn resolve_widget(&self, raw: u64) -> Result<WidgetId> {
        match self.resolve(raw)? {
            HandleTarget::Widget(id) => Ok(id),
            other => Err(BridgeError::WrongHandleKind {
                handle: raw,
                expected: "widget",
                actual: other.kind_name(),
            }),
        }
    }

    pub fn resolve_view(&self, raw: u64) -> Result<ViewId> {
        match self.resolve(raw)? {
            HandleTarget::View(id) => Ok(id),
            other => Err(BridgeError::WrongHandleKind {
                handle: raw,
                expected: "view",
                actual: other.kind_name(),
            }),
        }
    }

    /// Invalidate a handle and return what it referred to.
    pub fn revoke(&mut self, raw: u64) -> Result<HandleTarget> {
        let target = self.resolve(raw)?;
        let slot = decode_handle(raw)?;
        self.slots.remove(slot);
        Ok(target)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_reuses_index_with_new_generation() {
        let mut arena: Arena<ViewId, u8> = Arena::new();
        let a = arena.insert(15);
        assert_eq!(arena.get(a), Some(&15));

        assert_eq!(arena.remove(a), Some(15));
        let b = arena.insert(45);
        assert_eq!(a.slot().index, b.slot().index);
        assert_ne!(a.slot().generation, b.slot().generation);

        // The old key no longer resolves to the new occupant.
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&45));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_arena_double_remove() {
        let mut arena: Arena<WidgetId, &str> = Arena::new();
        let k = arena.insert("x");
        assert!(arena.remove(k).is_some());
        assert!(arena.remove(k).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_arena_len_tracks_removals() {
        let mut arena: Arena<ViewId, u32> = Arena::new();
        let keys: Vec<_> = (0..10).map(|i| arena.insert(i)).collect();
        arena.remove(keys[0]);
        arena.remove(keys[3]);
        assert_eq!(arena.len(), 8);

        let reused = arena.insert(42);
        assert_eq!(reused.slot().index, keys[3].slot().index);
        assert!(!arena.contains(keys[3]));
        assert_eq!(arena.get(reused), Some(&42));
        assert!(arena.contains(keys[1]) && !arena.contains(keys[0]));
    }

    #[test]
    fn test_handles_are_never_zero() {
        let mut arena: Arena<HandleSlot, ()> = Arena::new();
        let slot = arena.insert(());
        assert_eq!(slot.slot().index, 0);
        assert_ne!(encode_handle(slot), 0);
        assert_eq!(decode_handle(encode_handle(slot)).unwrap(), slot);
    }

    #[test]
    fn test_null_handle_rejected() {
        let table = HandleTable::default();
        assert_eq!(table.resolve(0), Err(BridgeError::NullHandle));
        assert_eq!(table.resolve(42), Err(BridgeError::UnknownHandle(42)));
    }

    #[test]
    fn test_revoked_handle_is_stale() {
        let mut arena: Arena<ViewId, ()> = Arena::new();
        let view = arena.insert(());

        let mut table = HandleTable::default();
        let h = table.issue(HandleTarget::View(view));
        assert_eq!(table.resolve_view(h), Ok(view));

        assert_eq!(table.revoke(h), Ok(HandleTarget::View(view)));
        assert_eq!(table.resolve(h), Err(BridgeError::StaleHandle(h)));
        assert_eq!(table.revoke(h), Err(BridgeError::StaleHandle(h)));

        // A recycled slot gets a different handle value.
        let h2 = table.issue(HandleTarget::View(view));
        assert_ne!(h, h2);
        assert_eq!(table.resolve(h), Err(BridgeError::StaleHandle(h)));
    }

    #[test]
    fn test_wrong_kind_reported() {
        let mut views: Arena<ViewId, ()> = Arena::new();
        let mut table = HandleTable::default();
        let h = table.issue(HandleTarget::View(views.insert(())));
        assert_eq!(
            table.resolve_widget(h),
            Err(BridgeError::WrongHandleKind {
                handle: h,
                expected: "widget",
                actual: "view",
            })
        );
    }
}
