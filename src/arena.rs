//! Generational slot storage with stable handles.
//!
//! Slots are reused after removal, but every removal bumps the slot's
//! generation, so a handle to a removed value never resolves to whatever is
//! stored there later. Iteration follows insertion order regardless of which
//! slot a value landed in.

use alloc::vec::Vec;
use core::fmt;

/// Raw handle into an [`Arena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    index: u32,
    generation: u32,
}

impl Key {
    pub fn index(self) -> u32 { self.index }
    pub fn generation(self) -> u32 { self.generation }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Handle to a particle owned by a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub(crate) Key);

/// Handle to a spring owned by a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpringId(pub(crate) Key);

impl ParticleId {
    pub fn key(self) -> Key { self.0 }
}

impl SpringId {
    pub fn key(self) -> Key { self.0 }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "particle {}", self.0)
    }
}

impl fmt::Display for SpringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spring {}", self.0)
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Insertion-ordered storage addressed by generational [`Key`]s.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    order: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> Key {
        let key = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.value = Some(value);
                Key { index, generation: slot.generation }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, value: Some(value) });
                Key { index, generation: 0 }
            }
        };
        self.order.push(key.index);
        key
    }

    pub fn remove(&mut self, key: Key) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        let slot = &mut self.slots[key.index as usize];
        let value = slot.value.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index);
        self.order.retain(|&index| index != key.index);
        value
    }

    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: Key) -> Option<&T> {
        self.slots
            .get(key.index as usize)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        self.slots
            .get_mut(key.index as usize)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &T)> + '_ {
        self.order.iter().filter_map(move |&index| {
            let slot = &self.slots[index as usize];
            slot.value
                .as_ref()
                .map(|value| (Key { index, generation: slot.generation }, value))
        })
    }

    /// Visit live entries mutably, in insertion order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(Key, &mut T)) {
        for &index in &self.order {
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation;
            if let Some(value) = slot.value.as_mut() {
                f(Key { index, generation }, value);
            }
        }
    }

    /// Remove every entry for which `keep` returns false. Returns how many
    /// entries were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(Key, &T) -> bool) -> usize {
        let doomed: Vec<Key> = self
            .iter()
            .filter(|(key, value)| !keep(*key, *value))
            .map(|(key, _)| key)
            .collect();
        for key in &doomed {
            self.remove(*key);
        }
        doomed.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
