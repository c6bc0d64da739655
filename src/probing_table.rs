//! ProbingTable: fixed-capacity string set with linear probing and
//! tombstone-triggered compaction.

use crate::error::{ConfigError, InsertError};
use crate::slot_index::{FnSlotIndex, HashedSlotIndex, SlotIndex};
use core::fmt;

/// Tombstone count above which the next accepted insert compacts the table.
pub const DEFAULT_TOMBSTONE_THRESHOLD: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(String),
}

fn empty_slots(capacity: usize) -> Box<[Slot]> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

#[inline]
fn next_slot(pos: usize, capacity: usize) -> usize {
    let next = pos + 1;
    if next == capacity {
        0
    } else {
        next
    }
}

/// A set of strings stored directly in a fixed array of slots.
///
/// The number of slots comes from the `SlotIndex` policy and never changes.
/// Removal leaves a tombstone so that later members of the same probe
/// cluster stay reachable; once more than `tombstone_threshold` tombstones
/// accumulate, the next accepted insert rebuilds the array in place.
#[derive(Clone)]
pub struct ProbingTable<I = HashedSlotIndex> {
    index: I,
    slots: Box<[Slot]>,
    live: usize,
    tombstones: usize,
    tombstone_threshold: usize,
}

impl ProbingTable {
    /// Table with `capacity` slots hashed by `HashedSlotIndex`.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_slot_index(HashedSlotIndex::new(capacity))
    }

    pub fn builder() -> ProbingTableBuilder {
        ProbingTableBuilder::new()
    }
}

impl<F> ProbingTable<FnSlotIndex<F>>
where
    F: Fn(&str) -> usize,
{
    /// Table with `capacity` slots whose probes start at `index(value)`.
    pub fn from_fn(capacity: usize, index: F) -> Result<Self, ConfigError> {
        Self::with_slot_index(FnSlotIndex::new(capacity, index))
    }
}

impl<I: SlotIndex> ProbingTable<I> {
    pub fn with_slot_index(index: I) -> Result<Self, ConfigError> {
        Self::with_threshold(index, DEFAULT_TOMBSTONE_THRESHOLD)
    }

    fn with_threshold(index: I, tombstone_threshold: usize) -> Result<Self, ConfigError> {
        let capacity = index.num_slots();
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            index,
            slots: empty_slots(capacity),
            live: 0,
            tombstones: 0,
            tombstone_threshold,
        })
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn tombstone_threshold(&self) -> usize {
        self.tombstone_threshold
    }

    fn start_of(&self, value: &str) -> usize {
        let start = self.index.index_of(value);
        debug_assert!(
            start < self.slots.len(),
            "slot index {start} out of range for capacity {}",
            self.slots.len()
        );
        start
    }

    /// Slot holding `value`, if any. Stops at the first empty slot and after
    /// at most `capacity` steps.
    fn find(&self, value: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let mut pos = self.start_of(value);
        for _ in 0..capacity {
            match &self.slots[pos] {
                Slot::Empty => return None,
                Slot::Occupied(v) if v == value => return Some(pos),
                _ => {}
            }
            pos = next_slot(pos, capacity);
        }
        None
    }

    /// Writes `value` into the first empty or tombstone slot of its probe
    /// sequence. Does not touch `live`.
    ///
    /// Callers guarantee `live < capacity`, so a vacant slot exists.
    fn place(&mut self, value: String) {
        let capacity = self.slots.len();
        let mut pos = self.start_of(&value);
        for _ in 0..capacity {
            match self.slots[pos] {
                Slot::Occupied(_) => pos = next_slot(pos, capacity),
                Slot::Tombstone => {
                    self.tombstones -= 1;
                    self.slots[pos] = Slot::Occupied(value);
                    return;
                }
                Slot::Empty => {
                    self.slots[pos] = Slot::Occupied(value);
                    return;
                }
            }
        }
        unreachable!("no vacant slot with {} live of {capacity}", self.live);
    }

    /// Rebuilds the slot array at the same capacity with no tombstones.
    fn compact(&mut self) {
        let capacity = self.slots.len();
        let reclaimed = self.tombstones;
        let old = core::mem::replace(&mut self.slots, empty_slots(capacity));
        let survivors: Vec<String> = old
            .into_vec()
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Occupied(v) => Some(v),
                _ => None,
            })
            .collect();
        debug_assert_eq!(survivors.len(), self.live);
        self.tombstones = 0;
        for value in survivors {
            self.place(value);
        }
        tracing::debug!(capacity, live = self.live, reclaimed, "compacted probing table");
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Adds `value`, reporting why it was declined if the set is full or
    /// already holds it.
    pub fn try_insert<V>(&mut self, value: V) -> Result<(), InsertError>
    where
        V: AsRef<str> + Into<String>,
    {
        if self.live == self.slots.len() {
            tracing::trace!(capacity = self.slots.len(), "insert declined: table full");
            return Err(InsertError::TableFull);
        }
        if self.contains(value.as_ref()) {
            return Err(InsertError::DuplicateValue);
        }
        if self.tombstones > self.tombstone_threshold {
            self.compact();
        }
        self.place(value.into());
        self.live += 1;
        Ok(())
    }

    /// Adds `value`. Returns false, leaving the table unchanged, if the set is
    /// full or already holds it.
    pub fn insert<V>(&mut self, value: V) -> bool
    where
        V: AsRef<str> + Into<String>,
    {
        self.try_insert(value).is_ok()
    }

    /// Removes `value`, leaving a tombstone in its slot. Returns false if it
    /// was not present.
    pub fn remove(&mut self, value: &str) -> bool {
        let Some(pos) = self.find(value) else {
            return false;
        };
        self.slots[pos] = Slot::Tombstone;
        self.tombstones += 1;
        self.live -= 1;
        true
    }

    /// Live values in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

impl<I: SlotIndex> fmt::Debug for ProbingTable<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over live values of a `ProbingTable`.
pub struct Iter<'a> {
    it: core::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|slot| match slot {
            Slot::Occupied(v) => Some(v.as_str()),
            _ => None,
        })
    }
}

impl<'a, I: SlotIndex> IntoIterator for &'a ProbingTable<I> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Configures capacity and compaction threshold before building a table.
#[derive(Clone, Debug)]
pub struct ProbingTableBuilder {
    capacity: Option<usize>,
    tombstone_threshold: usize,
}

impl Default for ProbingTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbingTableBuilder {
    pub fn new() -> Self {
        Self {
            capacity: None,
            tombstone_threshold: DEFAULT_TOMBSTONE_THRESHOLD,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Compact on the next accepted insert once tombstones exceed this count.
    pub fn tombstone_threshold(mut self, threshold: usize) -> Self {
        self.tombstone_threshold = threshold;
        self
    }

    /// Builds a table using `HashedSlotIndex`. A capacity is required.
    pub fn build(self) -> Result<ProbingTable, ConfigError> {
        let capacity = self.capacity.ok_or(ConfigError::ZeroCapacity)?;
        ProbingTable::with_threshold(HashedSlotIndex::new(capacity), self.tombstone_threshold)
    }

    /// Builds a table over a custom policy. If a capacity was configured it
    /// must equal `index.num_slots()`.
    pub fn build_with<I: SlotIndex>(self, index: I) -> Result<ProbingTable<I>, ConfigError> {
        let num_slots = index.num_slots();
        if let Some(configured) = self.capacity {
            if configured != num_slots {
                return Err(ConfigError::CapacityMismatch {
                    configured,
                    num_slots,
                });
            }
        }
        ProbingTable::with_threshold(index, self.tombstone_threshold)
    }
}
