//! Slot-index policies: the hashing capability a `ProbingTable` is built on.
//!
//! The table never hashes values itself. It asks its policy for the number
//! of slots once, at construction, and for the starting slot of every probe.

use core::fmt;
use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Maps string values to starting slots of a fixed-size table.
///
/// Implementations must be deterministic: the same value always maps to the
/// same slot, and every returned index is `< num_slots()`. `num_slots()`
/// must not change after the table has been constructed.
pub trait SlotIndex {
    /// Number of slots the table should allocate.
    fn num_slots(&self) -> usize;

    /// Starting slot for `value`, in `0..num_slots()`.
    fn index_of(&self, value: &str) -> usize;
}

impl<T: SlotIndex + ?Sized> SlotIndex for &T {
    fn num_slots(&self) -> usize {
        (**self).num_slots()
    }
    fn index_of(&self, value: &str) -> usize {
        (**self).index_of(value)
    }
}

impl<T: SlotIndex + ?Sized> SlotIndex for Box<T> {
    fn num_slots(&self) -> usize {
        (**self).num_slots()
    }
    fn index_of(&self, value: &str) -> usize {
        (**self).index_of(value)
    }
}

/// A fixed slot count paired with a plain index function.
#[derive(Clone)]
pub struct FnSlotIndex<F> {
    num_slots: usize,
    index: F,
}

impl<F> FnSlotIndex<F>
where
    F: Fn(&str) -> usize,
{
    pub fn new(num_slots: usize, index: F) -> Self {
        Self { num_slots, index }
    }
}

impl<F> SlotIndex for FnSlotIndex<F>
where
    F: Fn(&str) -> usize,
{
    #[inline]
    fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[inline]
    fn index_of(&self, value: &str) -> usize {
        (self.index)(value)
    }
}

impl<F> fmt::Debug for FnSlotIndex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSlotIndex")
            .field("num_slots", &self.num_slots)
            .finish_non_exhaustive()
    }
}

/// Hashes values with a `BuildHasher` and reduces the hash modulo the slot
/// count.
///
/// The default builder is hashbrown's unseeded `DefaultHashBuilder`, so the
/// mapping is stable across tables of the same size.
#[derive(Clone, Debug)]
pub struct HashedSlotIndex<S = DefaultHashBuilder> {
    num_slots: usize,
    hasher: S,
}

impl HashedSlotIndex {
    pub fn new(num_slots: usize) -> Self {
        Self::with_hasher(num_slots, DefaultHashBuilder::default())
    }
}

impl<S: BuildHasher> HashedSlotIndex<S> {
    pub fn with_hasher(num_slots: usize, hasher: S) -> Self {
        Self { num_slots, hasher }
    }
}

impl<S: BuildHasher> SlotIndex for HashedSlotIndex<S> {
    #[inline]
    fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[inline]
    fn index_of(&self, value: &str) -> usize {
        debug_assert!(self.num_slots > 0);
        (self.hasher.hash_one(value) % self.num_slots as u64) as usize
    }
}
