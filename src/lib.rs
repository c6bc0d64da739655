//! probing-set: a fixed-capacity set of strings stored with open
//! addressing, linear probing, and tombstone-triggered compaction.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small set primitive whose memory is bounded up front by a
//!   caller-supplied hashing policy.
//! - Layers:
//!   - SlotIndex: external capability that fixes the slot count and maps a
//!     value to the slot where its probe starts. `FnSlotIndex` adapts a
//!     closure; `HashedSlotIndex` hashes with a `BuildHasher`.
//!   - ProbingTable<I>: owns a fixed array of slots
//!     (`Empty | Tombstone | Occupied(String)`) plus `live` and
//!     `tombstones` counters.
//!
//! Constraints
//! - Capacity never changes. A full table declines inserts; nothing grows.
//! - Every operation finishes in at most `capacity` probe steps.
//! - Declined operations (full, duplicate, absent) are reported as `false`
//!   or an `InsertError` and never mutate the table.
//! - `live + tombstones + empty == capacity` holds between operations.
//!
//! Probing
//! - Lookups walk forward from the start slot, wrapping, and stop at the
//!   first empty slot or after one full pass. Tombstones do not stop a
//!   lookup: a removed value may sit between the start slot and a later
//!   member of the same cluster.
//! - Inserts claim the first empty or tombstone slot on the walk.
//!
//! Compaction
//! - When tombstones exceed the configured threshold, the next accepted
//!   insert rebuilds the slot array at the same capacity: survivors are
//!   collected from the old array, then re-placed into a fresh all-empty
//!   one. Membership is unchanged and the tombstone count drops to zero.
//!
//! Notes and non-goals
//! - No internal synchronization; share across threads behind a lock.
//! - No associated values, no resizing, no persistence.
//! - The slot-index policy must return indices below its `num_slots()`;
//!   this is only checked in debug builds.

pub mod error;
pub mod probing_table;
mod probing_table_proptest;
pub mod slot_index;

// Public surface
pub use error::{ConfigError, InsertError};
pub use probing_table::{ProbingTable, ProbingTableBuilder, DEFAULT_TOMBSTONE_THRESHOLD};
pub use slot_index::{FnSlotIndex, HashedSlotIndex, SlotIndex};
