//! Error types for table construction and declined inserts.

use core::fmt;

/// Reason an insert was declined. The table is left unchanged in both cases.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InsertError {
    /// The value is already a member of the set.
    DuplicateValue,
    /// Every slot holds a live value.
    TableFull,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicateValue => f.write_str("value is already present"),
            InsertError::TableFull => f.write_str("table is full"),
        }
    }
}

impl std::error::Error for InsertError {}

/// Invalid table configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConfigError {
    /// The slot-index policy (or builder) asked for zero slots.
    ZeroCapacity,
    /// The builder was given a capacity that the supplied slot-index policy
    /// does not agree with.
    CapacityMismatch { configured: usize, num_slots: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => f.write_str("capacity must be greater than zero"),
            ConfigError::CapacityMismatch {
                configured,
                num_slots,
            } => write!(
                f,
                "configured capacity {configured} does not match slot index policy with {num_slots} slots"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
