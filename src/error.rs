// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use thiserror::Error;

/// Errors returned by [`DenseIndexSet`](crate::DenseIndexSet) operations.
///
/// None of these are transient. They all describe a caller mistake, and the set is left exactly
/// as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenseSetError {
    #[error("value {value} is outside of the domain [0, {capacity})")]
    OutOfDomain { value: i128, capacity: usize },

    #[error("value {value} is not in the set")]
    NotFound { value: usize },

    #[error("cannot pop from an empty set")]
    Empty,

    #[error("sets are not compatible: capacity {left} vs {right}")]
    Incompatible { left: usize, right: usize },

    #[error("capacity {capacity} does not fit into {width}")]
    CapacityTooLarge {
        capacity: usize,
        width: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DenseSetError>;
