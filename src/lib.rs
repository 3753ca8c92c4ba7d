// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

mod algebra;
mod bulk;
mod error;
mod numeric;
mod storage;

pub use error::{DenseSetError, Result};
pub use numeric::{Candidate, SetIndex, SetValue};

/// A set of integers from a bounded domain `[0, capacity)`, based on the sparse set layout.
///
/// Membership test, insertion and removal are O(1). Batched set algebra (union, intersection,
/// difference and symmetric difference) runs in a few passes over the batch instead of calling
/// the point operations one element at a time.
///
/// Doesn't require any hashing, but the domain has to be known when the set is created, and the
/// capacity never changes afterwards. Values are stored packed in insertion order, which
/// removals and bulk operations are free to shuffle.
///
/// `V` is the type of the stored values and `I` is the signed type of the sparse positions. Both
/// have to be wide enough for `capacity - 1`, which is checked on creation.
///
/// Memory consumption is `capacity * (size_of::<V>() + size_of::<I>())` bytes, allocated once.
#[derive(Clone)]
pub struct DenseIndexSet<V = u32, I = i32> {
    // sparse positions and dense values
    storage: storage::DenseIndexStorage<V, I>,
}

impl<V: SetValue, I: SetIndex> DenseIndexSet<V, I> {
    /// Creates an empty set over the domain `[0, capacity)`.
    ///
    /// Allocates both arrays up front. Fails if `capacity - 1` can't be represented by `V` or
    /// by `I`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > 0 {
            let max_value = (capacity - 1) as u128;
            if max_value > V::MAX {
                return Err(DenseSetError::CapacityTooLarge {
                    capacity,
                    width: V::WIDTH,
                });
            }
            if max_value > I::MAX_POSITION {
                return Err(DenseSetError::CapacityTooLarge {
                    capacity,
                    width: I::WIDTH,
                });
            }
        }

        log::debug!(
            "creating dense index set with capacity {capacity} ({}/{})",
            V::WIDTH,
            I::WIDTH
        );

        Ok(Self {
            storage: storage::DenseIndexStorage::with_capacity(capacity),
        })
    }

    /// Creates a set over `[0, capacity)` and fills it with the given values.
    ///
    /// Duplicates are allowed in the input.
    pub fn from_values<T: Candidate>(
        capacity: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self> {
        let mut set = Self::new(capacity)?;
        set.update(values)?;
        Ok(set)
    }

    /// Returns the size of the domain. Every member is smaller than this.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the number of elements in the set.
    ///
    /// O(1) time complexity.
    pub fn size(&self) -> usize {
        self.storage.size()
    }

    /// Returns true if the set is empty.
    ///
    /// O(1) time complexity.
    pub fn is_empty(&self) -> bool {
        self.storage.size() == 0
    }

    /// Returns the members packed in their current dense order.
    pub fn values(&self) -> &[V] {
        self.storage.live_values()
    }

    /// Returns an iterator over the members in their current dense order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, V>> {
        self.storage.live_values().iter().copied()
    }

    /// Returns true if the value is in the set.
    ///
    /// O(1) time complexity.
    pub fn contains<T: Candidate>(&self, value: T) -> Result<bool> {
        let value = self.to_domain(value)?;
        Ok(self.storage.is_member(value))
    }

    /// Adds a value to the set. Returns false if it was already there.
    ///
    /// O(1) time complexity.
    pub fn add<T: Candidate>(&mut self, value: T) -> Result<bool> {
        let value = self.to_domain(value)?;
        if self.storage.is_member(value) {
            return Ok(false);
        }

        self.storage.push(value);
        Ok(true)
    }

    /// Removes a value from the set, swapping the last element into its place.
    ///
    /// O(1) time complexity, however changes the order of elements.
    pub fn remove<T: Candidate>(&mut self, value: T) -> Result<()> {
        let value = self.to_domain(value)?;
        match self.storage.position_of(value) {
            Some(position) => {
                self.storage.swap_remove_at(position);
                Ok(())
            }
            None => Err(DenseSetError::NotFound {
                value: value.to_usize(),
            }),
        }
    }

    /// Same as [`remove`](Self::remove), but a missing value is not an error.
    /// Returns true if the value was removed.
    pub fn discard<T: Candidate>(&mut self, value: T) -> Result<bool> {
        match self.remove(value) {
            Ok(()) => Ok(true),
            Err(DenseSetError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes and returns the last element in the dense order.
    ///
    /// O(1) time complexity.
    pub fn pop(&mut self) -> Result<V> {
        self.storage.pop_last().ok_or(DenseSetError::Empty)
    }

    /// Removes all elements.
    ///
    /// O(size) time complexity, the rest of the domain is not touched.
    pub fn clear(&mut self) {
        self.storage.clear_live();
    }

    /// Returns true if binary operations between the two sets are allowed.
    ///
    /// The value and index widths are part of the type, so only the capacity is checked here.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
    }

    pub(crate) fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(DenseSetError::Incompatible {
                left: self.capacity(),
                right: other.capacity(),
            })
        }
    }

    // checks that the candidate is inside of [0, capacity) and casts it to the value type
    pub(crate) fn to_domain<T: Candidate>(&self, candidate: T) -> Result<V> {
        let wide = candidate.to_i128();
        if wide < 0 || wide >= self.capacity() as i128 {
            return Err(DenseSetError::OutOfDomain {
                value: wide,
                capacity: self.capacity(),
            });
        }
        Ok(V::from_usize(wide as usize))
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.storage.assert_consistent();
    }
}

impl<'a, V: SetValue, I: SetIndex> IntoIterator for &'a DenseIndexSet<V, I> {
    type Item = V;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
