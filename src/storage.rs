// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::numeric::{SetIndex, SetValue};

/// DenseIndexStorage is the storage for the dense index set, it is a combination of dense and
/// sparse arrays.
/// Sparse array is indexed by value and stores the position of that value in the dense array.
/// Dense array stores the values themselves, packed at the front.
///
/// Both arrays have exactly `capacity` slots and never grow, so they are allocated once.
#[derive(Clone)]
pub(crate) struct DenseIndexStorage<V, I> {
    // one entry per domain value, either a dense position or a sentinel
    indices: Box<[I]>,
    // only [0, size) is alive, the tail keeps stale values that are never read
    values: Box<[V]>,
    size: usize,
}

impl<V: SetValue, I: SetIndex> DenseIndexStorage<V, I> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: vec![I::ABSENT; capacity].into_boxed_slice(),
            values: vec![V::default(); capacity].into_boxed_slice(),
            size: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn live_values(&self) -> &[V] {
        &self.values[..self.size]
    }

    // the alive values at positions [from, size)
    pub(crate) fn live_tail(&self, from: usize) -> &[V] {
        &self.values[from..self.size]
    }

    pub(crate) fn raw_index(&self, value: V) -> I {
        self.indices[value.to_usize()]
    }

    pub(crate) fn set_raw_index(&mut self, value: V, index: I) {
        self.indices[value.to_usize()] = index;
    }

    pub(crate) fn position_of(&self, value: V) -> Option<usize> {
        self.raw_index(value).position()
    }

    pub(crate) fn is_member(&self, value: V) -> bool {
        self.raw_index(value) != I::ABSENT
    }

    // writes the value into the dense slot and points the sparse entry at it
    pub(crate) fn place(&mut self, position: usize, value: V) {
        self.values[position] = value;
        self.indices[value.to_usize()] = I::from_position(position);
    }

    pub(crate) fn mark_absent(&mut self, value: V) {
        self.indices[value.to_usize()] = I::ABSENT;
    }

    pub(crate) fn push(&mut self, value: V) {
        debug_assert!(self.size < self.capacity());
        self.place(self.size, value);
        self.size += 1;
    }

    pub(crate) fn swap_remove_at(&mut self, position: usize) -> V {
        debug_assert!(position < self.size);
        let removed = self.values[position];
        let last = self.values[self.size - 1];

        // if the removed value is the last one, this is a no-op that is undone right below
        self.place(position, last);
        self.mark_absent(removed);
        self.size -= 1;

        removed
    }

    pub(crate) fn pop_last(&mut self) -> Option<V> {
        if self.size == 0 {
            return None;
        }

        let value = self.values[self.size - 1];
        self.mark_absent(value);
        self.size -= 1;

        Some(value)
    }

    // resets only the entries of the alive values, so it's O(size) and not O(capacity)
    pub(crate) fn clear_live(&mut self) {
        for i in 0..self.size {
            let value = self.values[i];
            self.indices[value.to_usize()] = I::ABSENT;
        }
        self.size = 0;
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        debug_assert!(size <= self.capacity());
        self.size = size;
    }

    /// Panics if the sparse and dense arrays disagree with each other.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.size <= self.capacity());

        for (position, value) in self.live_values().iter().enumerate() {
            assert_eq!(
                self.raw_index(*value).position(),
                Some(position),
                "value {value} doesn't point back to its dense slot"
            );
        }

        let mut members = 0;
        for index in self.indices.iter() {
            match index.position() {
                Some(position) => {
                    assert!(position < self.size, "sparse entry points past the alive values");
                    members += 1;
                }
                None => assert_eq!(*index, I::ABSENT, "scratch sentinel leaked"),
            }
        }
        assert_eq!(members, self.size);
    }
}
