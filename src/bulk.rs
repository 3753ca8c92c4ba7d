// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Batched in-place set algebra.
//!
//! Every operation first normalizes its batch into a list of distinct domain values, then works
//! in a few whole-batch passes: one gather from the sparse array to classify the batch, and at
//! most two scatters into the sparse and dense arrays. There are no per-element swap-and-pop
//! calls.
//!
//! A batch is either a sequence of raw candidates, which is validated, cast and deduplicated, or
//! another compatible set, whose values are already distinct and are used as they are.

use crate::numeric::{Candidate, SetIndex, SetValue};
use crate::{DenseIndexSet, Result};

impl<V: SetValue, I: SetIndex> DenseIndexSet<V, I> {
    /// Adds all given values to the set. Duplicates in the input are fine.
    ///
    /// Nothing is written if any value is outside of the domain.
    ///
    /// O(n log n) in the batch size (deduplication), O(n) for the update itself.
    pub fn update<T: Candidate>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let batch = self.normalize(values)?;
        self.union_batch(&batch);
        Ok(self)
    }

    /// Adds all members of another set.
    pub fn update_from(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.union_batch(other.values());
        Ok(self)
    }

    /// Removes all given values that are in the set. Values that are not members are ignored.
    ///
    /// Nothing is written if any value is outside of the domain.
    pub fn difference_update<T: Candidate>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let batch = self.normalize(values)?;
        self.difference_batch(&batch);
        Ok(self)
    }

    /// Removes all members of another set.
    pub fn difference_update_from(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.difference_batch(other.values());
        Ok(self)
    }

    /// Keeps only the members that are also among the given values.
    ///
    /// Nothing is written if any value is outside of the domain.
    pub fn intersection_update<T: Candidate>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let batch = self.normalize(values)?;
        self.intersection_batch(&batch);
        Ok(self)
    }

    /// Keeps only the members that are also members of another set.
    pub fn intersection_update_from(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.intersection_batch(other.values());
        Ok(self)
    }

    /// Adds the given values that are missing and removes the ones that are present.
    ///
    /// Nothing is written if any value is outside of the domain.
    pub fn symmetric_difference_update<T: Candidate>(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        let batch = self.normalize(values)?;
        self.symmetric_difference_batch(&batch);
        Ok(self)
    }

    /// Toggles the membership of every member of another set.
    pub fn symmetric_difference_update_from(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.symmetric_difference_batch(other.values());
        Ok(self)
    }

    // validates every candidate before anything is written, then sorts and deduplicates
    fn normalize<T: Candidate>(&self, values: impl IntoIterator<Item = T>) -> Result<Vec<V>> {
        let mut batch = values
            .into_iter()
            .map(|candidate| self.to_domain(candidate))
            .collect::<Result<Vec<V>>>()?;

        batch.sort_unstable();
        batch.dedup();

        Ok(batch)
    }

    // the batch must not contain duplicates
    fn union_batch(&mut self, batch: &[V]) {
        let added: Vec<V> = batch
            .iter()
            .copied()
            .filter(|value| !self.storage.is_member(*value))
            .collect();

        // can't overflow, there are only `capacity` distinct values in the domain
        debug_assert!(self.storage.size() + added.len() <= self.storage.capacity());

        for value in added.iter() {
            self.storage.push(*value);
        }

        log::trace!(
            "union of {} values added {}, size is now {}",
            batch.len(),
            added.len(),
            self.storage.size()
        );
    }

    // the batch must not contain duplicates
    fn difference_batch(&mut self, batch: &[V]) {
        let (removed, positions): (Vec<V>, Vec<usize>) = batch
            .iter()
            .filter_map(|value| {
                self.storage
                    .position_of(*value)
                    .map(|position| (*value, position))
            })
            .unzip();

        if removed.is_empty() {
            return;
        }

        // after the removal, only [0, cutoff) stays alive
        let size = self.storage.size();
        let cutoff = size - removed.len();

        // The alive values at [cutoff, size) are the candidates to fill the holes left below the
        // cutoff. Some of them are removed themselves, so they're marked as REMOVING for the time
        // of filtering, which leaves exactly one replacement per hole.
        let removed_after_cutoff: Vec<(V, I)> = removed
            .iter()
            .zip(positions.iter())
            .filter(|(_, position)| **position >= cutoff)
            .map(|(value, _)| (*value, self.storage.raw_index(*value)))
            .collect();

        for (value, _) in removed_after_cutoff.iter() {
            self.storage.set_raw_index(*value, I::REMOVING);
        }

        let replacements: Vec<V> = self
            .storage
            .live_tail(cutoff)
            .iter()
            .copied()
            .filter(|value| self.storage.raw_index(*value) != I::REMOVING)
            .collect();

        for (value, original_index) in removed_after_cutoff.iter() {
            self.storage.set_raw_index(*value, *original_index);
        }

        let holes = positions.iter().copied().filter(|position| *position < cutoff);
        debug_assert_eq!(
            positions.len() - removed_after_cutoff.len(),
            replacements.len()
        );

        // any pairing of holes and replacements works
        for (position, replacement) in holes.zip(replacements.iter()) {
            self.storage.place(position, *replacement);
        }

        for value in removed.iter() {
            self.storage.mark_absent(*value);
        }

        self.storage.set_size(cutoff);

        log::trace!(
            "difference of {} values removed {} ({} moved), size is now {}",
            batch.len(),
            removed.len(),
            replacements.len(),
            cutoff
        );
    }

    // the batch must not contain duplicates
    fn intersection_batch(&mut self, batch: &[V]) {
        let kept: Vec<V> = batch
            .iter()
            .copied()
            .filter(|value| self.storage.is_member(*value))
            .collect();

        let old_size = self.storage.size();
        self.storage.clear_live();

        for (position, value) in kept.iter().enumerate() {
            self.storage.place(position, *value);
        }
        self.storage.set_size(kept.len());

        log::trace!(
            "intersection of {} values kept {} out of {}",
            batch.len(),
            kept.len(),
            old_size
        );
    }

    // the batch must not contain duplicates
    fn symmetric_difference_batch(&mut self, batch: &[V]) {
        let common: Vec<V> = batch
            .iter()
            .copied()
            .filter(|value| self.storage.is_member(*value))
            .collect();

        // a ^ b = (a | b) - (a & b), both parts are already free of duplicates
        self.union_batch(batch);
        self.difference_batch(&common);
    }
}
