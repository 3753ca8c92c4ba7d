// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Set algebra that produces new sets, relations between sets, and the operator and formatting
//! traits built on top of them.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::numeric::{Candidate, SetIndex, SetValue};
use crate::{DenseIndexSet, Result};

impl<V: SetValue, I: SetIndex> DenseIndexSet<V, I> {
    /// Returns true if every given value is in the set. An empty input gives true.
    ///
    /// All values are checked against the domain, even after the answer is known.
    pub fn contains_all<T: Candidate>(&self, values: impl IntoIterator<Item = T>) -> Result<bool> {
        let mut all = true;
        for candidate in values {
            all &= self.storage.is_member(self.to_domain(candidate)?);
        }
        Ok(all)
    }

    /// Returns true if at least one of the given values is in the set.
    ///
    /// All values are checked against the domain, even after the answer is known.
    pub fn contains_any<T: Candidate>(&self, values: impl IntoIterator<Item = T>) -> Result<bool> {
        let mut any = false;
        for candidate in values {
            any |= self.storage.is_member(self.to_domain(candidate)?);
        }
        Ok(any)
    }

    /// Returns a new set with the members of both sets.
    pub fn union(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.update_from(other)?;
        Ok(result)
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.difference_update_from(other)?;
        Ok(result)
    }

    /// Returns a new set with the members present in both sets.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.intersection_update_from(other)?;
        Ok(result)
    }

    /// Returns a new set with the members present in exactly one of the sets.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.symmetric_difference_update_from(other)?;
        Ok(result)
    }

    /// Returns true if every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> Result<bool> {
        self.check_compatible(other)?;
        Ok(self.size() <= other.size() && other.has_all(self.values()))
    }

    /// Returns true if every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> Result<bool> {
        other.is_subset(self)
    }

    /// Returns true if the sets have no members in common.
    pub fn is_disjoint(&self, other: &Self) -> Result<bool> {
        self.check_compatible(other)?;
        let (smaller, larger) = if self.size() <= other.size() {
            (self, other)
        } else {
            (other, self)
        };
        Ok(!larger.has_any(smaller.values()))
    }

    /// Returns true if both sets have the same members, regardless of their order.
    pub fn set_eq(&self, other: &Self) -> Result<bool> {
        self.check_compatible(other)?;
        Ok(self.size() == other.size() && other.has_all(self.values()))
    }

    // the values come from a compatible set, so they're already inside of the domain
    fn has_all(&self, values: &[V]) -> bool {
        values.iter().all(|value| self.storage.is_member(*value))
    }

    fn has_any(&self, values: &[V]) -> bool {
        values.iter().any(|value| self.storage.is_member(*value))
    }
}

// operators can't return errors, incompatible operands are a programming mistake
fn or_panic<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("{err}"))
}

impl<V: SetValue, I: SetIndex> PartialEq for DenseIndexSet<V, I> {
    /// Panics if the sets have different capacities.
    fn eq(&self, other: &Self) -> bool {
        or_panic(self.set_eq(other))
    }
}

impl<V: SetValue, I: SetIndex> Eq for DenseIndexSet<V, I> {}

macro_rules! impl_set_operator {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:ident, $update:ident) => {
        impl<V: SetValue, I: SetIndex> $op<&DenseIndexSet<V, I>> for &DenseIndexSet<V, I> {
            type Output = DenseIndexSet<V, I>;

            fn $op_fn(self, rhs: &DenseIndexSet<V, I>) -> Self::Output {
                or_panic(self.$method(rhs))
            }
        }

        impl<V: SetValue, I: SetIndex> $assign<&DenseIndexSet<V, I>> for DenseIndexSet<V, I> {
            fn $assign_fn(&mut self, rhs: &DenseIndexSet<V, I>) {
                or_panic(self.$update(rhs));
            }
        }
    };
}

impl_set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, update_from);
impl_set_operator!(
    BitAnd,
    bitand,
    BitAndAssign,
    bitand_assign,
    intersection,
    intersection_update_from
);
impl_set_operator!(Sub, sub, SubAssign, sub_assign, difference, difference_update_from);
impl_set_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_update_from
);

impl<V: SetValue, I: SetIndex> fmt::Display for DenseIndexSet<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

impl<V: SetValue, I: SetIndex> fmt::Debug for DenseIndexSet<V, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DenseIndexSet, DenseSetError};
    use proptest::prelude::*;

    fn set(values: &[u32]) -> DenseIndexSet {
        DenseIndexSet::from_values(10, values.iter().copied()).unwrap()
    }

    // two overlapping sets => combined with operators => expected members
    #[test]
    fn two_overlapping_sets_combined_with_operators_expected_members() {
        let a = set(&[1, 2, 3]);
        let b = set(&[2, 3, 4]);

        assert_eq!(&a & &b, set(&[2, 3]));
        assert_eq!(&a | &b, set(&[1, 2, 3, 4]));
        assert_eq!(&a ^ &b, set(&[1, 4]));
        assert_eq!(&a - &b, set(&[1]));
        assert_eq!(a.contains(2), Ok(true));
        assert_eq!((&a ^ &b).contains(2), Ok(false));
        assert_eq!((&a - &b).is_subset(&a), Ok(true));

        // inputs are not changed
        assert_eq!(a, set(&[1, 2, 3]));
        assert_eq!(b, set(&[2, 3, 4]));
    }

    // set => combined with assignment operators => changed in place
    #[test]
    fn set_combined_with_assignment_operators_changed_in_place() {
        let mut a = set(&[1, 2, 3]);
        let b = set(&[2, 3, 4]);

        a |= &b;
        assert_eq!(a, set(&[1, 2, 3, 4]));
        a -= &set(&[1]);
        assert_eq!(a, set(&[2, 3, 4]));
        a ^= &set(&[4, 5]);
        assert_eq!(a, set(&[2, 3, 5]));
        a &= &b;
        assert_eq!(a, set(&[2, 3]));
        a.assert_consistent();
    }

    // sets with the same members in different order => compared => equal
    #[test]
    fn sets_with_the_same_members_in_different_order_compared_equal() {
        let a = set(&[1, 5, 7]);
        let mut b: DenseIndexSet = DenseIndexSet::new(10).unwrap();
        for value in [7, 1, 5] {
            b.add(value).unwrap();
        }

        assert_ne!(a.values(), b.values());
        assert_eq!(a, b);
        assert_ne!(a, set(&[1, 5]));
    }

    // sets with different capacities => combined with an operator => panics
    #[test]
    #[should_panic(expected = "capacity 10 vs 20")]
    fn sets_with_different_capacities_combined_with_an_operator_panics() {
        let a = set(&[1]);
        let b: DenseIndexSet = DenseIndexSet::new(20).unwrap();

        let _ = &a | &b;
    }

    // sets with different capacities => checked relations => incompatible error
    #[test]
    fn sets_with_different_capacities_checked_relations_incompatible_error() {
        let a = set(&[1]);
        let b: DenseIndexSet = DenseIndexSet::new(20).unwrap();
        let expected = Err(DenseSetError::Incompatible {
            left: 10,
            right: 20,
        });

        assert_eq!(a.is_subset(&b), expected);
        assert_eq!(a.is_disjoint(&b), expected);
        assert_eq!(a.set_eq(&b), expected);
        assert!(a.union(&b).is_err());
        assert!(!a.is_compatible(&b));
    }

    // two sets => relations => subset, superset and disjoint are reported
    #[test]
    fn two_sets_relations_subset_superset_and_disjoint_are_reported() {
        let small = set(&[2, 3]);
        let large = set(&[1, 2, 3]);
        let other = set(&[8, 9]);

        assert_eq!(small.is_subset(&large), Ok(true));
        assert_eq!(large.is_subset(&small), Ok(false));
        assert_eq!(large.is_superset(&small), Ok(true));
        assert_eq!(small.is_disjoint(&other), Ok(true));
        assert_eq!(small.is_disjoint(&large), Ok(false));
        assert_eq!(set(&[]).is_subset(&small), Ok(true));
    }

    // set => batch membership queries => all and any are reported
    #[test]
    fn set_batch_membership_queries_all_and_any_are_reported() {
        let a = set(&[1, 2, 3]);

        assert_eq!(a.contains_all([1, 3]), Ok(true));
        assert_eq!(a.contains_all([1, 4]), Ok(false));
        assert_eq!(a.contains_any([4, 3]), Ok(true));
        assert_eq!(a.contains_any([4, 5]), Ok(false));
        assert_eq!(a.contains_all(std::iter::empty::<u32>()), Ok(true));
        assert!(a.contains_any([1, 10]).is_err());
    }

    // set => copied and the copy is changed => original is not changed
    #[test]
    fn set_copied_and_the_copy_is_changed_original_is_not_changed() {
        let a = set(&[1, 2, 3]);

        let mut copy = a.clone();
        assert_eq!(copy, a);
        copy.difference_update([1, 2]).unwrap();

        assert_eq!(a, set(&[1, 2, 3]));
        assert_eq!(copy, set(&[3]));
    }

    // set => formatted => members in dense order between braces
    #[test]
    fn set_formatted_members_in_dense_order_between_braces() {
        let mut a: DenseIndexSet = DenseIndexSet::new(10).unwrap();
        for value in [3, 1, 2] {
            a.add(value).unwrap();
        }

        assert_eq!(a.to_string(), "{3, 1, 2}");
        assert_eq!(format!("{a:?}"), "{3, 1, 2}");
        assert_eq!(set(&[]).to_string(), "{}");
    }

    fn any_set() -> impl Strategy<Value = DenseIndexSet> {
        prop::collection::vec(0u32..32, 0..40)
            .prop_map(|values| DenseIndexSet::from_values(32, values).unwrap())
    }

    proptest! {
        #[test]
        fn set_algebra_laws_hold(a in any_set(), b in any_set()) {
            let union = &a | &b;
            let intersection = &a & &b;

            prop_assert_eq!(&a & &union, a.clone());
            prop_assert!((&(&a - &b) & &b).is_empty());
            prop_assert_eq!(&a ^ &b, &union - &intersection);
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(a.is_subset(&union), Ok(true));
            prop_assert_eq!(union.is_superset(&b), Ok(true));
            prop_assert_eq!((&a - &b).is_disjoint(&b), Ok(true));

            union.assert_consistent();
            intersection.assert_consistent();
        }
    }
}
