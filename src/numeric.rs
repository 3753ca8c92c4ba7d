// Copyright (C) Pavel Grebnev 2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Integer widths the set can be instantiated with.
//!
//! A set is parameterized by two widths: the value type `V` stored in the dense array, and the
//! signed index type `I` stored in the sparse array. The sparse array needs a signed type because
//! negative entries are sentinels:
//! - `ABSENT` (`-1`) means the value is not a member.
//! - `REMOVING` (`-2`) only appears while a bulk removal is running and never survives it.

use std::fmt;

/// An unsigned integer type that can hold members of the set.
pub trait SetValue: Candidate + Ord + Default + fmt::Debug + fmt::Display {
    /// Largest representable value.
    const MAX: u128;
    /// Type name, used in error messages.
    const WIDTH: &'static str;

    /// Converts a domain value. The caller guarantees that the value fits.
    fn from_usize(value: usize) -> Self;

    fn to_usize(self) -> usize;
}

/// A signed integer type used for the sparse array of positions.
pub trait SetIndex: Copy + Eq + fmt::Debug {
    /// Marks a value that is not in the set.
    const ABSENT: Self;
    /// Scratch mark for a value that is about to be removed.
    const REMOVING: Self;
    /// Largest position that can be stored.
    const MAX_POSITION: u128;
    /// Type name, used in error messages.
    const WIDTH: &'static str;

    /// Converts a dense position. The caller guarantees that the position fits.
    fn from_position(position: usize) -> Self;

    /// Returns the dense position, or `None` if the entry is a sentinel.
    fn position(self) -> Option<usize>;
}

/// Any primitive integer that can be offered to the set as a candidate value.
///
/// Candidates are checked against the domain `[0, capacity)` before they are cast to the
/// set's value type, so negative numbers and numbers wider than `V` are rejected instead of
/// wrapping.
pub trait Candidate: Copy {
    fn to_i128(self) -> i128;
}

macro_rules! impl_candidate {
    ($($t:ty),*) => {
        $(
            impl Candidate for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_candidate!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_set_value {
    ($($t:ty),*) => {
        $(
            impl SetValue for $t {
                const MAX: u128 = <$t>::MAX as u128;
                const WIDTH: &'static str = stringify!($t);

                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $t
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_set_value!(u8, u16, u32, u64, usize);

macro_rules! impl_set_index {
    ($($t:ty),*) => {
        $(
            impl SetIndex for $t {
                const ABSENT: Self = -1;
                const REMOVING: Self = -2;
                const MAX_POSITION: u128 = <$t>::MAX as u128;
                const WIDTH: &'static str = stringify!($t);

                #[inline]
                fn from_position(position: usize) -> Self {
                    position as $t
                }

                #[inline]
                fn position(self) -> Option<usize> {
                    if self >= 0 {
                        Some(self as usize)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_set_index!(i8, i16, i32, i64, isize);
