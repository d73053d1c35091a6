//! Distinct, overflow-checked index types for byte and codepoint offsets.
//!
//! Keeping these as separate types (rather than passing raw `usize`s
//! around) prevents byte offsets and codepoint offsets from ever being
//! mixed up at a call site.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

macro_rules! checked_index {
    ($name:ident, $unit:literal) => {
        #[doc = concat!("A non-negative ", $unit, " offset with checked arithmetic.")]
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(usize);

        impl $name {
            /// The largest representable value on this platform.
            pub const MAX: Self = Self(usize::MAX);

            /// The zero value.
            pub const ZERO: Self = Self(0);

            #[must_use]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn get(self) -> usize {
                self.0
            }

            /// Adds two indices, returning `None` on overflow instead of panicking.
            #[must_use]
            pub fn checked_add(self, other: Self) -> Option<Self> {
                self.0.checked_add(other.0).map(Self)
            }

            /// Subtracts two indices, returning `None` if the result would be negative.
            #[must_use]
            pub fn checked_sub(self, other: Self) -> Option<Self> {
                self.0.checked_sub(other.0).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                self.checked_add(other)
                    .unwrap_or_else(|| panic!("{} addition overflowed", stringify!($name)))
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                self.checked_sub(other)
                    .unwrap_or_else(|| panic!("{} subtraction underflowed", stringify!($name)))
            }
        }
    };
}

checked_index!(ByteIndex, "byte");
checked_index!(Utf8Index, "codepoint");

#[cfg(test)]
mod tests {
    use super::{ByteIndex, Utf8Index};

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = ByteIndex::new(3);
        let b = ByteIndex::new(5);
        let c = ByteIndex::new(7);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + ByteIndex::ZERO, a);
    }

    #[test]
    fn subtraction_is_closed_on_the_diagonal() {
        let a = Utf8Index::new(42);

        assert_eq!(a - a, Utf8Index::ZERO);
        assert_eq!(a - Utf8Index::ZERO, a);
    }

    #[test]
    fn subtraction_fails_on_out_of_range_operands() {
        let a = ByteIndex::new(1);
        let b = ByteIndex::new(2);

        assert_eq!(a.checked_sub(b), None);
    }

    #[test]
    #[should_panic(expected = "underflowed")]
    fn subtraction_panics_on_underflow() {
        let _ = ByteIndex::new(0) - ByteIndex::new(1);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn addition_panics_on_overflow() {
        let _ = ByteIndex::MAX + ByteIndex::new(1);
    }
}
