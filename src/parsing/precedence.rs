//! Operator binding strength and associativity.

/// An operator's binding strength: higher binds tighter.
///
/// Wrapped rather than a bare `i32` so that callers cannot accidentally
/// compare a precedence against an unrelated integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(i32);

impl Precedence {
    /// Sentinel below every real operator precedence; the Pratt loop in
    /// [`super::parser`] starts here so the very first continuation
    /// operator it meets is always accepted.
    pub const MIN: Self = Self(i32::MIN);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Which side a binary operator folds towards when two instances of it
/// appear in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}
