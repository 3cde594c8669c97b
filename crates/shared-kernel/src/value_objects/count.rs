// crates/shared-kernel/src/value_objects/count.rs
use std::ops::Add;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Non-negative tally backed by `u64`.
///
/// The increment primitives never panic; callers pick how the numeric limit
/// is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TallyCount(u64);

impl TallyCount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_max(self) -> bool {
        self.0 == u64::MAX
    }

    /// `self + 1`, wrapping to zero at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn wrapping_increment(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// `self + 1`, clamped at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn saturating_increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// `self + 1`, or `None` at `u64::MAX`.
    #[inline]
    pub const fn checked_increment(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// `self + rhs`, clamped at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn saturating_add_count(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// `self + rhs`, or `None` past `u64::MAX`.
    #[inline]
    pub const fn checked_add_count(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }
}

impl Default for TallyCount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Wraps at `u64::MAX`, like the plain increment.
impl Add for TallyCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Zero for TallyCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for TallyCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<TallyCount> for u64 {
    fn from(value: TallyCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for TallyCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<TallyCount> for u64 {
    fn eq(&self, other: &TallyCount) -> bool {
        *self == other.0
    }
}

mod display {
    use std::fmt;

    use super::TallyCount;

    impl fmt::Display for TallyCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
