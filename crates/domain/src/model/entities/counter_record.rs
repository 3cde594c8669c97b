use std::fmt;

use log::{debug, trace};
use sample_tally_shared_kernel::{DomainError, DomainResult, TallyCount};
use serde::{Deserialize, Serialize};

use crate::options::OverflowPolicy;

/// A named, increment-only tally.
///
/// The name is stored verbatim and never validated. The count starts at zero
/// and only ever moves forward by one, so it cannot go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    name: String,
    count: TallyCount,
    #[serde(default)]
    policy: OverflowPolicy,
}

impl CounterRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, OverflowPolicy::default())
    }

    pub fn with_policy(name: impl Into<String>, policy: OverflowPolicy) -> Self {
        Self::starting_at(name, TallyCount::zero(), policy)
    }

    /// Seeds the count, e.g. to replay a tally that was persisted elsewhere.
    pub fn starting_at(name: impl Into<String>, count: TallyCount, policy: OverflowPolicy) -> Self {
        Self { name: name.into(), count, policy }
    }

    /// Adds one to the count, wrapping to zero at `u64::MAX`.
    ///
    /// Ignores the record's policy; use [`CounterRecord::try_increment`] to
    /// honour it.
    #[inline]
    pub fn increment(&mut self) {
        self.count = self.count.wrapping_increment();
    }

    /// Adds one to the count according to the record's [`OverflowPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CountOverflow`] when the policy is
    /// [`OverflowPolicy::Fail`] and the count is already at its limit. The
    /// count is left unchanged in that case.
    pub fn try_increment(&mut self) -> DomainResult<TallyCount> {
        self.increment_by(1)
    }

    /// Adds `times` to the count in one step, according to the record's
    /// [`OverflowPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CountOverflow`] when the policy is
    /// [`OverflowPolicy::Fail`] and the sum would pass `u64::MAX`. The count is
    /// left unchanged in that case.
    pub fn increment_by(&mut self, times: u64) -> DomainResult<TallyCount> {
        trace!("incrementing '{}' {times} times from {}", self.name, self.count);
        let step = TallyCount::from(times);
        let next = match self.policy {
            OverflowPolicy::Wrap => {
                let next = self.count + step;
                if next < self.count {
                    debug!("counter '{}' wrapped past {}", self.name, TallyCount::MAX);
                }
                next
            }
            OverflowPolicy::Saturate => {
                let next = self.count.saturating_add_count(step);
                if self.count.checked_add_count(step).is_none() {
                    debug!("counter '{}' saturated at {next}", self.name);
                }
                next
            }
            OverflowPolicy::Fail => self.count.checked_add_count(step).ok_or_else(|| {
                debug!("counter '{}' refused {times} increments at {}", self.name, self.count);
                DomainError::CountOverflow { name: self.name.clone(), limit: TallyCount::MAX.value() }
            })?,
        };
        self.count = next;
        Ok(next)
    }

    #[inline]
    pub const fn count(&self) -> TallyCount {
        self.count
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

impl fmt::Display for CounterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.count)
    }
}
