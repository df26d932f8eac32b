//! Range mapping of the mixed integer.
//!
//! An unbounded request returns the 256-bit integer untouched. A bounded
//! request `[min, max]` reduces it with the modulo-and-retry scheme:
//!
//! ```text
//! max_exclusive = max + 1
//! num = num mod max_exclusive
//! while num < min:
//!     if num + min < max_exclusive: return num + min
//!     num = (num + min) mod max_exclusive
//! return num
//! ```
//!
//! While `num < min <= max`, `num + min` is always below `2 * max_exclusive`,
//! so each retry just subtracts `span = max - min + 1`. The loop therefore
//! ends after at most `(min - 1) / span + 1` retries with
//! `min + (num mod span)`, which is what [`reduce`] computes directly.
//! [`reduce_stepwise`] runs the literal loop and reports its iteration count.
//!
//! The result always lies in `[min, max]`, but it is not uniform: values
//! below `min` after the first modulo are folded onto the low end of the
//! range.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Output range requested by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Range {
    /// Return the full 256-bit integer.
    #[default]
    Unbounded,
    /// Reduce into `[min, max]`, both inclusive.
    Bounded { min: BigUint, max: BigUint },
}

impl Range {
    /// Builds a validated bounded range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `min > max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgrand::Range;
    ///
    /// assert!(Range::bounded(1u32, 6u32).is_ok());
    /// assert!(Range::bounded(6u32, 1u32).is_err());
    /// ```
    pub fn bounded<T: Into<BigUint>>(min: T, max: T) -> Result<Self> {
        let range = Range::Bounded {
            min: min.into(),
            max: max.into(),
        };
        range.validate()?;
        Ok(range)
    }

    /// Builds a range from optional bounds.
    ///
    /// - `(None, None)` is unbounded.
    /// - `(None, Some(max))` is `[0, max]`.
    /// - `(Some(min), None)` is rejected.
    ///
    /// # Errors
    /// Returns [`Error::MissingMaximum`] when only `min` is given and
    /// [`Error::InvalidRange`] when `min > max`.
    pub fn from_bounds(min: Option<BigUint>, max: Option<BigUint>) -> Result<Self> {
        match (min, max) {
            (None, None) => Ok(Range::Unbounded),
            (None, Some(max)) => Range::bounded(BigUint::zero(), max),
            (Some(min), None) => Err(Error::MissingMaximum { min }),
            (Some(min), Some(max)) => Range::bounded(min, max),
        }
    }

    /// Checks the `min <= max` invariant.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `min > max`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Range::Unbounded => Ok(()),
            Range::Bounded { min, max } => check_bounds(min, max),
        }
    }

    /// Returns `true` if `value` lies in the range.
    pub fn contains(&self, value: &BigUint) -> bool {
        match self {
            Range::Unbounded => true,
            Range::Bounded { min, max } => min <= value && value <= max,
        }
    }

    /// Maps `num` into the range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if the range is invalid.
    pub fn map(&self, num: BigUint) -> Result<BigUint> {
        self.validate()?;
        match self {
            Range::Unbounded => Ok(num),
            Range::Bounded { min, max } => {
                let value = reduce(&num, min, max)?;
                tracing::debug!(%min, %max, %value, "mapped into range");
                Ok(value)
            }
        }
    }
}

fn check_bounds(min: &BigUint, max: &BigUint) -> Result<()> {
    if min > max {
        return Err(Error::InvalidRange {
            min: min.clone(),
            max: max.clone(),
        });
    }
    Ok(())
}

/// Reduces `num` into `[min, max]` in closed form.
///
/// Produces exactly the value of the retry loop.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `min > max`.
pub fn reduce(num: &BigUint, min: &BigUint, max: &BigUint) -> Result<BigUint> {
    check_bounds(min, max)?;
    let max_exclusive = max + 1u32;
    let folded = num % &max_exclusive;
    if &folded >= min {
        return Ok(folded);
    }
    let span = max_exclusive - min;
    Ok(folded % span + min)
}

/// Outcome of [`reduce_stepwise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionTrace {
    /// Value returned by the loop.
    pub value: BigUint,
    /// Number of times the retry loop body ran.
    pub iterations: u64,
}

/// Runs the literal modulo-and-retry loop.
///
/// # Returns
/// The final value and iteration count, or `None` if the loop would exceed
/// `max_iterations`.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `min > max`.
pub fn reduce_stepwise(
    num: &BigUint,
    min: &BigUint,
    max: &BigUint,
    max_iterations: u64,
) -> Result<Option<ReductionTrace>> {
    check_bounds(min, max)?;
    let max_exclusive = max + 1u32;
    let mut num = num % &max_exclusive;
    let mut iterations = 0u64;
    while &num < min {
        if iterations == max_iterations {
            return Ok(None);
        }
        iterations += 1;
        let shifted = &num + min;
        if shifted < max_exclusive {
            return Ok(Some(ReductionTrace {
                value: shifted,
                iterations,
            }));
        }
        num = shifted % &max_exclusive;
        tracing::trace!(iterations, %num, "retrying reduction");
    }
    Ok(Some(ReductionTrace {
        value: num,
        iterations,
    }))
}

/// Upper bound on the number of retries for `[min, max]`.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if `min > max`.
pub fn iteration_bound(min: &BigUint, max: &BigUint) -> Result<BigUint> {
    check_bounds(min, max)?;
    if min.is_zero() {
        return Ok(BigUint::zero());
    }
    let span = max + 1u32 - min;
    Ok((min - 1u32) / span + 1u32)
}
