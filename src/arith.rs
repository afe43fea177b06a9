//! arith: stateless i64 multiply/divide
//! Invariants:
//! - `multiply` and `divide` never panic, for any pair of operands
//! - `divide(a, 0) == 0`; callers cannot tell this apart from a real zero quotient
//! - The checked variants report both cases the infallible ones hide

use core::fmt;

use log::{debug, trace};

use crate::divisor::Divisor;
use crate::error::{MathError, Result};

/// Binary operations understood by [`MathUtils::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiply => f.write_str("multiplication"),
            Operation::Divide => f.write_str("division"),
        }
    }
}

/// How [`MathUtils::evaluate`] treats a zero divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroDivisionPolicy {
    /// Return 0, same as [`MathUtils::divide`].
    #[default]
    ReturnZero,
    /// Fail with [`MathError::DivisionByZero`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MathUtils {
    policy: ZeroDivisionPolicy,
}

impl MathUtils {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_policy(policy: ZeroDivisionPolicy) -> Self {
        MathUtils { policy }
    }

    #[inline]
    pub fn policy(&self) -> ZeroDivisionPolicy {
        self.policy
    }

    /// Product of `a` and `b`, wrapping on overflow.
    #[inline]
    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    /// Truncating quotient of `a / b`.
    ///
    /// Returns 0 when `b == 0` instead of failing, regardless of the configured
    /// policy. `i64::MIN / -1` wraps to `i64::MIN`.
    #[inline]
    pub fn divide(&self, a: i64, b: i64) -> i64 {
        match Divisor::new(b) {
            Some(d) => d.wrapping_quotient(a),
            None => {
                debug!("division by zero masked: {a} / 0 -> 0");
                0
            }
        }
    }

    /// Product of `a` and `b`, or Err(Overflow) if it does not fit.
    #[inline]
    pub fn checked_multiply(&self, a: i64, b: i64) -> Result<i64> {
        a.checked_mul(b).ok_or(MathError::Overflow {
            op: Operation::Multiply,
        })
    }

    /// Truncating quotient of `a / b`.
    /// Returns:
    /// - Err(DivisionByZero) if b == 0.
    /// - Err(Overflow) if a == i64::MIN and b == -1.
    #[inline]
    pub fn checked_divide(&self, a: i64, b: i64) -> Result<i64> {
        let d = Divisor::try_from(b)?;
        self.divide_by(a, d)
    }

    /// Truncating quotient of `a / d`. Only fails on overflow.
    #[inline]
    pub fn divide_by(&self, a: i64, d: Divisor) -> Result<i64> {
        d.checked_quotient(a)
    }

    /// Apply `op` to `a` and `b`, dividing by zero according to the policy.
    pub fn evaluate(&self, op: Operation, a: i64, b: i64) -> Result<i64> {
        trace!("evaluate {op:?}({a}, {b}) with {:?}", self.policy);
        match op {
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => match (Divisor::new(b), self.policy) {
                (Some(d), _) => Ok(d.wrapping_quotient(a)),
                (None, ZeroDivisionPolicy::ReturnZero) => Ok(self.divide(a, b)),
                (None, ZeroDivisionPolicy::Reject) => {
                    debug!("division by zero rejected: {a} / 0");
                    Err(MathError::DivisionByZero)
                }
            },
        }
    }
}

/// Same as [`MathUtils::multiply`] on a default utility.
#[inline]
pub fn multiply(a: i64, b: i64) -> i64 {
    MathUtils::new().multiply(a, b)
}

/// Same as [`MathUtils::divide`] on a default utility.
#[inline]
pub fn divide(a: i64, b: i64) -> i64 {
    MathUtils::new().divide(a, b)
}
