//! divisor: Non-zero 64-bit signed divisor
//! Invariants:
//! - Value is always non-zero (i64 != 0)
//! - Quotient helpers never divide by zero; the only failure left is overflow
//! Design choices:
//! - Backed by core::num::NonZeroI64 for niche optimization (zero-cost)

use core::fmt;
use core::hash::{Hash, Hasher};
use core::num::NonZeroI64;

use crate::arith::Operation;
use crate::error::{MathError, Result};

#[derive(Clone, Copy)]
pub struct Divisor(NonZeroI64);

impl Divisor {
    /// Create a new Divisor. Returns None if v == 0.
    #[inline]
    pub fn new(v: i64) -> Option<Self> {
        NonZeroI64::new(v).map(Divisor)
    }

    /// Get the inner i64.
    #[inline]
    pub fn get(self) -> i64 {
        self.0.get()
    }

    const ONE: NonZeroI64 = match NonZeroI64::new(1) {
        Some(v) => v,
        None => unreachable!(),
    };

    /// Construct +1.
    #[inline]
    pub fn one() -> Self {
        Divisor(Self::ONE)
    }

    /// Construct -1.
    #[inline]
    pub fn neg_one() -> Self {
        Divisor(-Self::ONE)
    }

    /// Truncating quotient of `dividend / self`.
    /// Returns Err(Overflow) if dividend == i64::MIN and self == -1.
    #[inline]
    pub fn checked_quotient(self, dividend: i64) -> Result<i64> {
        dividend
            .checked_div(self.get())
            .ok_or(MathError::Overflow {
                op: Operation::Divide,
            })
    }

    /// Truncating quotient of `dividend / self`; i64::MIN / -1 wraps to i64::MIN.
    #[inline]
    pub fn wrapping_quotient(self, dividend: i64) -> i64 {
        dividend.wrapping_div(self.get())
    }
}

/* ----- Trait impls (Eq/Ord/Hash/Display/Debug/TryFrom/From) ----- */

impl fmt::Debug for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Divisor").field(&self.get()).finish()
    }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl PartialEq for Divisor {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}
impl Eq for Divisor {}

impl PartialOrd for Divisor {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Divisor {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.get().cmp(&other.get())
    }
}

impl Hash for Divisor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}

impl From<NonZeroI64> for Divisor {
    #[inline]
    fn from(nz: NonZeroI64) -> Self {
        Divisor(nz)
    }
}

impl From<Divisor> for i64 {
    #[inline]
    fn from(d: Divisor) -> i64 {
        d.get()
    }
}

impl TryFrom<i64> for Divisor {
    type Error = MathError;
    #[inline]
    fn try_from(v: i64) -> Result<Self> {
        Divisor::new(v).ok_or(MathError::DivisionByZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Divisor::new(0), None);
        assert_eq!(Divisor::try_from(0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn constants() {
        assert_eq!(Divisor::one().get(), 1);
        assert_eq!(Divisor::neg_one().get(), -1);
    }

    #[test]
    fn quotient_truncates_toward_zero() {
        let two = Divisor::new(2).unwrap();
        assert_eq!(two.checked_quotient(7), Ok(3));
        assert_eq!(two.checked_quotient(-7), Ok(-3));
        assert_eq!(Divisor::new(-2).unwrap().checked_quotient(7), Ok(-3));
    }

    #[test]
    fn min_over_neg_one() {
        let d = Divisor::neg_one();
        assert_eq!(
            d.checked_quotient(i64::MIN),
            Err(MathError::Overflow {
                op: Operation::Divide
            })
        );
        assert_eq!(d.wrapping_quotient(i64::MIN), i64::MIN);
    }

    #[test]
    fn ordering_and_display() {
        let a = Divisor::new(-3).unwrap();
        let b = Divisor::from(NonZeroI64::new(5).unwrap());
        assert!(a < b);
        assert_eq!(format!("{a}"), "-3");
        assert_eq!(format!("{b:?}"), "Divisor(5)");
        assert_eq!(i64::from(b), 5);
    }
}
