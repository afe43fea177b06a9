use crate::arith::Operation;

/// Error type for the checked arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in an i64 (e.g. i64::MIN / -1).
    #[error("arithmetic overflow in {op}")]
    Overflow { op: Operation },
}

pub type Result<T> = std::result::Result<T, MathError>;
