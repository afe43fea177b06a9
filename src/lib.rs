//! math-utils: stateless integer multiply/divide.
//!
//! `divide` returns 0 for a zero divisor rather than failing. The `checked_*`
//! operations and [`ZeroDivisionPolicy::Reject`] expose that case as
//! [`MathError::DivisionByZero`] instead.

pub mod arith;
pub mod divisor;
pub mod error;

pub use arith::{MathUtils, Operation, ZeroDivisionPolicy, divide, multiply};
pub use divisor::Divisor;
pub use error::{MathError, Result};
