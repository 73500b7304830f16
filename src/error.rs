/// Calculation errors.
///
/// Defines every error a calculation can end in: an operand that is not a
/// decimal literal, an operation name that is not supported, and division by
/// zero.
pub mod calc_error;

pub use calc_error::CalcError;

/// Result type used throughout the calculator.
pub type CalcResult<T> = Result<T, CalcError>;
