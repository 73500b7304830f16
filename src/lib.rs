//! # cli-calculator
//!
//! cli-calculator performs one of four arithmetic operations on two decimal
//! operands and renders the result as a human-readable decimal string.
//! Operands may be very large, very small or carry many fractional digits;
//! results are rounded to eight fractional digits, integral results are fully
//! expanded, and overflow renders as `∞`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::{evaluator::evaluate, format::format, lexer::parse_operand, operation::resolve},
    error::CalcResult,
};

/// Parses, evaluates and formats a single calculation.
///
/// This module ties together operand lexing, operation lookup, arithmetic
/// evaluation and result formatting. Each phase is a pure function, so the
/// whole calculation is testable in-process.
///
/// # Responsibilities
/// - Rejects operands that are not decimal literals.
/// - Maps operation names onto a closed set of operations.
/// - Evaluates with double precision and reports division by zero.
/// - Renders results with consistent rounding and magnitude handling.
pub mod calculator;
/// Provides the error type for calculations.
///
/// This module defines every error a calculation can end in. Each variant's
/// `Display` output is the exact message shown to the user.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (operand, operation,
///   division).
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for numeric conversion.
///
/// This module provides the conversion from a double to the decimal of its
/// shortest round-trip representation, which the formatter rounds.
pub mod util;

/// Returns the formatted result of applying `operation` to two operand tokens.
///
/// Both operands are validated before the operation name is looked at, so an
/// invalid operand is reported even when the operation is unknown as well.
///
/// # Errors
/// - [`CalcError::InvalidOperand`](error::CalcError::InvalidOperand) if either
///   operand is not a decimal literal.
/// - [`CalcError::UnknownOperation`](error::CalcError::UnknownOperation) if
///   `operation` is not `add`, `subtract`, `multiply` or `divide`.
/// - [`CalcError::DivisionByZero`](error::CalcError::DivisionByZero) if the
///   operation is `divide` and the second operand is zero.
///
/// # Examples
/// ```
/// use cli_calculator::{calculate, error::CalcError};
///
/// assert_eq!(calculate("add", "2147483647", "1").unwrap(), "2147483648");
/// assert_eq!(calculate("divide", "100", "33").unwrap(), "3.03030303");
///
/// let err = calculate("divide", "2", "0").unwrap_err();
/// assert_eq!(err, CalcError::DivisionByZero);
/// assert_eq!(err.to_string(), "Error: Cannot divide by zero");
/// ```
pub fn calculate(operation: &str, lhs: &str, rhs: &str) -> CalcResult<String> {
    let left = parse_operand(lhs)?;
    let right = parse_operand(rhs)?;
    let op = resolve(operation)?;

    let result = evaluate(op, left, right)?;
    let output = format(result);

    tracing::debug!(%op, lhs, rhs, %output, "calculated");
    Ok(output)
}
