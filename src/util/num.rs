use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Largest integer value below which an `f64` can still carry a fractional
/// part (`2^52`). Every finite double at or above it is an integer.
pub const MIN_ALWAYS_INTEGRAL: f64 = 4_503_599_627_370_496.0;

/// Converts a finite `f64` into the decimal of its shortest round-trip
/// representation.
///
/// The shortest round-trip representation is the decimal with the fewest
/// significant digits that parses back to the same double. It is what a human
/// would have typed to get that double, as opposed to its exact binary
/// expansion.
///
/// ## Parameters
/// - `value`: The double to convert.
///
/// ## Returns
/// - `Some(BigDecimal)`: The decimal if `value` is finite.
/// - `None`: If `value` is infinite or NaN.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use cli_calculator::util::num::f64_to_shortest_decimal;
///
/// let decimal = f64_to_shortest_decimal(0.1 + 0.2).unwrap();
/// assert_eq!(decimal, BigDecimal::from_str("0.30000000000000004").unwrap());
///
/// assert!(f64_to_shortest_decimal(f64::INFINITY).is_none());
/// ```
#[must_use]
pub fn f64_to_shortest_decimal(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    // `Display` for f64 prints the shortest round-trip digits without an exponent.
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Returns `true` if a finite `f64` is an integer.
///
/// ## Example
/// ```
/// use cli_calculator::util::num::is_integral;
///
/// assert!(is_integral(1.7e308));
/// assert!(is_integral(-2_147_483_648.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && (value.abs() >= MIN_ALWAYS_INTEGRAL || value.fract() == 0.0)
}
