use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::util::num::{f64_to_shortest_decimal, is_integral};

/// Number of fractional digits a result is rounded to.
pub const DECIMAL_PLACES: i64 = 8;

/// The glyph rendered for results that overflowed the double range.
pub const INFINITY_GLYPH: &str = "∞";

/// How a computed double is presented to the user.
///
/// Decimals held by [`Rendering::Integer`] and [`Rendering::Decimal`] are
/// already rounded to [`DECIMAL_PLACES`] and stripped of trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Positive or negative infinity, reached through overflow.
    Infinite,
    /// Not a number. Cannot be produced from finite operands.
    NotANumber,
    /// Exactly zero, negative zero, or a magnitude that rounds away to zero.
    Zero,
    /// A nonzero value without fractional part after rounding.
    Integer(BigDecimal),
    /// A value with between one and [`DECIMAL_PLACES`] fractional digits.
    Decimal(BigDecimal),
}

impl Rendering {
    /// Decides how `value` is rendered.
    ///
    /// The value is taken in its shortest round-trip decimal representation
    /// and rounded half away from zero at the eighth fractional digit. This
    /// removes the residual noise of binary arithmetic, so a sum like
    /// `12.00000000000099 + 2.000000000033` renders as an integer.
    ///
    /// # Example
    /// ```
    /// use cli_calculator::calculator::format::Rendering;
    ///
    /// assert_eq!(Rendering::of(f64::NEG_INFINITY), Rendering::Infinite);
    /// assert_eq!(Rendering::of(-0.0), Rendering::Zero);
    /// assert!(matches!(Rendering::of(14.000_000_000_034), Rendering::Integer(_)));
    /// assert!(matches!(Rendering::of(0.5), Rendering::Decimal(_)));
    /// ```
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_infinite() {
            return Self::Infinite;
        }
        let Some(decimal) = f64_to_shortest_decimal(value) else {
            return Self::NotANumber;
        };

        let rounded = if is_integral(value) {
            decimal.normalized()
        } else {
            decimal.with_scale_round(DECIMAL_PLACES, RoundingMode::HalfUp).normalized()
        };

        let rendering = if rounded.is_zero() {
            Self::Zero
        } else if rounded.is_integer() {
            Self::Integer(rounded)
        } else {
            Self::Decimal(rounded)
        };
        tracing::trace!(value, ?rendering, "rendered");
        rendering
    }
}

impl std::fmt::Display for Rendering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infinite => write!(f, "{INFINITY_GLYPH}"),
            Self::NotANumber => write!(f, "NaN"),
            Self::Zero => write!(f, "0"),
            Self::Integer(d) | Self::Decimal(d) => write!(f, "{}", d.to_plain_string()),
        }
    }
}

/// Formats a computed double as the calculator's output string.
///
/// - Infinity of either sign renders as `∞`.
/// - Integral values render as plain digits, however large, with no decimal
///   point and no exponent.
/// - Other values render in fixed point with at most eight fractional digits.
///
/// # Example
/// ```
/// use cli_calculator::calculator::format::format;
///
/// assert_eq!(format(2_147_483_648.0), "2147483648");
/// assert_eq!(format(100.0 / 33.0), "3.03030303");
/// assert_eq!(format(-999.0 / 33.0), "-30.27272727");
/// assert_eq!(format(1.7e307 * 12.0), "∞");
/// ```
#[must_use]
pub fn format(value: f64) -> String {
    Rendering::of(value).to_string()
}
