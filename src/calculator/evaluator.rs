use crate::{
    calculator::operation::Operation,
    error::{CalcError, CalcResult},
};

impl Operation {
    /// Applies the operation to two operands using IEEE-754 double arithmetic.
    ///
    /// Overflow saturates to infinity and underflow to zero, exactly as the
    /// hardware produces them. Division by zero is checked explicitly and
    /// rejected for every dividend, including zero itself.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `CalcResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use cli_calculator::{calculator::operation::Operation, error::CalcError};
    ///
    /// assert_eq!(Operation::Multiply.apply(1.5, 2.0).unwrap(), 3.0);
    /// assert_eq!(Operation::Divide.apply(2.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Subtract => left - right,
               Self::Multiply => left * right,
               Self::Divide => {
                   if right == 0.0 {
                       return Err(CalcError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}

/// Evaluates `op` on two already parsed operands.
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] if `op` is [`Operation::Divide`] and
/// `right` is zero.
pub fn evaluate(op: Operation, left: f64, right: f64) -> CalcResult<f64> {
    let result = op.apply(left, right)?;
    tracing::debug!(%op, left, right, result, "evaluated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::{
        calculator::operation::Operation::{Add, Divide, Multiply, Subtract},
        error::CalcError,
    };

    #[test]
    fn regular_operations() {
        assert_eq!(evaluate(Add, 999.0, 5.0).unwrap(), 1004.0);
        assert_eq!(evaluate(Subtract, 1599.0, 497.0).unwrap(), 1102.0);
        assert_eq!(evaluate(Subtract, 129.0, 130.0).unwrap(), -1.0);
        assert_eq!(evaluate(Multiply, 25.0, 15.0).unwrap(), 375.0);
        assert_eq!(evaluate(Divide, 75.0, 5.0).unwrap(), 15.0);
    }

    #[test]
    fn division_by_zero_is_rejected_for_every_dividend() {
        for dividend in [2.0, 0.0, -0.0, -1.7e308, f64::MIN_POSITIVE] {
            assert_eq!(evaluate(Divide, dividend, 0.0), Err(CalcError::DivisionByZero));
            assert_eq!(evaluate(Divide, dividend, -0.0), Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn zero_dividend_yields_zero() {
        assert_eq!(evaluate(Divide, 0.0, 16.0).unwrap(), 0.0);
    }

    #[test]
    fn overflow_saturates_to_infinity() {
        assert_eq!(evaluate(Multiply, 1.7e307, 12.0).unwrap(), f64::INFINITY);
        assert_eq!(evaluate(Add, 1.7e308, 1.7e308).unwrap(), f64::INFINITY);
        assert_eq!(evaluate(Subtract, -1.7e308, 1.7e308).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn underflow_saturates_to_zero() {
        assert_eq!(evaluate(Divide, 1e-300, 1e300).unwrap(), 0.0);
        assert_eq!(evaluate(Multiply, 1e-200, 1e-200).unwrap(), 0.0);
    }
}
