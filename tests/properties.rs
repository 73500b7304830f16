use cli_calculator::{
    calculate,
    calculator::{format::format, operation::Operation},
    error::CalcError,
};
use proptest::prelude::*;

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn calculation_is_pure(op in operation(), a in finite(), b in finite()) {
        let (lhs, rhs) = (a.to_string(), b.to_string());

        prop_assert_eq!(calculate(op.name(), &lhs, &rhs), calculate(op.name(), &lhs, &rhs));
    }

    #[test]
    fn integral_values_have_no_decimal_point(n in any::<i64>()) {
        #[allow(clippy::cast_precision_loss)]
        let value = n as f64;
        let output = format(value);

        prop_assert!(!output.contains('.'));
        prop_assert!(output.chars().skip_while(|&c| c == '-').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn huge_doubles_are_expanded(value in prop::num::f64::NORMAL.prop_filter("huge", |v| v.abs() > 1e16)) {
        let output = format(value);

        prop_assert!(!output.contains(['.', 'e', 'E']));
        prop_assert_eq!(output.starts_with('-'), value < 0.0);
    }

    #[test]
    fn at_most_eight_fractional_digits(value in finite()) {
        let output = format(value);

        if let Some((_, fraction)) = output.split_once('.') {
            prop_assert!(!fraction.is_empty() && fraction.len() <= 8);
            prop_assert!(!fraction.ends_with('0'));
        }
    }

    #[test]
    fn division_by_zero_always_fails(a in finite(), zero in prop::sample::select(vec!["0", "-0", "0.0", "0e5"])) {
        prop_assert_eq!(calculate("divide", &a.to_string(), zero), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn zero_divided_by_nonzero_is_zero(b in prop::num::f64::NORMAL) {
        prop_assert_eq!(calculate("divide", "0", &b.to_string()), Ok("0".to_string()));
    }

    #[test]
    fn imaginary_operand_always_fails(op in operation(), n in any::<u32>(), b in finite()) {
        let token = format!("-{n}i");

        prop_assert_eq!(calculate(op.name(), &token, &b.to_string()),
                        Err(CalcError::InvalidOperand { token }));
    }

    #[test]
    fn unknown_operation_carries_the_name(name in "[a-zA-Z]{1,12}", a in finite(), b in finite()) {
        prop_assume!(name.parse::<Operation>().is_err());

        prop_assert_eq!(calculate(&name, &a.to_string(), &b.to_string()),
                        Err(CalcError::UnknownOperation { name: name.clone() }));
    }
}
