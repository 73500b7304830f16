#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors a single calculation can end in.
///
/// Every variant is an expected, user-facing condition. Its `Display` output is
/// the exact message shown on the terminal.
pub enum CalcError {
    /// An operand was not a decimal literal.
    InvalidOperand {
        /// The offending token, as it was supplied.
        token: String,
    },
    /// The operation name is not one of the supported operations.
    UnknownOperation {
        /// The offending name, as it was supplied.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { .. } => write!(f, "Invalid argument. Must be a numeric value."),
            Self::UnknownOperation { name } => write!(f, "Error: Unknown operation: {name}"),
            Self::DivisionByZero => write!(f, "Error: Cannot divide by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::CalcError;

    #[test]
    fn messages_match_terminal_output() {
        let invalid = CalcError::InvalidOperand { token: "-4i".to_string() };
        let unknown = CalcError::UnknownOperation { name: "division".to_string() };

        assert_eq!(invalid.to_string(), "Invalid argument. Must be a numeric value.");
        assert_eq!(unknown.to_string(), "Error: Unknown operation: division");
        assert_eq!(CalcError::DivisionByZero.to_string(), "Error: Cannot divide by zero");
    }
}
