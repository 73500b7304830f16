use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// One of the four supported arithmetic operations.
///
/// Operations are identified case-sensitively by their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add`
    Add,
    /// `subtract`
    Subtract,
    /// `multiply`
    Multiply,
    /// `divide`
    Divide,
}

impl Operation {
    /// Every supported operation, in the order they are listed to the user.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the name the operation is invoked by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|op| op.name() == name)
                 .ok_or_else(|| CalcError::UnknownOperation { name: name.to_string() })
    }
}

/// Resolves an operation name.
///
/// # Errors
/// Returns [`CalcError::UnknownOperation`] carrying `name` if it is not one of
/// `add`, `subtract`, `multiply` or `divide`.
///
/// # Example
/// ```
/// use cli_calculator::{
///     calculator::operation::{Operation, resolve},
///     error::CalcError,
/// };
///
/// assert_eq!(resolve("divide").unwrap(), Operation::Divide);
/// assert_eq!(resolve("division").unwrap_err(),
///            CalcError::UnknownOperation { name: "division".to_string() });
/// ```
pub fn resolve(name: &str) -> CalcResult<Operation> {
    name.parse()
}
