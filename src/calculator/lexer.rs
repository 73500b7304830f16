use logos::Logos;

use crate::error::{CalcError, CalcResult};

/// Represents a lexical token in an operand.
///
/// An operand is valid only if it lexes to exactly one [`Token::Number`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Decimal literal tokens, such as `42`, `-3.14`, `.5`, `5.` or
    /// `1.7e+308`.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
}

/// Parses a decimal literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the slice is not a valid float or overflows `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses an operand token into an `f64`.
///
/// The whole token must be a single decimal literal. Anything else, including
/// trailing characters such as the `i` of an imaginary number, surrounding
/// whitespace, or names like `inf`, is rejected instead of being truncated.
///
/// # Errors
/// Returns [`CalcError::InvalidOperand`] if the token is not exactly one
/// finite decimal literal.
///
/// # Example
/// ```
/// use cli_calculator::{calculator::lexer::parse_operand, error::CalcError};
///
/// assert_eq!(parse_operand("1.2e-108").unwrap(), 1.2e-108);
/// assert_eq!(parse_operand("-12").unwrap(), -12.0);
///
/// let err = parse_operand("-4i").unwrap_err();
/// assert!(matches!(err, CalcError::InvalidOperand { .. }));
/// ```
pub fn parse_operand(token: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidOperand { token: token.to_string() };

    let mut lexer = Token::lexer(token);

    let value = match lexer.next() {
        Some(Ok(Token::Number(value))) => value,
        _ => return Err(invalid()),
    };

    if let Some(rest) = lexer.next() {
        tracing::trace!(token, trailing = lexer.slice(), ?rest, "operand has trailing input");
        return Err(invalid());
    }

    tracing::trace!(token, value, "parsed operand");
    Ok(value)
}
