/// The evaluator module applies an operation to two operands.
///
/// It performs plain IEEE-754 double arithmetic and reports division by zero.
/// Overflow and underflow are not errors; they saturate to infinity and zero.
pub mod evaluator;
/// The format module renders a computed double as the output string.
///
/// # Responsibilities
/// - Rounds results to eight fractional digits, cancelling binary noise.
/// - Renders integral results as full digit expansions, never in scientific
///   notation.
/// - Renders overflowed results as the symbolic infinity glyph.
pub mod format;
/// The lexer module validates and parses operand tokens.
///
/// An operand must be exactly one decimal literal, optionally signed and
/// optionally in scientific notation. Imaginary suffixes and other trailing
/// input are rejected.
pub mod lexer;
/// Supported operations and their lookup by name.
pub mod operation;
