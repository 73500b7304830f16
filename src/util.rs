/// Numeric conversion helpers.
///
/// This module converts doubles into arbitrary-precision decimals without
/// picking up the noise of their exact binary expansion, and answers whether a
/// double is integral.
pub mod num;
