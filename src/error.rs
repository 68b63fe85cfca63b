use thiserror::Error;

/// Errors surfaced by parsing, division, and the modular layer.
///
/// Ordinary addition, subtraction, and multiplication wrap silently; only the
/// semantic preconditions below are reported. Errors are returned to the
/// caller unmodified, there is no retry or recovery inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A digit string was empty or contained a character outside its radix.
    #[error("invalid digit in number string")]
    InvalidFormat,
    /// A parsed or copied value does not fit the target width.
    #[error("value exceeds the maximum for this width")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    /// A precondition of a modular operation was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// `gcd(a, m) != 1`, so no modular inverse exists.
    #[error("no modular inverse exists")]
    NoInverse,
    /// Modular square root requested for a non-residue.
    #[error("value is not a quadratic residue")]
    NotASquare,
    /// Modular square root requested with a composite modulus.
    #[error("modulus is not an odd prime")]
    NotPrime,
    /// Limb or bit index beyond the width.
    #[error("index {0} out of range")]
    IndexOutOfRange(usize),
}
