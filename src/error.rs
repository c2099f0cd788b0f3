//! Error types returned by fallible operations on [`crate::BigInt`].

use core::fmt;

/// The error type produced by every fallible operation in this crate.
///
/// There is deliberately a single flat enum rather than one error type per
/// module: most operations can fail in more than one of these ways
/// depending on their arguments, and callers generally want to match on
/// the *kind* of failure rather than on which subsystem raised it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The arguments violate a mathematical precondition of the operation:
    /// division by zero, a non-positive modulus, a negative exponent where
    /// one is not supported, a negative bit address, or a shift distance of
    /// `i32::MIN`.
    Domain,

    /// Textual or byte input could not be parsed: empty input, an embedded
    /// sign character, an illegal digit for the given radix, a radix
    /// outside `[2, 36]`, or a sign/magnitude mismatch.
    Format,

    /// `mod_inverse` was called with arguments whose GCD is not 1, so no
    /// inverse exists.
    NotInvertible,

    /// An exact conversion was requested but the value does not fit in the
    /// target type.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::Domain => "argument outside the domain of this operation",
            Error::Format => "malformed input",
            Error::NotInvertible => "value has no modular inverse",
            Error::OutOfRange => "value does not fit in the target type",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

/// Convenient alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
