//! Random number generation module
//!
//! This module provides the randomness facilities used by prime
//! generation and by random-bit-length value construction.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) and exposes a high-level CSPRNG, along with the [`RandomSource`]
//! trait that lets callers supply their own generator instead.

pub(crate) mod chacha20;
mod csprng;
mod source;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the default source of randomness used whenever a public
/// constructor is not given one explicitly.
pub use csprng::Csprng;

pub use source::RandomSource;
pub(crate) use source::{DefaultSource, fill_default};
