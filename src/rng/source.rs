//! The [`RandomSource`] seam through which callers supply randomness.
//!
//! Every public constructor that needs randomness (random-bit-length
//! values, probable-prime generation) takes a `&mut dyn RandomSource`
//! rather than a concrete generator type, so callers may plug in
//! [`Csprng`] or any generator of their own. When a caller does not have
//! one handy, [`default_source`] hands out a lazily-initialized
//! process-wide [`Csprng`] guarded by a mutex.

use std::sync::{Mutex, OnceLock};

use super::Csprng;

/// A source of cryptographically meaningful randomness.
///
/// Implementors only need to fill a byte buffer; callers needing integers
/// or bit patterns derive them from the bytes (see `prime::generate` and
/// `BigInt::random_bits`).
pub trait RandomSource {
    /// Fills `out` completely with random bytes.
    fn fill_bytes(&mut self, out: &mut [u8]);
}

impl RandomSource for Csprng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        Csprng::fill_bytes(self, out)
    }
}

/// Adapts any `FnMut(&mut [u8])` closure into a [`RandomSource`], so
/// callers can pass a closure instead of implementing the trait.
impl<F: FnMut(&mut [u8])> RandomSource for F {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        self(out)
    }
}

static DEFAULT: OnceLock<Mutex<Csprng>> = OnceLock::new();

/// Fills `out` using the process-wide default [`Csprng`], initializing it
/// from OS entropy on first use.
pub(crate) fn fill_default(out: &mut [u8]) {
    let csprng = DEFAULT.get_or_init(|| Mutex::new(Csprng::from_os()));
    csprng
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .fill_bytes(out);
}

/// A zero-sized [`RandomSource`] that forwards to the process-wide default
/// generator, for public constructors that don't take an explicit RNG.
pub(crate) struct DefaultSource;

impl RandomSource for DefaultSource {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        fill_default(out);
    }
}
