//! Primality testing and probable-prime generation.
//!
//! `is_probable_prime` dispatches to a bit-length-scaled number of
//! Miller–Rabin rounds plus, for larger candidates, one strong Lucas round —
//! the same two-test combination the well-known `BigInteger` implementations
//! settled on after Miller–Rabin alone was found to admit adversarially
//! constructed pseudoprimes.

mod generate;
mod lucas;
mod miller_rabin;
mod sieve;

use crate::error::Result;
use crate::mag::MagBuffer;
use crate::rng::RandomSource;

/// `certainty <= 0` always returns `true` (treat as "don't know, assume
/// prime" per the facade's contract). `n` is a magnitude; primality doesn't
/// depend on sign, so the facade passes in `abs(n)`.
pub(crate) fn is_probable_prime(n: &MagBuffer, certainty: i32, rng: &mut dyn RandomSource) -> bool {
    if certainty <= 0 {
        return true;
    }
    if n.as_slice() == [2u32] {
        return true;
    }
    if n.is_zero() || n.as_slice() == [1u32] || !n.test_bit(0) {
        return false;
    }
    prime_to_certainty(n, certainty, rng)
}

fn miller_rabin_rounds(certainty: i32, bits: u64) -> u32 {
    let base_rounds: u32 = if bits < 100 {
        50
    } else if bits < 256 {
        27
    } else if bits < 512 {
        15
    } else if bits < 768 {
        8
    } else if bits < 1024 {
        4
    } else {
        2
    };
    let scaled = (certainty as u32 + 1) / 2;
    base_rounds.max(scaled)
}

fn prime_to_certainty(n: &MagBuffer, certainty: i32, rng: &mut dyn RandomSource) -> bool {
    let bits = n.bit_length();
    let rounds = miller_rabin_rounds(certainty, bits);

    if !miller_rabin::passes(n, rounds, rng) {
        return false;
    }
    if bits >= 100 {
        return lucas::is_probable_prime(n);
    }
    true
}

pub(crate) fn probable_prime(bit_length: u64, certainty: i32, rng: &mut dyn RandomSource) -> Result<MagBuffer> {
    generate::generate(bit_length, certainty, rng)
}

pub(crate) fn next_probable_prime(n: &MagBuffer, certainty: i32, rng: &mut dyn RandomSource) -> MagBuffer {
    generate::next_probable_prime(n, certainty, rng)
}
