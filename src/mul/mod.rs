//! Multiplication and squaring algorithm dispatch.
//!
//! Grade-school, Karatsuba, Toom-Cook-3 and Schönhage–Strassen all agree on
//! the result for every input they are both defined on; which one actually
//! runs is purely a performance decision gated by the limb-length and
//! bit-length tables below. [`with_forced_algorithm`] overrides the
//! dispatch for differential testing.

mod karatsuba;
mod schoolbook;
mod ss;
mod toom3;

use crate::mag::MagBuffer;
use std::cell::Cell;

const KARATSUBA_LIMB_THRESHOLD: usize = 50;
const TOOM3_LIMB_THRESHOLD: usize = 75;

/// Forces a specific multiplication/squaring algorithm, for differential
/// testing. Dispatch otherwise follows the length/bit-length thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Schoolbook,
    Karatsuba,
    Toom3,
    SchonhageStrassen,
}

thread_local! {
    static FORCED: Cell<Option<Algorithm>> = const { Cell::new(None) };
}

/// Runs `f` with multiplication/squaring dispatch pinned to `alg`.
pub fn with_forced_algorithm<R>(alg: Algorithm, f: impl FnOnce() -> R) -> R {
    let prev = FORCED.with(|c| c.replace(Some(alg)));
    let result = f();
    FORCED.with(|c| c.set(prev));
    result
}

fn forced() -> Option<Algorithm> {
    FORCED.with(|c| c.get())
}

/// Bit-length ranges in which Schönhage–Strassen is used for multiplication.
/// Piecewise and non-monotonic by construction: it reflects where the
/// asymptotically faster transform actually wins against Toom-Cook-3 at
/// these implementation constants, not a simple "bigger is better" curve.
fn ss_applicable_multiply(bits: u64) -> bool {
    const RANGES: &[(u64, u64)] = &[
        (247_000, 262_144),
        (422_000, 524_288),
        (701_000, 1_048_576),
        (1_249_000, u64::MAX),
    ];
    RANGES.iter().any(|&(lo, hi)| bits >= lo && bits < hi)
}

/// Squaring becomes profitable under Schönhage–Strassen at a lower
/// bit-length than general multiplication, since there is only one operand
/// to transform.
fn ss_applicable_square(bits: u64) -> bool {
    const RANGES: &[(u64, u64)] = &[
        (128_000, 262_144),
        (262_144, 524_288),
        (524_288, 1_048_576),
        (1_048_576, u64::MAX),
    ];
    RANGES.iter().any(|&(lo, hi)| bits >= lo && bits < hi)
}

fn pick(a_len: usize, b_len: usize, bits: u64, ss_applicable: bool) -> Algorithm {
    if let Some(alg) = forced() {
        return alg;
    }

    let min_len = a_len.min(b_len);

    if min_len < KARATSUBA_LIMB_THRESHOLD {
        Algorithm::Schoolbook
    } else if min_len < TOOM3_LIMB_THRESHOLD {
        Algorithm::Karatsuba
    } else if ss_applicable {
        Algorithm::SchonhageStrassen
    } else {
        Algorithm::Toom3
    }
}

/// Multiplies two magnitudes, dispatching to the fastest applicable
/// algorithm.
pub(crate) fn multiply(a: &MagBuffer, b: &MagBuffer) -> MagBuffer {
    if a.is_zero() || b.is_zero() {
        return MagBuffer::zero();
    }

    if a.len() == 1 {
        return b.mul_by_limb(a.as_slice()[0]);
    }
    if b.len() == 1 {
        return a.mul_by_limb(b.as_slice()[0]);
    }

    let bits = a.bit_length().max(b.bit_length());
    let alg = pick(a.len(), b.len(), bits, ss_applicable_multiply(bits));

    match alg {
        Algorithm::Schoolbook => schoolbook::multiply(a, b),
        Algorithm::Karatsuba => karatsuba::multiply(a, b),
        Algorithm::Toom3 => toom3::multiply(a, b),
        Algorithm::SchonhageStrassen => ss::multiply(a, b),
    }
}

/// Squares a magnitude, dispatching to the fastest applicable algorithm.
pub(crate) fn square(a: &MagBuffer) -> MagBuffer {
    if a.is_zero() {
        return MagBuffer::zero();
    }
    if a.len() == 1 {
        return a.mul_by_limb(a.as_slice()[0]);
    }

    let bits = a.bit_length();
    let alg = pick(a.len(), a.len(), bits, ss_applicable_square(bits));

    match alg {
        Algorithm::Schoolbook => schoolbook::square(a),
        Algorithm::Karatsuba => karatsuba::square(a),
        Algorithm::Toom3 => toom3::square(a),
        Algorithm::SchonhageStrassen => ss::square(a),
    }
}
