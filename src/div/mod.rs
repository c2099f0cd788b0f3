//! Division algorithm dispatch: schoolbook, Burnikel–Ziegler, Barrett.
//!
//! All three must agree: `dividend = quotient * divisor + remainder`,
//! `0 <= remainder < divisor`, for every positive `dividend`/`divisor` pair.
//! Sign handling lives in the `bigint` facade; this module only ever sees
//! non-negative magnitudes.

mod barrett;
mod burnikel_ziegler;

use crate::mag::{MagBuffer, mutable};

const SCHOOLBOOK_LIMB_THRESHOLD: usize = 50;

fn barrett_applicable(bits: u64) -> bool {
    const RANGES: &[(u64, u64)] = &[
        (3_300_000, 4_100_000),
        (5_900_000, 8_300_000),
        (9_700_000, 16_000_000),
        (19_000_000, u64::MAX),
    ];
    RANGES.iter().any(|&(lo, hi)| bits >= lo && bits < hi)
}

/// Divides non-negative magnitudes, returning `(quotient, remainder)`.
/// Requires `divisor` non-zero.
pub(crate) fn divmod(dividend: &MagBuffer, divisor: &MagBuffer) -> (MagBuffer, MagBuffer) {
    debug_assert!(!divisor.is_zero());

    if dividend.len() < SCHOOLBOOK_LIMB_THRESHOLD || divisor.len() < SCHOOLBOOK_LIMB_THRESHOLD {
        let (q, r) = mutable::divmod(dividend.as_slice(), divisor.as_slice());
        return (MagBuffer::from_limbs(q), MagBuffer::from_limbs(r));
    }

    let bits = dividend.bit_length().max(divisor.bit_length());
    if barrett_applicable(bits) {
        barrett::divmod(dividend, divisor)
    } else {
        burnikel_ziegler::divmod(dividend, divisor)
    }
}
