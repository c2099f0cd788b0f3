//! Barrett division via a precomputed reciprocal.
//!
//! The reciprocal `mu = floor(beta^(2n) / b)` (`beta = 2^32`, `n = |b|` in
//! limbs) is computed once per call and reused for every `n`-limb block of
//! the dividend, turning each block's division into a multiply, a shift,
//! and a bounded correction loop instead of a full long division.
//!
//! The reciprocal itself is obtained with a single direct schoolbook
//! division rather than the doubling-precision Newton iteration classic
//! Barrett implementations use to build it incrementally; that iteration is
//! a performance technique for computing `mu` faster, not something the
//! correctness of block division depends on.

use crate::mag::signed::Signed;
use crate::mag::{self, MagBuffer, mutable};
use std::cmp::Ordering;

fn get_upper(a: &MagBuffer, n: usize) -> MagBuffer {
    let s = a.as_slice();
    if s.len() <= n {
        MagBuffer::zero()
    } else {
        MagBuffer::from_limbs(s[..s.len() - n].to_vec())
    }
}

fn get_lower(a: &MagBuffer, n: usize) -> MagBuffer {
    let s = a.as_slice();
    if s.len() <= n {
        MagBuffer::from_limbs(s.to_vec())
    } else {
        MagBuffer::from_limbs(s[s.len() - n..].to_vec())
    }
}

fn inc(v: &MagBuffer) -> MagBuffer {
    MagBuffer::from_limbs(mag::add(v.as_slice(), &[1]))
}

fn dec(v: &MagBuffer) -> MagBuffer {
    MagBuffer::from_limbs(mag::sub(v.as_slice(), &[1]))
}

/// `floor(beta^(2n) / b)`, `n = b.len()`.
fn reciprocal(b: &MagBuffer, n: usize) -> MagBuffer {
    let mut limbs = vec![0u32; 2 * n + 1];
    limbs[0] = 1;
    let dividend = MagBuffer::from_limbs(limbs);
    let (q, _r) = mutable::divmod(dividend.as_slice(), b.as_slice());
    MagBuffer::from_limbs(q)
}

/// Divides a window of at most `2n` limbs by `b` using the precomputed
/// reciprocal `mu`, correcting the Barrett estimate by at most two steps
/// in either direction.
fn single_step(window: &MagBuffer, b: &MagBuffer, mu: &MagBuffer, n: usize) -> (MagBuffer, MagBuffer) {
    let prod = crate::mul::multiply(window, mu);
    let mut q = prod.shr_bits(2 * n as u64 * 32);

    let qb = crate::mul::multiply(&q, b);
    let mut r = Signed::from_mag(window.as_slice().to_vec()).sub(&Signed::from_mag(qb.as_slice().to_vec()));

    let mut corrections = 0;
    loop {
        if r.negative {
            r = r.add(&Signed::from_mag(b.as_slice().to_vec()));
            q = dec(&q);
        } else if mag::cmp(&r.mag, b.as_slice()) != Ordering::Less {
            r = r.sub(&Signed::from_mag(b.as_slice().to_vec()));
            q = inc(&q);
        } else {
            break;
        }
        corrections += 1;
        debug_assert!(corrections <= 4, "barrett correction loop exceeded its bound");
    }

    (q, MagBuffer::from_limbs(r.mag))
}

pub(super) fn divmod(a: &MagBuffer, b: &MagBuffer) -> (MagBuffer, MagBuffer) {
    let n = b.len();
    let mu = reciprocal(b, n);

    let total = a.len();
    if total <= 2 * n {
        return single_step(a, b, &mu, n);
    }

    // Split `a` into base-beta^n blocks, most significant first, the top
    // block possibly shorter than n limbs.
    let t = total.div_ceil(n);
    let top_width = total - n * (t - 1);

    let mut remainder = get_upper(a, total - top_width);

    let mut quotient = MagBuffer::zero();
    for i in (0..t - 1).rev() {
        let block = {
            let shifted = get_upper(a, i * n);
            get_lower(&shifted, n)
        };
        let window = remainder.shl_bits(n as u64 * 32).add(&block);
        let (qi, ri) = single_step(&window, b, &mu, n);
        remainder = ri;
        quotient = quotient.add(&qi.shl_bits(i as u64 * n as u64 * 32));
    }

    (quotient, remainder)
}
