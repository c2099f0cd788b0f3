//! Burnikel–Ziegler recursive division.
//!
//! Splits the divisor into `n`-limb blocks (`n` a power of two) and
//! recurses through the classical `divide2n1n` / `divide3n2n` pair until
//! block size drops below [`BASE_LIMIT`], where it falls back to
//! schoolbook (Knuth D) division. `divide3n2n`'s quotient-correction loop
//! runs at most twice, per the algorithm's own invariant.

use crate::mag::signed::Signed;
use crate::mag::{self, MagBuffer, mutable};
use std::cmp::Ordering;

const BASE_LIMIT: usize = 50;

fn next_pow2(n: usize) -> usize {
    let mut p = 1usize;
    while p < n {
        p <<= 1;
    }
    p
}

/// `a >> (n limbs)`, i.e. all limbs above the lowest `n`.
fn get_upper(a: &MagBuffer, n: usize) -> MagBuffer {
    let s = a.as_slice();
    if s.len() <= n {
        MagBuffer::zero()
    } else {
        MagBuffer::from_limbs(s[..s.len() - n].to_vec())
    }
}

/// `a mod B^n`, i.e. the lowest `n` limbs.
fn get_lower(a: &MagBuffer, n: usize) -> MagBuffer {
    let s = a.as_slice();
    if s.len() <= n {
        MagBuffer::from_limbs(s.to_vec())
    } else {
        MagBuffer::from_limbs(s[s.len() - n..].to_vec())
    }
}

fn get_block(a: &MagBuffer, i: usize, n: usize) -> MagBuffer {
    get_lower(&get_upper(a, i * n), n)
}

fn ones_limbs(n: usize) -> MagBuffer {
    if n == 0 {
        MagBuffer::zero()
    } else {
        MagBuffer::from_limbs(vec![u32::MAX; n])
    }
}

fn dec(v: &MagBuffer) -> MagBuffer {
    MagBuffer::from_limbs(mag::sub(v.as_slice(), &[1]))
}

fn base_case(a: &MagBuffer, b: &MagBuffer) -> (MagBuffer, MagBuffer) {
    let (q, r) = mutable::divmod(a.as_slice(), b.as_slice());
    (MagBuffer::from_limbs(q), MagBuffer::from_limbs(r))
}

/// Divides a (conceptually) `2n`-limb dividend by an `n`-limb divisor.
fn divide2n1n(a: &MagBuffer, b: &MagBuffer, n: usize) -> (MagBuffer, MagBuffer) {
    if n % 2 != 0 || n < BASE_LIMIT {
        return base_case(a, b);
    }

    let half = n / 2;
    let a_upper = get_upper(a, half);
    let a4 = get_lower(a, half);

    let (q1, r1) = divide3n2n(&a_upper, b, half);
    let z = r1.shl_bits(half as u64 * 32).add(&a4);
    let (q2, r2) = divide3n2n(&z, b, half);

    let q = q1.shl_bits(half as u64 * 32).add(&q2);
    (q, r2)
}

/// Divides a (conceptually) `3n`-limb dividend by a `2n`-limb divisor,
/// `n` being the block half-length.
fn divide3n2n(a: &MagBuffer, b: &MagBuffer, n: usize) -> (MagBuffer, MagBuffer) {
    let b1 = get_upper(b, n);
    let b2 = get_lower(b, n);
    let a12 = get_upper(a, n);
    let a3 = get_lower(a, n);

    let (q, r1): (MagBuffer, Signed) = if a12.cmp(&b1) == Ordering::Less {
        let (qq, rr) = divide2n1n(&a12, &b1, n);
        (qq, Signed::from_mag(rr.as_slice().to_vec()))
    } else {
        let q = ones_limbs(n);
        let a12s = Signed::from_mag(a12.as_slice().to_vec());
        let b1s = Signed::from_mag(b1.as_slice().to_vec());
        let r1 = a12s.add(&b1s).sub(&b1s.shl_bits(n as u64 * 32));
        (q, r1)
    };

    let mut r = r1
        .shl_bits(n as u64 * 32)
        .add(&Signed::from_mag(a3.as_slice().to_vec()));
    let qb2 = crate::mul::multiply(&q, &b2);
    r = r.sub(&Signed::from_mag(qb2.as_slice().to_vec()));

    let mut q = q;
    let full_b = Signed::from_mag(b.as_slice().to_vec());
    let mut corrections = 0;
    while r.negative {
        r = r.add(&full_b);
        q = dec(&q);
        corrections += 1;
        debug_assert!(
            corrections <= 2,
            "burnikel-ziegler correction loop exceeded its bound"
        );
    }

    (q, MagBuffer::from_limbs(r.mag))
}

pub(super) fn divmod(a: &MagBuffer, b: &MagBuffer) -> (MagBuffer, MagBuffer) {
    let s = b.len();
    let n = next_pow2(s.max(1));
    let t = (a.len() / n + 1).max(2);

    let mut quotient = MagBuffer::zero();
    let mut z = get_block(a, t - 1, n)
        .shl_bits(n as u64 * 32)
        .add(&get_block(a, t - 2, n));

    if t >= 3 {
        for i in (1..=t - 2).rev() {
            let (qi, ri) = divide2n1n(&z, b, n);
            z = ri.shl_bits(n as u64 * 32).add(&get_block(a, i - 1, n));
            quotient = quotient.add(&qi.shl_bits(i as u64 * n as u64 * 32));
        }
    }

    let (qi, ri) = divide2n1n(&z, b, n);
    quotient = quotient.add(&qi);

    (quotient, ri)
}
