//! Montgomery arithmetic and sliding-window modular exponentiation for odd
//! moduli.
//!
//! The per-limb interleaved reduction Knuth describes is expressed here as
//! one reduction step operating on the whole scratch value through
//! [`crate::mag`]/[`crate::mul`] rather than unrolled per-limb loops; this
//! trades the tightest possible constant factor for an implementation that
//! is far easier to get right without a compiler in the loop.

use crate::mag::MagBuffer;
use crate::mag::mutable;
use std::cmp::Ordering;

const WINDOW_THRESHOLDS: [u64; 6] = [7, 25, 81, 241, 673, 1793];

/// Sliding-window width for an exponent of the given bit length, except the
/// RSA public exponent 65537 always gets width 1 (its two set bits make a
/// wider window pure overhead).
pub(super) fn window_width(exponent: &MagBuffer) -> u32 {
    if exponent.as_slice() == [65537u32] {
        return 1;
    }

    let bits = exponent.bit_length();
    let mut width = 1u32;
    for &t in &WINDOW_THRESHOLDS {
        if bits > t {
            width += 1;
        } else {
            break;
        }
    }
    width
}

fn get_lower(a: &MagBuffer, n: usize) -> MagBuffer {
    let s = a.as_slice();
    if s.len() <= n {
        MagBuffer::from_limbs(s.to_vec())
    } else {
        MagBuffer::from_limbs(s[s.len() - n..].to_vec())
    }
}

pub(super) struct Montgomery {
    m: MagBuffer,
    n: usize,
    r_bits: u64,
    /// `-m^{-1} mod R`, `R = 2^(32n)`.
    neg_inv: MagBuffer,
}

impl Montgomery {
    /// Builds Montgomery parameters for odd `m`.
    pub(super) fn new(m: &MagBuffer) -> Self {
        debug_assert!(m.as_slice().last().is_some_and(|l| l & 1 == 1));

        let n = m.len();
        let r_bits = n as u64 * 32;

        let mut r_limbs = vec![0u32; n + 1];
        r_limbs[0] = 1;
        let r_mag = MagBuffer::from_limbs(r_limbs);

        let (gcd, negative, coeff) = mutable::extended_gcd(m.as_slice(), r_mag.as_slice());
        debug_assert_eq!(gcd, vec![1], "montgomery setup requires an odd modulus");

        let coeff_mag = MagBuffer::from_limbs(coeff);
        let inv = if negative {
            let reduced = crate::div::divmod(&coeff_mag, &r_mag).1;
            if reduced.is_zero() {
                reduced
            } else {
                r_mag.sub(&reduced)
            }
        } else {
            crate::div::divmod(&coeff_mag, &r_mag).1
        };

        let neg_inv = r_mag.sub(&inv);
        Montgomery {
            m: m.clone(),
            n,
            r_bits,
            neg_inv,
        }
    }

    fn redc(&self, t: &MagBuffer) -> MagBuffer {
        let t_low = get_lower(t, self.n);
        let q_full = crate::mul::multiply(&t_low, &self.neg_inv);
        let q = get_lower(&q_full, self.n);
        let qm = crate::mul::multiply(&q, &self.m);
        let sum = t.add(&qm);
        let mut result = sum.shr_bits(self.r_bits);

        while result.cmp(&self.m) != Ordering::Less {
            result = result.sub(&self.m);
        }
        result
    }

    fn to_mont(&self, a: &MagBuffer) -> MagBuffer {
        let shifted = a.shl_bits(self.r_bits);
        crate::div::divmod(&shifted, &self.m).1
    }

    fn mont_mul(&self, a: &MagBuffer, b: &MagBuffer) -> MagBuffer {
        self.redc(&crate::mul::multiply(a, b))
    }

    fn mont_sqr(&self, a: &MagBuffer) -> MagBuffer {
        self.redc(&crate::mul::square(a))
    }

    fn one_mont(&self) -> MagBuffer {
        self.to_mont(&MagBuffer::from_limbs(vec![1]))
    }

    fn bit(exp: &MagBuffer, i: u64) -> bool {
        exp.test_bit(i)
    }

    /// Raises `base` (already reduced into `[0, m)`) to `exp` modulo `m`,
    /// via odd-modulus Montgomery sliding-window exponentiation.
    pub(super) fn pow(&self, base: &MagBuffer, exp: &MagBuffer) -> MagBuffer {
        if exp.is_zero() {
            return if self.m.as_slice() == [1u32] {
                MagBuffer::zero()
            } else {
                MagBuffer::from_limbs(vec![1])
            };
        }
        if base.is_zero() {
            return MagBuffer::zero();
        }

        let w = window_width(exp);
        let base_mont = self.to_mont(base);

        let table_len = 1usize << (w - 1);
        let mut powers: Vec<MagBuffer> = Vec::with_capacity(table_len);
        powers.push(base_mont.clone());
        if w > 1 {
            let base_sq = self.mont_sqr(&base_mont);
            for i in 1..table_len {
                let prev = powers[i - 1].clone();
                powers.push(self.mont_mul(&prev, &base_sq));
            }
        }

        let bits = exp.bit_length();
        let mut acc = self.one_mont();
        let mut i = bits - 1;

        loop {
            if !Self::bit(exp, i) {
                acc = self.mont_sqr(&acc);
                if i == 0 {
                    break;
                }
                i -= 1;
                continue;
            }

            let window_start = i.saturating_sub(w as u64 - 1);
            let mut l = window_start;
            while !Self::bit(exp, l) {
                l += 1;
            }

            for _ in 0..=(i - l) {
                acc = self.mont_sqr(&acc);
            }

            let mut window_val: usize = 0;
            for k in (l..=i).rev() {
                window_val = (window_val << 1) | if Self::bit(exp, k) { 1 } else { 0 };
            }
            let table_index = (window_val - 1) / 2;
            acc = self.mont_mul(&acc, &powers[table_index]);

            if l == 0 {
                break;
            }
            i = l - 1;
        }

        self.redc(&acc)
    }
}

/// Value mod `2^p`, `p` a bit count (may be 0, giving the zero magnitude).
pub(super) fn mod_pow2(v: &MagBuffer, p: u64) -> MagBuffer {
    if p == 0 {
        return MagBuffer::zero();
    }
    let high = v.shr_bits(p).shl_bits(p);
    v.sub(&high)
}

/// `base^exp mod 2^p` by repeated squaring with a truncating bitmask.
pub(super) fn pow_mod_pow2(base: &MagBuffer, exp: &MagBuffer, p: u64) -> MagBuffer {
    if p == 0 {
        return MagBuffer::zero();
    }
    if exp.is_zero() {
        return MagBuffer::from_limbs(vec![1]);
    }

    let b = mod_pow2(base, p);
    let mut acc = MagBuffer::from_limbs(vec![1]);
    let bits = exp.bit_length();

    for i in (0..bits).rev() {
        acc = mod_pow2(&crate::mul::square(&acc), p);
        if exp.test_bit(i) {
            acc = mod_pow2(&crate::mul::multiply(&acc, &b), p);
        }
    }
    acc
}
