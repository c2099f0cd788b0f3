//! The strong Lucas probable-prime test.
//!
//! Finds the first `D` in `5, -7, 9, -11, ...` with Jacobi symbol `-1`, then
//! computes the `(n+1)`-th term of the associated Lucas `U`-sequence by the
//! standard left-to-right doubling recurrence, reducing mod `n` at every
//! step. `n` must be odd and greater than 2.

use crate::mag::MagBuffer;
use crate::mag::signed::Signed;
use crate::modarith;
use std::cmp::Ordering;

fn jacobi(a0: &MagBuffer, n0: &MagBuffer) -> i32 {
    let mut a = a0.clone();
    let mut n = n0.clone();
    let mut result = 1;

    loop {
        if a.is_zero() {
            return if n.as_slice() == [1u32] { result } else { 0 };
        }

        while !a.test_bit(0) {
            a = a.shr_bits(1);
            let r8 = n.get_limb(0) & 7;
            if r8 == 3 || r8 == 5 {
                result = -result;
            }
        }

        if a.as_slice() == [1u32] {
            return result;
        }

        if (a.get_limb(0) & 3 == 3) && (n.get_limb(0) & 3 == 3) {
            result = -result;
        }

        let tmp = crate::div::divmod(&n, &a).1;
        n = a;
        a = tmp;
    }
}

fn isqrt(n: &MagBuffer) -> MagBuffer {
    if n.is_zero() {
        return MagBuffer::zero();
    }

    let bits = n.bit_length();
    let mut x = MagBuffer::from_limbs(vec![1]).shl_bits(bits.div_ceil(2));
    loop {
        let (q, _) = crate::div::divmod(n, &x);
        let y = x.add(&q).shr_bits(1);
        if y.cmp(&x) != Ordering::Less {
            return x;
        }
        x = y;
    }
}

fn is_perfect_square(n: &MagBuffer) -> bool {
    let r = isqrt(n);
    crate::mul::square(&r).cmp(n) == Ordering::Equal
}

fn add_mod(a: &MagBuffer, b: &MagBuffer, n: &MagBuffer) -> MagBuffer {
    let s = a.add(b);
    if s.cmp(n) != Ordering::Less { s.sub(n) } else { s }
}

fn sub_mod(a: &MagBuffer, b: &MagBuffer, n: &MagBuffer) -> MagBuffer {
    if a.cmp(b) != Ordering::Less {
        a.sub(b)
    } else {
        n.sub(&b.sub(a))
    }
}

fn mul_mod(a: &MagBuffer, b: &MagBuffer, n: &MagBuffer) -> MagBuffer {
    crate::div::divmod(&crate::mul::multiply(a, b), n).1
}

/// Halves a value already reduced into `[0, n)`, `n` odd.
fn half_mod(v: &MagBuffer, n: &MagBuffer) -> MagBuffer {
    if v.test_bit(0) {
        v.add(n).shr_bits(1)
    } else {
        v.shr_bits(1)
    }
}

fn find_d(n: &MagBuffer) -> Option<(MagBuffer, bool)> {
    let mut mag = MagBuffer::from_limbs(vec![5]);
    let mut negative = false;

    for _ in 0..1000 {
        let reduced = modarith::modulo(&mag, negative, n).expect("n is a positive odd modulus");
        let j = jacobi(&reduced, n);
        if j == -1 {
            return Some((mag, negative));
        }
        if j == 0 {
            return None;
        }
        mag = mag.add(&MagBuffer::from_limbs(vec![2]));
        negative = !negative;
    }
    None
}

pub(super) fn is_probable_prime(n: &MagBuffer) -> bool {
    if is_perfect_square(n) {
        return false;
    }

    let Some((d_mag, d_negative)) = find_d(n) else {
        return false;
    };

    let d_mod_n = modarith::modulo(&d_mag, d_negative, n).expect("n is a positive odd modulus");

    let one = Signed::from_mag(vec![1]);
    let d_signed = Signed::from_signed_mag(d_negative, d_mag.as_slice().to_vec());
    let q_signed = one.sub(&d_signed).div_small_exact(4);
    let mut qk = modarith::modulo(
        &MagBuffer::from_limbs(q_signed.mag.clone()),
        q_signed.negative,
        n,
    )
    .expect("n is a positive odd modulus");
    let q_mod_n = qk.clone();

    let k = n.add(&MagBuffer::from_limbs(vec![1]));
    let bits = k.bit_length();

    let mut u = MagBuffer::from_limbs(vec![1]);
    let mut v = MagBuffer::from_limbs(vec![1]);

    for i in (0..bits - 1).rev() {
        let u2 = mul_mod(&u, &v, n);
        let v2 = sub_mod(&mul_mod(&v, &v, n), &add_mod(&qk, &qk, n), n);
        let qk2 = mul_mod(&qk, &qk, n);

        if k.test_bit(i) {
            let u3 = half_mod(&add_mod(&u2, &v2, n), n);
            let v3 = half_mod(&add_mod(&mul_mod(&d_mod_n, &u2, n), &v2, n), n);
            u = u3;
            v = v3;
            qk = mul_mod(&qk2, &q_mod_n, n);
        } else {
            u = u2;
            v = v2;
            qk = qk2;
        }
    }

    u.is_zero()
}
