//! Toom-Cook-3 multiplication, O(n^1.465).
//!
//! Splits each operand into three limbs-sized pieces, evaluates both
//! polynomials at `{0, 1, -1, 2, inf}`, multiplies pointwise, and
//! interpolates back using Bodrato's recombination formulas.

use crate::mag::signed::Signed;
use crate::mag::{self, MagBuffer};

fn split3(v: &[u32], k: usize) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    let len = v.len();
    let take = |from: usize, to: usize| -> Vec<u32> {
        if from >= to || from >= len {
            Vec::new()
        } else {
            v[from.max(0)..to.min(len)].to_vec()
        }
    };

    let a0_from = len.saturating_sub(k);
    let a1_from = len.saturating_sub(2 * k);

    let a0 = take(a0_from, len);
    let a1 = take(a1_from, a0_from);
    let a2 = take(0, a1_from);

    (mag::trim(a2), mag::trim(a1), mag::trim(a0))
}

fn eval_point(hi: &Signed, mid: &Signed, lo: &Signed, x: i8) -> Signed {
    match x {
        0 => lo.clone(),
        1 => hi.add(mid).add(lo),
        -1 => hi.sub(mid).add(lo),
        2 => hi.mul_small(4).add(&mid.mul_small(2)).add(lo),
        _ => unreachable!(),
    }
}

fn unsigned_multiply(a: &Signed, b: &Signed) -> Signed {
    let am = MagBuffer::from_limbs(a.mag.clone());
    let bm = MagBuffer::from_limbs(b.mag.clone());
    let prod = super::multiply(&am, &bm);
    Signed::from_signed_mag(a.negative != b.negative, prod.as_slice().to_vec())
}

pub(super) fn multiply(a: &MagBuffer, b: &MagBuffer) -> MagBuffer {
    let max_len = a.len().max(b.len());
    let k = max_len.div_ceil(3);

    let (a2, a1, a0) = split3(a.as_slice(), k);
    let (b2, b1, b0) = split3(b.as_slice(), k);

    let a0 = Signed::from_mag(a0);
    let a1 = Signed::from_mag(a1);
    let a2 = Signed::from_mag(a2);
    let b0 = Signed::from_mag(b0);
    let b1 = Signed::from_mag(b1);
    let b2 = Signed::from_mag(b2);

    let va0 = eval_point(&a2, &a1, &a0, 0);
    let va1 = eval_point(&a2, &a1, &a0, 1);
    let vam1 = eval_point(&a2, &a1, &a0, -1);
    let va2 = eval_point(&a2, &a1, &a0, 2);

    let vb0 = eval_point(&b2, &b1, &b0, 0);
    let vb1 = eval_point(&b2, &b1, &b0, 1);
    let vbm1 = eval_point(&b2, &b1, &b0, -1);
    let vb2 = eval_point(&b2, &b1, &b0, 2);

    let v0 = unsigned_multiply(&va0, &vb0);
    let v1 = unsigned_multiply(&va1, &vb1);
    let vm1 = unsigned_multiply(&vam1, &vbm1);
    let v2 = unsigned_multiply(&va2, &vb2);
    let vinf = unsigned_multiply(&a2, &b2);

    // Bodrato interpolation
    let w0 = v0.clone();
    let w4 = vinf.clone();
    let w2 = v1.add(&vm1).div_small_exact(2).sub(&v0).sub(&vinf);
    let s = v1.sub(&vm1).div_small_exact(2);
    let w3 = v2
        .add(&v0.mul_small(3))
        .sub(&v1.mul_small(3))
        .sub(&vm1)
        .sub(&vinf.mul_small(12))
        .div_small_exact(6);
    let w1 = s.sub(&w3);

    debug_assert!(!w0.negative && !w1.negative && !w2.negative && !w3.negative && !w4.negative);

    let shift = k as u64 * 32;
    let result = w0
        .add(&w1.shl_bits(shift))
        .add(&w2.shl_bits(2 * shift))
        .add(&w3.shl_bits(3 * shift))
        .add(&w4.shl_bits(4 * shift));

    debug_assert!(!result.negative);
    MagBuffer::from_limbs(result.mag)
}

pub(super) fn square(a: &MagBuffer) -> MagBuffer {
    multiply(a, a)
}
