//! Karatsuba multiplication, O(n^log2(3)).

use crate::mag::{self, MagBuffer};

fn split(v: &[u32], half: usize) -> (Vec<u32>, Vec<u32>) {
    if v.len() <= half {
        (Vec::new(), v.to_vec())
    } else {
        let at = v.len() - half;
        (v[..at].to_vec(), v[at..].to_vec())
    }
}

pub(super) fn multiply(a: &MagBuffer, b: &MagBuffer) -> MagBuffer {
    let max_len = a.len().max(b.len());
    let half = max_len.div_ceil(2);

    let (ah, al) = split(a.as_slice(), half);
    let (bh, bl) = split(b.as_slice(), half);

    let ah = MagBuffer::from_limbs(ah);
    let al = MagBuffer::from_limbs(al);
    let bh = MagBuffer::from_limbs(bh);
    let bl = MagBuffer::from_limbs(bl);

    let p1 = super::multiply(&ah, &bh);
    let p2 = super::multiply(&al, &bl);

    let a_sum = ah.add(&al);
    let b_sum = bh.add(&bl);
    let p3 = super::multiply(&a_sum, &b_sum);

    // p3 - p1 - p2, computed as an unsigned magnitude since p3 >= p1 + p2
    // always holds for non-negative inputs (p3 = (ah+al)(bh+bl) = p1+p2+cross)
    let cross = {
        let sum = p1.add(&p2);
        p3.sub(&sum)
    };

    let shift_bits = half as u64 * 32;
    p1.shl_bits(2 * shift_bits)
        .add(&cross.shl_bits(shift_bits))
        .add(&p2)
}

pub(super) fn square(a: &MagBuffer) -> MagBuffer {
    multiply(a, a)
}
