//! Miller–Rabin primality rounds.

use crate::mag::MagBuffer;
use crate::modarith;
use crate::rng::RandomSource;
use std::cmp::Ordering;

fn mask_bits(v: &MagBuffer, bits: u64) -> MagBuffer {
    if bits == 0 {
        return MagBuffer::zero();
    }
    let high = v.shr_bits(bits).shl_bits(bits);
    v.sub(&high)
}

pub(super) fn random_bits(rng: &mut dyn RandomSource, bits: u64) -> MagBuffer {
    let bytes = (bits as usize).div_ceil(8).max(1);
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    mask_bits(&MagBuffer::from_be_bytes(&buf), bits)
}

/// Uniform value in `[0, bound)`, by rejection sampling.
pub(super) fn random_below(rng: &mut dyn RandomSource, bound: &MagBuffer) -> MagBuffer {
    let bits = bound.bit_length().max(1);
    loop {
        let cand = random_bits(rng, bits);
        if cand.cmp(bound) == Ordering::Less {
            return cand;
        }
    }
}

/// Runs `rounds` Miller–Rabin rounds against odd `n > 2`. `true` means `n`
/// survived every round; any failure is conclusive compositeness.
pub(super) fn passes(n: &MagBuffer, rounds: u32, rng: &mut dyn RandomSource) -> bool {
    let one = MagBuffer::from_limbs(vec![1]);
    let n_minus_1 = n.sub(&one);

    let a = n_minus_1.lowest_set_bit().unwrap_or(0);
    let m = n_minus_1.shr_bits(a);

    'rounds: for _ in 0..rounds {
        let b = loop {
            let cand = random_below(rng, n);
            if cand.cmp(&one) == Ordering::Greater {
                break cand;
            }
        };

        let mut z = modarith::mod_pow(&b, false, &m, false, n).expect("n is a positive odd modulus");
        if z.cmp(&one) == Ordering::Equal || z.cmp(&n_minus_1) == Ordering::Equal {
            continue;
        }

        for _ in 1..a {
            z = crate::div::divmod(&crate::mul::square(&z), n).1;
            if z.cmp(&n_minus_1) == Ordering::Equal {
                continue 'rounds;
            }
            if z.cmp(&one) == Ordering::Equal {
                return false;
            }
        }
        return false;
    }
    true
}
