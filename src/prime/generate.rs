//! Prime generation: `probable_prime` and `next_probable_prime`.

use crate::error::{Error, Result};
use crate::mag::MagBuffer;
use crate::rng::RandomSource;
use std::cmp::Ordering;

use super::sieve::BitSieve;
use super::{miller_rabin, prime_to_certainty};

const SMALL_PRIME_THRESHOLD: u64 = 95;
const SMALL_TRIAL_DIVISORS: [u32; 12] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

fn from_u64(v: u64) -> MagBuffer {
    if v == 0 {
        MagBuffer::zero()
    } else {
        MagBuffer::from_limbs(vec![(v >> 32) as u32, v as u32])
    }
}

fn set_bit(v: &MagBuffer, i: u64) -> MagBuffer {
    if v.test_bit(i) {
        v.clone()
    } else {
        v.add(&MagBuffer::from_limbs(vec![1]).shl_bits(i))
    }
}

fn clear_low_bit(v: &MagBuffer) -> MagBuffer {
    if v.test_bit(0) {
        v.sub(&MagBuffer::from_limbs(vec![1]))
    } else {
        v.clone()
    }
}

fn sieve_length(bit_length: u64) -> usize {
    (((bit_length / 20).max(1)) * 64) as usize
}

fn passes_small_trial_division(c: &MagBuffer) -> bool {
    for &p in &SMALL_TRIAL_DIVISORS {
        if c.as_slice() == [p] {
            continue;
        }
        let r = crate::div::divmod(c, &MagBuffer::from_limbs(vec![p])).1;
        if r.is_zero() {
            return false;
        }
    }
    true
}

fn generate_small(bit_length: u64, certainty: i32, rng: &mut dyn RandomSource) -> MagBuffer {
    loop {
        let mut cand = miller_rabin::random_bits(rng, bit_length);
        cand = set_bit(&cand, bit_length - 1);
        cand = set_bit(&cand, 0);

        if passes_small_trial_division(&cand) && prime_to_certainty(&cand, certainty, rng) {
            return cand;
        }
    }
}

fn generate_large(bit_length: u64, certainty: i32, rng: &mut dyn RandomSource) -> MagBuffer {
    let mut base = miller_rabin::random_bits(rng, bit_length);
    base = set_bit(&base, bit_length - 1);
    base = clear_low_bit(&base);

    let len = sieve_length(bit_length);
    loop {
        let sieve = BitSieve::new(base.clone(), len);
        for i in 0..sieve.len() {
            if sieve.is_marked(i) {
                continue;
            }
            let cand = sieve.candidate(i);
            if prime_to_certainty(&cand, certainty, rng) {
                return cand;
            }
        }
        base = base.add(&from_u64(2 * len as u64));
    }
}

pub(super) fn generate(bit_length: u64, certainty: i32, rng: &mut dyn RandomSource) -> Result<MagBuffer> {
    if bit_length < 2 {
        return Err(Error::Domain);
    }

    if bit_length < SMALL_PRIME_THRESHOLD {
        Ok(generate_small(bit_length, certainty, rng))
    } else {
        Ok(generate_large(bit_length, certainty, rng))
    }
}

pub(super) fn next_probable_prime(n: &MagBuffer, certainty: i32, rng: &mut dyn RandomSource) -> MagBuffer {
    let mut cand = n.add(&MagBuffer::from_limbs(vec![1]));
    if !cand.test_bit(0) {
        cand = cand.add(&MagBuffer::from_limbs(vec![1]));
    }

    let bit_length = cand.bit_length().max(2);

    if bit_length < SMALL_PRIME_THRESHOLD {
        loop {
            if passes_small_trial_division(&cand) && prime_to_certainty(&cand, certainty, rng) {
                return cand;
            }
            cand = cand.add(&MagBuffer::from_limbs(vec![2]));
        }
    }

    let mut base = clear_low_bit(&cand);
    let len = sieve_length(bit_length);

    loop {
        let sieve = BitSieve::new(base.clone(), len);
        for i in 0..sieve.len() {
            if sieve.is_marked(i) {
                continue;
            }
            let candidate = sieve.candidate(i);
            if candidate.cmp(&cand) == Ordering::Less {
                continue;
            }
            if prime_to_certainty(&candidate, certainty, rng) {
                return candidate;
            }
        }
        base = base.add(&from_u64(2 * len as u64));
    }
}
