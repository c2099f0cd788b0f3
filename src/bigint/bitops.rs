//! Two's-complement bitwise view over the sign-magnitude representation.
//!
//! Bitwise operators treat every value as if it were stored in an infinite
//! two's-complement word: a negative value is `!(mag - 1)`. The "first
//! nonzero limb" trick projects this one 32-bit limb at a time without
//! materializing the infinite sign extension: limbs below (and including)
//! the lowest nonzero magnitude limb are negated verbatim, limbs above it
//! are complemented, and every limb above the magnitude's own length reads
//! as all-one bits (for negative values) or all-zero bits (for positive
//! ones).

use crate::error::{Error, Result};
use crate::mag::MagBuffer;

use super::BigInt;

/// Little-endian 32-bit "word" `i` of the infinite two's-complement
/// representation.
fn get_limb(negative: bool, mag: &MagBuffer, i: usize) -> u32 {
    let len = mag.len();
    if !negative {
        return if i < len { mag.get_limb(i) } else { 0 };
    }
    if i >= len {
        return u32::MAX;
    }

    let raw = mag.get_limb(i);
    let first_nonzero = (0..len).find(|&k| mag.get_limb(k) != 0);
    match first_nonzero {
        Some(fnz) if i <= fnz => raw.wrapping_neg(),
        _ => !raw,
    }
}

impl BigInt {
    /// The `i`-th little-endian 32-bit limb of the infinite two's-complement
    /// representation of `self`.
    pub fn get_int(&self, i: u64) -> u32 {
        get_limb(self.is_negative(), &self.mag, i as usize)
    }

    /// Whether bit `n` (from the LSB) is set in the two's-complement view.
    /// `n` must be non-negative.
    pub fn test_bit(&self, n: u64) -> Result<bool> {
        let word = (n / 32) as usize;
        let bit = n % 32;
        Ok((self.get_int(word as u64) >> bit) & 1 == 1)
    }

    /// `self` with bit `n` set.
    pub fn set_bit(&self, n: u64) -> Result<BigInt> {
        self.bit_op(n, |w, mask| w | mask)
    }

    /// `self` with bit `n` cleared.
    pub fn clear_bit(&self, n: u64) -> Result<BigInt> {
        self.bit_op(n, |w, mask| w & !mask)
    }

    /// `self` with bit `n` toggled.
    pub fn flip_bit(&self, n: u64) -> Result<BigInt> {
        self.bit_op(n, |w, mask| w ^ mask)
    }

    fn bit_op(&self, n: u64, f: impl Fn(u32, u32) -> u32) -> Result<BigInt> {
        let word_count = (n / 32 + 1).max(self.mag.len() as u64 + 1) as usize;
        let mut words: Vec<u32> = (0..word_count).map(|i| self.get_int(i as u64)).collect();
        let mask = 1u32 << (n % 32);
        let idx = (n / 32) as usize;
        words[idx] = f(words[idx], mask);
        Ok(from_two_complement_words(&words))
    }

    fn bitwise(&self, other: &BigInt, f: impl Fn(u32, u32) -> u32) -> BigInt {
        let len = self.mag.len().max(other.mag.len()) + 1;
        let words: Vec<u32> = (0..len)
            .map(|i| f(self.get_int(i as u64), other.get_int(i as u64)))
            .collect();
        from_two_complement_words(&words)
    }

    /// Bitwise AND over the infinite two's-complement representation.
    pub fn and(&self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a & b)
    }

    /// Bitwise OR over the infinite two's-complement representation.
    pub fn or(&self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a | b)
    }

    /// Bitwise XOR over the infinite two's-complement representation.
    pub fn xor(&self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a ^ b)
    }

    /// Bitwise complement (`!self == -self - 1`).
    pub fn not(&self) -> BigInt {
        let len = self.mag.len() + 1;
        let words: Vec<u32> = (0..len).map(|i| !self.get_int(i as u64)).collect();
        from_two_complement_words(&words)
    }

    /// `self << n`. Fails with [`Error::Domain`] for `n == i32::MIN`
    /// (negating the shift distance would overflow).
    pub fn shift_left(&self, n: i32) -> Result<BigInt> {
        if n == i32::MIN {
            return Err(Error::Domain);
        }
        if n < 0 {
            return self.shift_right(-n);
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let mag = self.mag.shl_bits(n as u64);
        Ok(BigInt::normalize(mag, self.is_negative()))
    }

    /// `self >> n`, rounding toward negative infinity for negative `self`
    /// (i.e. `floor(self / 2^n)`). Fails with [`Error::Domain`] for
    /// `n == i32::MIN`.
    pub fn shift_right(&self, n: i32) -> Result<BigInt> {
        if n == i32::MIN {
            return Err(Error::Domain);
        }
        if n < 0 {
            return self.shift_left(-n);
        }
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }

        let shifted = self.mag.shr_bits(n as u64);
        if !self.is_negative() {
            return Ok(BigInt::normalize(shifted, false));
        }

        // Rounding toward -infinity: if any bit shifted off was set, the
        // magnitude of the (negative) result must be incremented.
        let any_bit_lost = (0..n as u64).any(|i| self.mag.test_bit(i));
        let mag = if any_bit_lost {
            shifted.add(&MagBuffer::from_limbs(vec![1]))
        } else {
            shifted
        };
        Ok(BigInt::normalize(mag, true))
    }
}

/// Reconstructs a `BigInt` from a little-endian sequence of infinite
/// two's-complement words (the sign is read off the top word's high bit).
fn from_two_complement_words(words: &[u32]) -> BigInt {
    let negative = words.last().is_some_and(|&w| w & 0x8000_0000 != 0);
    if !negative {
        let trimmed: Vec<u32> = {
            let mut be: Vec<u32> = words.iter().rev().copied().collect();
            while be.first() == Some(&0) {
                be.remove(0);
            }
            be
        };
        return BigInt::normalize(MagBuffer::from_limbs(trimmed), false);
    }

    // Negate: complement every word, add 1, this yields the magnitude.
    let mut mag_words: Vec<u32> = words.iter().map(|&w| !w).collect();
    let mut carry = 1u64;
    for w in mag_words.iter_mut() {
        let sum = *w as u64 + carry;
        *w = sum as u32;
        carry = sum >> 32;
    }
    let be: Vec<u32> = mag_words.into_iter().rev().collect();
    BigInt::normalize(MagBuffer::from_limbs(be), true)
}
