//! The public, signed `BigInt` facade over the unsigned [`crate::mag`],
//! [`crate::mul`], [`crate::div`], [`crate::modarith`] and [`crate::prime`]
//! engines.

mod bitops;
mod convert;
mod ops;

use crate::mag::MagBuffer;
use std::sync::OnceLock;

/// An arbitrary-precision signed integer.
///
/// Represented internally as a sign in `{-1, 0, 1}` plus a non-negative
/// [`MagBuffer`]; `sign == 0` iff the magnitude is empty, so there is no
/// negative zero. Once constructed a value never changes — derived fields
/// (bit length, bit count, lowest set bit) are computed on first use and
/// cached behind a [`OnceLock`], so publication is safe without any unsafe
/// code.
pub struct BigInt {
    sign: i8,
    mag: MagBuffer,
    bit_length: OnceLock<u64>,
    bit_count: OnceLock<u32>,
    lowest_set_bit: OnceLock<i64>,
}

impl BigInt {
    pub(crate) fn from_parts(sign: i8, mag: MagBuffer) -> Self {
        debug_assert!((sign == 0) == mag.is_zero());
        BigInt {
            sign,
            mag,
            bit_length: OnceLock::new(),
            bit_count: OnceLock::new(),
            lowest_set_bit: OnceLock::new(),
        }
    }

    fn zero_value() -> Self {
        BigInt::from_parts(0, MagBuffer::zero())
    }

    pub(crate) fn sign(&self) -> i8 {
        self.sign
    }

    pub(crate) fn magnitude(&self) -> &MagBuffer {
        &self.mag
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.sign < 0
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// Number of bits in the minimal two's-complement representation,
    /// excluding the sign bit (so `0` has bit length `0`, `-1` has bit
    /// length `0`, `1` and `-2` have bit length `1`).
    pub fn bit_length(&self) -> u64 {
        *self.bit_length.get_or_init(|| {
            if self.is_zero() {
                return 0;
            }
            let mag_bits = self.mag.bit_length();
            if self.is_negative() && self.mag.bit_count() == 1 {
                // a power of two in magnitude form is one bit shorter in
                // two's complement when negative (e.g. -2 = ...1110).
                mag_bits - 1
            } else {
                mag_bits
            }
        })
    }

    /// Number of bits in the two's-complement representation that differ
    /// from the sign bit: the popcount of the magnitude when `self >= 0`,
    /// or the popcount of `|self| - 1` when negative (`~x == |x| - 1` for
    /// negative `x`, so the zero bits of `x` are exactly the one bits of
    /// `|x| - 1`).
    pub fn bit_count(&self) -> u32 {
        *self.bit_count.get_or_init(|| {
            if !self.is_negative() {
                self.mag.bit_count()
            } else {
                self.mag.sub(&MagBuffer::from_limbs(vec![1])).bit_count()
            }
        })
    }

    /// Index of the lowest set bit in the two's-complement representation;
    /// `-1` for zero.
    pub fn lowest_set_bit(&self) -> i64 {
        *self.lowest_set_bit.get_or_init(|| {
            if self.is_zero() {
                -1
            } else {
                self.mag.lowest_set_bit().unwrap_or(0) as i64
            }
        })
    }

    pub(crate) fn normalize(mag: MagBuffer, negative: bool) -> Self {
        if mag.is_zero() {
            BigInt::zero_value()
        } else if negative {
            BigInt::from_parts(-1, mag)
        } else {
            BigInt::from_parts(1, mag)
        }
    }
}

impl Clone for BigInt {
    fn clone(&self) -> Self {
        BigInt::from_parts(self.sign, self.mag.clone())
    }
}

impl BigInt {
    /// The constant `1`.
    pub fn one() -> BigInt {
        BigInt::from_parts(1, MagBuffer::from_limbs(vec![1]))
    }

    /// The constant `10`.
    pub fn ten() -> BigInt {
        BigInt::from_parts(1, MagBuffer::from_limbs(vec![10]))
    }

    /// The constant `0`.
    pub fn zero() -> BigInt {
        BigInt::zero_value()
    }
}
