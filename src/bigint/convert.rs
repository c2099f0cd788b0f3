//! Constructors and output conversions: bytes, text, random values,
//! probable primes, small-integer conveniences, and string/byte rendering.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::mag::MagBuffer;
use crate::prime;
use crate::rng::{self, RandomSource};

use super::BigInt;

const MIN_RADIX: u32 = 2;
const MAX_RADIX: u32 = 36;

impl BigInt {
    /// Builds a value from a big-endian two's-complement byte array. Fails
    /// with [`Error::Format`] on an empty slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<BigInt> {
        if bytes.is_empty() {
            return Err(Error::Format);
        }

        let negative = bytes[0] & 0x80 != 0;
        if !negative {
            return Ok(BigInt::normalize(MagBuffer::from_be_bytes(bytes), false));
        }

        let mut complement: Vec<u8> = bytes.iter().map(|&b| !b).collect();
        let mut carry = 1u16;
        for b in complement.iter_mut().rev() {
            let sum = *b as u16 + carry;
            *b = sum as u8;
            carry = sum >> 8;
        }
        Ok(BigInt::normalize(MagBuffer::from_be_bytes(&complement), true))
    }

    /// Builds a value from an explicit sign (`-1`, `0`, or `1`) and a
    /// big-endian unsigned magnitude. Fails with [`Error::Format`] if
    /// `sign == 0` but the magnitude is non-zero, or vice versa, or if
    /// `sign` is outside `{-1, 0, 1}`.
    pub fn from_sign_and_magnitude(sign: i32, magnitude: &[u8]) -> Result<BigInt> {
        let mag = MagBuffer::from_be_bytes(magnitude);
        match sign {
            0 if mag.is_zero() => Ok(BigInt::zero()),
            1 if !mag.is_zero() => Ok(BigInt::from_parts(1, mag)),
            -1 if !mag.is_zero() => Ok(BigInt::from_parts(-1, mag)),
            _ => Err(Error::Format),
        }
    }

    /// Parses a signed string in the given radix (`[2, 36]`). A leading
    /// `+` or `-` is permitted only at position 0.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) || s.is_empty() {
            return Err(Error::Format);
        }

        let bytes = s.as_bytes();
        let (negative, digits) = match bytes[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        if digits.is_empty() {
            return Err(Error::Format);
        }
        if digits.as_bytes().iter().any(|&b| (b as char) == '-' || (b as char) == '+') {
            return Err(Error::Format);
        }

        let mut mag = MagBuffer::zero();
        let radix_mag = MagBuffer::from_limbs(vec![radix]);
        for c in digits.chars() {
            let digit = c.to_digit(radix).ok_or(Error::Format)?;
            mag = crate::mul::multiply(&mag, &radix_mag).add(&MagBuffer::from_limbs(vec![digit]));
        }

        Ok(BigInt::normalize(mag, negative))
    }

    /// A uniformly random non-negative value with exactly `bit_length` bits
    /// of randomness (i.e. in `[0, 2^bit_length)`), drawn from `rng`.
    pub fn random_bits(bit_length: u64, rng: &mut dyn RandomSource) -> BigInt {
        if bit_length == 0 {
            return BigInt::zero();
        }
        let bytes = (bit_length as usize).div_ceil(8);
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);

        let excess = bytes as u64 * 8 - bit_length;
        if excess > 0 {
            buf[0] &= 0xFFu8 >> excess;
        }
        BigInt::normalize(MagBuffer::from_be_bytes(&buf), false)
    }

    /// A uniformly random non-negative value using the process-wide default
    /// CSPRNG.
    pub fn random_bits_default(bit_length: u64) -> BigInt {
        BigInt::random_bits(bit_length, &mut rng::DefaultSource)
    }

    /// Constructs a probable prime of exactly `bit_length` bits using `rng`,
    /// with `certainty` controlling the Miller–Rabin/Lucas confidence.
    /// Fails with [`Error::Domain`] if `bit_length < 2`.
    pub fn probable_prime_with(bit_length: u64, certainty: i32, rng: &mut dyn RandomSource) -> Result<BigInt> {
        let mag = prime::probable_prime(bit_length, certainty, rng)?;
        Ok(BigInt::from_parts(1, mag))
    }

    /// Constructs a probable prime of exactly `bit_length` bits using the
    /// process-wide default CSPRNG and a certainty of 100.
    pub fn probable_prime(bit_length: u64) -> Result<BigInt> {
        BigInt::probable_prime_with(bit_length, 100, &mut rng::DefaultSource)
    }

    /// `true` (for `certainty <= 0`) or a Miller–Rabin/Lucas probable-prime
    /// verdict, using `rng` for witness selection.
    pub fn is_probable_prime_with(&self, certainty: i32, rng: &mut dyn RandomSource) -> bool {
        prime::is_probable_prime(&self.mag, certainty, rng)
    }

    /// `is_probable_prime_with` using the process-wide default CSPRNG.
    pub fn is_probable_prime(&self, certainty: i32) -> bool {
        self.is_probable_prime_with(certainty, &mut rng::DefaultSource)
    }

    /// The smallest probable prime strictly greater than `self`, using
    /// `rng` for witness selection.
    pub fn next_probable_prime_with(&self, certainty: i32, rng: &mut dyn RandomSource) -> BigInt {
        let base = if self.is_negative() { MagBuffer::zero() } else { self.mag.clone() };
        let mag = prime::next_probable_prime(&base, certainty, rng);
        BigInt::from_parts(1, mag)
    }

    /// `next_probable_prime_with` using the process-wide default CSPRNG and
    /// a certainty of 100.
    pub fn next_probable_prime(&self) -> BigInt {
        self.next_probable_prime_with(100, &mut rng::DefaultSource)
    }

    /// Minimum-length big-endian two's-complement encoding; always at least
    /// one byte, with at least one sign bit of headroom.
    pub fn to_byte_array(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        if !self.is_negative() {
            let mut bytes = self.mag.to_be_bytes_min();
            if bytes[0] & 0x80 != 0 {
                bytes.insert(0, 0);
            }
            return bytes;
        }

        let byte_len = (self.bit_length() / 8 + 1) as usize;
        let mut bytes = vec![0u8; byte_len];
        for (i, byte) in bytes.iter_mut().rev().enumerate() {
            let word = self.get_int((i / 4) as u64);
            *byte = (word >> ((i % 4) * 8)) as u8;
        }
        bytes
    }

    /// Renders `self` in the given radix, defaulting to 10 when `radix` is
    /// outside `[2, 36]`. A leading `-` is emitted for negative values.
    pub fn to_string_radix(&self, radix: u32) -> String {
        let radix = if (MIN_RADIX..=MAX_RADIX).contains(&radix) { radix } else { 10 };

        if self.is_zero() {
            return "0".to_string();
        }

        // Largest power of `radix` that fits in a u64 word, and how many
        // digits that represents — used to chunk the repeated division so
        // most of the work happens in native 64-bit arithmetic.
        let (chunk_base, chunk_digits) = {
            let mut base: u64 = 1;
            let mut digits = 0u32;
            while let Some(next) = base.checked_mul(radix as u64) {
                base = next;
                digits += 1;
                if base > (u64::MAX / radix as u64) {
                    break;
                }
            }
            (base, digits)
        };

        let mut chunks: Vec<u64> = Vec::new();
        let mut rem_mag = self.mag.clone();
        let chunk_divisor = MagBuffer::from_limbs(vec![(chunk_base >> 32) as u32, chunk_base as u32]);
        while !rem_mag.is_zero() {
            let (q, r) = crate::div::divmod(&rem_mag, &chunk_divisor);
            let r_slice = r.as_slice();
            let r_val: u64 = r_slice.iter().fold(0u64, |acc, &limb| (acc << 32) | limb as u64);
            chunks.push(r_val);
            rem_mag = q;
        }

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }

        for (i, &chunk) in chunks.iter().rev().enumerate() {
            let digits = to_radix_digits(chunk, radix);
            if i == 0 {
                out.push_str(&digits);
            } else {
                for _ in 0..(chunk_digits as usize).saturating_sub(digits.len()) {
                    out.push('0');
                }
                out.push_str(&digits);
            }
        }
        out
    }

    /// Low 32 bits of the two's-complement representation (truncating).
    pub fn to_i32(&self) -> i32 {
        self.get_int(0) as i32
    }

    /// Low 64 bits of the two's-complement representation (truncating).
    pub fn to_i64(&self) -> i64 {
        let lo = self.get_int(0) as u64;
        let hi = self.get_int(1) as u64;
        ((hi << 32) | lo) as i64
    }

    /// `to_i64`, failing with [`Error::OutOfRange`] if not exactly
    /// representable.
    pub fn to_i64_exact(&self) -> Result<i64> {
        let v = self.to_i64();
        if BigInt::from(v) == *self { Ok(v) } else { Err(Error::OutOfRange) }
    }

    /// `to_i32`, failing with [`Error::OutOfRange`] if not exactly
    /// representable.
    pub fn to_i32_exact(&self) -> Result<i32> {
        let v = self.to_i32();
        if BigInt::from(v) == *self { Ok(v) } else { Err(Error::OutOfRange) }
    }

    /// Narrows to `i16`, failing with [`Error::OutOfRange`] if not exactly
    /// representable.
    pub fn to_i16_exact(&self) -> Result<i16> {
        let v = self.to_i32();
        i16::try_from(v).map_err(|_| Error::OutOfRange)
    }

    /// Narrows to `i8`, failing with [`Error::OutOfRange`] if not exactly
    /// representable.
    pub fn to_i8_exact(&self) -> Result<i8> {
        let v = self.to_i32();
        i8::try_from(v).map_err(|_| Error::OutOfRange)
    }

    /// Converts via a decimal round-trip; magnitudes too large for the
    /// target type saturate to infinity.
    pub fn to_f64(&self) -> f64 {
        self.to_string_radix(10).parse().unwrap_or(if self.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY })
    }

    /// `to_f64`, narrowed to `f32`.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

fn to_radix_digits(mut v: u64, radix: u32) -> String {
    if v == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while v > 0 {
        let d = (v % radix as u64) as u32;
        buf.push(std::char::from_digit(d, radix).expect("digit fits in radix"));
        v /= radix as u64;
    }
    buf.iter().rev().collect()
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt").field("value", &self.to_string_radix(10)).finish()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign() == other.sign() && self.magnitude().cmp(other.magnitude()) == Ordering::Equal
    }
}
impl Eq for BigInt {}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> BigInt {
                    if v == 0 {
                        return BigInt::zero();
                    }
                    let negative = v < 0;
                    let abs = (v as i128).unsigned_abs();
                    let mut bytes = abs.to_be_bytes().to_vec();
                    while bytes.first() == Some(&0) {
                        bytes.remove(0);
                    }
                    BigInt::normalize(MagBuffer::from_be_bytes(&bytes), negative)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(v: $t) -> BigInt {
                    if v == 0 {
                        return BigInt::zero();
                    }
                    let mut bytes = (v as u128).to_be_bytes().to_vec();
                    while bytes.first() == Some(&0) {
                        bytes.remove(0);
                    }
                    BigInt::normalize(MagBuffer::from_be_bytes(&bytes), false)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
