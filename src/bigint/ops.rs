//! Arithmetic operator implementations, ordering, hashing, and the
//! remaining public operations (`pow`, `gcd`, `mod`, `mod_pow`,
//! `mod_inverse`, `abs`, `negate`, `signum`).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::error::{Error, Result};
use crate::mag::{self, MagBuffer, mutable};
use crate::modarith;

use super::BigInt;

impl BigInt {
    /// `|self|`.
    pub fn abs(&self) -> BigInt {
        if self.is_negative() { BigInt::from_parts(1, self.magnitude().clone()) } else { self.clone() }
    }

    /// `-self`.
    pub fn negate(&self) -> BigInt {
        BigInt::from_parts(-self.sign(), self.magnitude().clone())
    }

    /// `-1`, `0`, or `1` according to the sign of `self`.
    pub fn signum(&self) -> i32 {
        self.sign() as i32
    }

    /// `self.pow(exp)`, `exp` a small non-negative native exponent.
    pub fn pow(&self, exp: u32) -> BigInt {
        if exp == 0 {
            return BigInt::one();
        }
        if self.is_zero() {
            return BigInt::zero();
        }

        let mut result = MagBuffer::from_limbs(vec![1]);
        let mut base = self.magnitude().clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = crate::mul::multiply(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = crate::mul::square(&base);
            }
        }

        let negative = self.is_negative() && exp % 2 == 1;
        BigInt::normalize(result, negative)
    }

    /// `gcd(|self|, |other|)`, always non-negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let g = mutable::gcd(self.magnitude().as_slice(), other.magnitude().as_slice());
        BigInt::normalize(MagBuffer::from_limbs(g), false)
    }

    /// `self mod m`, result always in `[0, m)`. Fails with [`Error::Domain`]
    /// if `m <= 0`.
    pub fn modulo(&self, m: &BigInt) -> Result<BigInt> {
        if m.is_zero() || m.is_negative() {
            return Err(Error::Domain);
        }
        let r = modarith::modulo(self.magnitude(), self.is_negative(), m.magnitude())?;
        Ok(BigInt::normalize(r, false))
    }

    /// `self^exp mod m`. `m` must be non-zero; a negative `exp` requires
    /// `self` invertible mod `m`.
    pub fn mod_pow(&self, exp: &BigInt, m: &BigInt) -> Result<BigInt> {
        let r = modarith::mod_pow(
            self.magnitude(),
            self.is_negative(),
            exp.magnitude(),
            exp.is_negative(),
            m.magnitude(),
        )?;
        Ok(BigInt::normalize(r, false))
    }

    /// The modular inverse of `self` mod `m`. Fails with
    /// [`Error::NotInvertible`] when `gcd(self, m) != 1`.
    pub fn mod_inverse(&self, m: &BigInt) -> Result<BigInt> {
        let r = modarith::mod_inverse(self.magnitude(), self.is_negative(), m.magnitude())?;
        Ok(BigInt::normalize(r, false))
    }

    /// Checked division, failing with [`Error::Domain`] on division by
    /// zero rather than panicking.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::Domain);
        }
        Ok(self / other)
    }

    /// Checked remainder, failing with [`Error::Domain`] on division by
    /// zero rather than panicking.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::Domain);
        }
        Ok(self % other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {
                let mag_order = self.magnitude().cmp(other.magnitude());
                if self.is_negative() { mag_order.reverse() } else { mag_order }
            }
            other => other,
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.magnitude().as_slice().hash(state);
    }
}

fn add_signed(a_mag: &MagBuffer, a_neg: bool, b_mag: &MagBuffer, b_neg: bool) -> BigInt {
    if a_neg == b_neg {
        return BigInt::normalize(a_mag.add(b_mag), a_neg);
    }
    match mag::cmp(a_mag.as_slice(), b_mag.as_slice()) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::normalize(a_mag.sub(b_mag), a_neg),
        Ordering::Less => BigInt::normalize(b_mag.sub(a_mag), b_neg),
    }
}

impl Add for &BigInt {
    type Output = BigInt;
    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self.magnitude(), self.is_negative(), other.magnitude(), other.is_negative())
    }
}

impl Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(self.magnitude(), self.is_negative(), other.magnitude(), !other.is_negative())
    }
}

impl Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, other: &BigInt) -> BigInt {
        let mag = crate::mul::multiply(self.magnitude(), other.magnitude());
        let negative = self.is_negative() != other.is_negative();
        BigInt::normalize(mag, negative)
    }
}

impl Div for &BigInt {
    type Output = BigInt;
    /// Truncating division (toward zero), matching Rust's native integer
    /// `Div`. Panics on division by zero; use [`BigInt::checked_div`] to
    /// avoid that.
    fn div(self, other: &BigInt) -> BigInt {
        assert!(!other.is_zero(), "division by zero");
        let (q, _) = crate::div::divmod(self.magnitude(), other.magnitude());
        let negative = self.is_negative() != other.is_negative();
        BigInt::normalize(q, negative)
    }
}

impl Rem for &BigInt {
    type Output = BigInt;
    /// Truncating remainder; the sign follows the dividend (`self`), as
    /// with Rust's native integer `Rem`. Panics on division by zero; use
    /// [`BigInt::checked_rem`] to avoid that.
    fn rem(self, other: &BigInt) -> BigInt {
        assert!(!other.is_zero(), "division by zero");
        let (_, r) = crate::div::divmod(self.magnitude(), other.magnitude());
        BigInt::normalize(r, self.is_negative())
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negate()
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(&self, &other)
            }
        }
        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, other: &BigInt) -> BigInt {
                $trait::$method(&self, other)
            }
        }
        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(self, &other)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);
forward_owned_binop!(Rem, rem);

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        (&self).negate()
    }
}
