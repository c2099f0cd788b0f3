//! A small sign-tracked magnitude, used internally wherever an algorithm's
//! intermediate values can go negative even though its inputs and final
//! result cannot (Toom-Cook-3 interpolation, extended GCD coefficients).
//! Never exposed outside the crate.

use super::{Limb, add, cmp, is_zero, mul_by_limb, shl_bits, sub, trim};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub(crate) struct Signed {
    pub(crate) negative: bool,
    pub(crate) mag: Vec<Limb>,
}

impl Signed {
    pub(crate) fn zero() -> Self {
        Signed {
            negative: false,
            mag: Vec::new(),
        }
    }

    pub(crate) fn from_mag(mag: Vec<Limb>) -> Self {
        Signed {
            negative: false,
            mag: trim(mag),
        }
    }

    pub(crate) fn from_signed_mag(negative: bool, mag: Vec<Limb>) -> Self {
        let mag = trim(mag);
        Signed {
            negative: !mag.is_empty() && negative,
            mag,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        is_zero(&self.mag)
    }

    pub(crate) fn negate(&self) -> Self {
        Signed::from_signed_mag(!self.negative, self.mag.clone())
    }

    pub(crate) fn add(&self, other: &Signed) -> Signed {
        if self.negative == other.negative {
            Signed::from_signed_mag(self.negative, add(&self.mag, &other.mag))
        } else if cmp(&self.mag, &other.mag) != Ordering::Less {
            Signed::from_signed_mag(self.negative, sub(&self.mag, &other.mag))
        } else {
            Signed::from_signed_mag(other.negative, sub(&other.mag, &self.mag))
        }
    }

    pub(crate) fn sub(&self, other: &Signed) -> Signed {
        self.add(&other.negate())
    }

    /// Multiplies by a small non-negative constant.
    pub(crate) fn mul_small(&self, k: u32) -> Signed {
        Signed::from_signed_mag(self.negative, mul_by_limb(&self.mag, k))
    }

    pub(crate) fn shl_bits(&self, n: u64) -> Signed {
        Signed::from_signed_mag(self.negative, shl_bits(&self.mag, n))
    }

    /// Divides by a small positive constant, which must divide this value
    /// exactly (asserted in debug builds).
    pub(crate) fn div_small_exact(&self, d: u32) -> Signed {
        let (q, r) = super::mutable::divmod(&self.mag, &[d]);
        debug_assert!(is_zero(&r), "div_small_exact: {d} does not divide evenly");
        Signed::from_signed_mag(self.negative, q)
    }
}
