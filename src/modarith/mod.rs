//! Modular reduction, exponentiation, and inversion.
//!
//! Operates on magnitudes plus an explicit sign rather than on [`crate::bigint::BigInt`]
//! directly, the same layering [`crate::mul`] and [`crate::div`] use — the
//! facade is the only thing that ever sees a signed, user-facing type.

mod montgomery;

use crate::error::{Error, Result};
use crate::mag::{MagBuffer, mutable};

/// `a mod m`, always in `[0, m)`. Requires `m` non-zero.
pub(crate) fn modulo(a: &MagBuffer, a_negative: bool, m: &MagBuffer) -> Result<MagBuffer> {
    if m.is_zero() {
        return Err(Error::Domain);
    }

    let (_, r) = crate::div::divmod(a, m);
    if a_negative && !r.is_zero() {
        Ok(m.sub(&r))
    } else {
        Ok(r)
    }
}

/// `base^exp mod m`, result in `[0, m)`. `m` must be positive (non-zero, as
/// magnitudes have no sign). A negative `exp` requires `base` invertible
/// mod `m`.
pub(crate) fn mod_pow(
    base: &MagBuffer,
    base_negative: bool,
    exp: &MagBuffer,
    exp_negative: bool,
    m: &MagBuffer,
) -> Result<MagBuffer> {
    if m.is_zero() {
        return Err(Error::Domain);
    }
    if m.as_slice() == [1u32] {
        return Ok(MagBuffer::zero());
    }

    if exp_negative {
        let base_reduced = modulo(base, base_negative, m)?;
        let inv = mod_inverse(&base_reduced, false, m)?;
        return mod_pow(&inv, false, exp, false, m);
    }

    let base_reduced = modulo(base, base_negative, m)?;
    Ok(pow_mod_positive(&base_reduced, exp, m))
}

fn pow_mod_positive(base: &MagBuffer, exp: &MagBuffer, m: &MagBuffer) -> MagBuffer {
    let odd = m.as_slice().last().is_some_and(|l| l & 1 == 1);
    if odd {
        let mont = montgomery::Montgomery::new(m);
        return mont.pow(base, exp);
    }

    // Even modulus: split m = m1 * 2^p with m1 odd, solve each modulus
    // separately, then recombine with Garner's two-modulus CRT.
    let p = m.lowest_set_bit().unwrap_or(0);
    let m1 = m.shr_bits(p);

    let a1 = {
        let mont = montgomery::Montgomery::new(&m1);
        mont.pow(base, exp)
    };
    let a2 = montgomery::pow_mod_pow2(base, exp, p);

    let pow2 = MagBuffer::from_limbs(vec![1]).shl_bits(p);

    let (gcd, negative, coeff) = mutable::extended_gcd(m1.as_slice(), pow2.as_slice());
    debug_assert_eq!(gcd, vec![1], "odd part of an even modulus must be coprime to its power of two");
    let coeff_mag = MagBuffer::from_limbs(coeff);
    let m1_inv_mod_pow2 = if negative {
        let r = montgomery::mod_pow2(&coeff_mag, p);
        if r.is_zero() { r } else { pow2.sub(&r) }
    } else {
        montgomery::mod_pow2(&coeff_mag, p)
    };

    let diff_mod_pow2 = if a2.cmp(&a1) != std::cmp::Ordering::Less {
        montgomery::mod_pow2(&a2.sub(&a1), p)
    } else {
        let d = montgomery::mod_pow2(&a1.sub(&a2), p);
        if d.is_zero() { d } else { pow2.sub(&d) }
    };

    let t = montgomery::mod_pow2(&crate::mul::multiply(&diff_mod_pow2, &m1_inv_mod_pow2), p);
    let mut result = a1.add(&crate::mul::multiply(&m1, &t));
    while result.cmp(m) != std::cmp::Ordering::Less {
        result = result.sub(m);
    }
    result
}

/// Modular inverse of `a` mod `m`. Fails with [`Error::NotInvertible`] when
/// `gcd(a, m) != 1`.
pub(crate) fn mod_inverse(a: &MagBuffer, a_negative: bool, m: &MagBuffer) -> Result<MagBuffer> {
    if m.is_zero() {
        return Err(Error::Domain);
    }

    let reduced = modulo(a, a_negative, m)?;
    let (gcd, negative, coeff) = mutable::extended_gcd(reduced.as_slice(), m.as_slice());
    if gcd != [1u32] {
        return Err(Error::NotInvertible);
    }

    let coeff_mag = MagBuffer::from_limbs(coeff);
    modulo(&coeff_mag, negative, m)
}
