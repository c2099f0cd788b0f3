use bignum::{BigInt, Error};

fn big(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10).unwrap()
}

#[test]
fn mod_pow_agrees_with_pow_then_mod_for_small_exponents() {
    let moduli = ["1", "2", "7", "97", "1000003", "12345678901234567890"];
    let bases = ["0", "1", "2", "3", "97", "-5", "123456789"];

    for &m_s in &moduli {
        let m = big(m_s);
        for &b_s in &bases {
            let b = big(b_s);
            for e in 0u32..6 {
                let exp = BigInt::from(e);
                let via_pow = b.pow(e).modulo(&m).unwrap();
                let via_mod_pow = b.mod_pow(&exp, &m).unwrap();
                assert_eq!(via_mod_pow, via_pow, "base={b_s} exp={e} m={m_s}");
            }
        }
    }
}

#[test]
fn mod_pow_with_negative_exponent_is_inverse_power() {
    let base = big("3");
    let m = big("11");
    // 3^-1 mod 11 == 4, since 3*4 = 12 == 1 mod 11.
    let inv = base.mod_pow(&big("-1"), &m).unwrap();
    assert_eq!(inv, big("4"));

    // 3^-2 mod 11 == (3^-1)^2 mod 11 == 4^2 mod 11 == 5.
    let inv_sq = base.mod_pow(&big("-2"), &m).unwrap();
    assert_eq!(inv_sq, big("5"));
}

#[test]
fn mod_pow_rejects_noninvertible_negative_exponent() {
    // gcd(4, 8) != 1, so 4 has no inverse mod 8 and a negative exponent
    // must fail rather than silently produce a wrong answer.
    let base = big("4");
    let m = big("8");
    let err = base.mod_pow(&big("-1"), &m).unwrap_err();
    assert_eq!(err, Error::NotInvertible);
}

#[test]
fn mod_pow_handles_even_modulus_via_crt_recombination() {
    // Even moduli take the Garner's-CRT split path (odd part via
    // Montgomery, power-of-two part directly).
    let cases = [("2", "100"), ("3", "256"), ("123", "1024"), ("999999937", "18446744073709551616")];

    for (base_s, m_s) in cases {
        let base = big(base_s);
        let m = big(m_s);
        for e in [0u32, 1, 2, 5, 17] {
            let exp = BigInt::from(e);
            let via_pow = base.pow(e).modulo(&m).unwrap();
            let via_mod_pow = base.mod_pow(&exp, &m).unwrap();
            assert_eq!(via_mod_pow, via_pow, "base={base_s} exp={e} m={m_s}");
        }
    }
}

#[test]
fn mod_pow_with_modulus_one_is_always_zero() {
    for base_s in ["0", "1", "-1", "999999999999"] {
        let base = big(base_s);
        let r = base.mod_pow(&big("3"), &big("1")).unwrap();
        assert_eq!(r, BigInt::zero());
    }
}

#[test]
fn mod_inverse_round_trips_with_mod_pow_negative_one() {
    let m = big("1000000007");
    for a_s in ["1", "2", "12345", "999999999"] {
        let a = big(a_s);
        let inv = a.mod_inverse(&m).unwrap();
        let product = (&a * &inv).modulo(&m).unwrap();
        assert_eq!(product, BigInt::one());

        let via_mod_pow = a.mod_pow(&big("-1"), &m).unwrap();
        assert_eq!(inv, via_mod_pow);
    }
}

#[test]
fn mod_inverse_fails_when_not_coprime() {
    // gcd(6, 9) == 3, so 6 has no inverse mod 9.
    let err = big("6").mod_inverse(&big("9")).unwrap_err();
    assert_eq!(err, Error::NotInvertible);
}

#[test]
fn modulo_rejects_nonpositive_modulus() {
    assert_eq!(big("5").modulo(&big("0")).unwrap_err(), Error::Domain);
    assert_eq!(big("5").modulo(&big("-3")).unwrap_err(), Error::Domain);
}

#[test]
fn gcd_matches_known_values() {
    assert_eq!(big("12").gcd(&big("18")), big("6"));
    assert_eq!(big("17").gcd(&big("5")), big("1"));
    assert_eq!(big("0").gcd(&big("5")), big("5"));
    assert_eq!(big("-12").gcd(&big("18")), big("6"));
    assert_eq!(big("0").gcd(&big("0")), big("0"));
}
