use bignum::BigInt;

fn big(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10).unwrap()
}

#[test]
fn small_known_primes_pass() {
    for p in ["2", "3", "5", "7", "11", "13", "97", "104729"] {
        assert!(big(p).is_probable_prime(100), "{p} should be probable prime");
    }
}

#[test]
fn small_known_composites_fail() {
    for c in ["0", "1", "4", "6", "9", "15", "100", "104730"] {
        assert!(!big(c).is_probable_prime(100), "{c} should not be probable prime");
    }
}

#[test]
fn mersenne_primes_pass() {
    // 2^61 - 1 and 2^127 - 1 are both Mersenne primes.
    let m61 = &BigInt::from(2u8).pow(61) - &BigInt::one();
    let m127 = &BigInt::from(2u8).pow(127) - &BigInt::one();
    assert!(m61.is_probable_prime(100));
    assert!(m127.is_probable_prime(100));

    // 2^67 - 1 is composite (Mersenne's own conjecture error).
    let m67 = &BigInt::from(2u8).pow(67) - &BigInt::one();
    assert!(!m67.is_probable_prime(100));
}

#[test]
fn carmichael_numbers_are_rejected() {
    // Carmichael numbers pass Fermat's test for every base coprime to n,
    // but a correct Miller-Rabin/Lucas combination still rejects them.
    for c in ["561", "1105", "1729", "2465", "2821", "6601"] {
        assert!(!big(c).is_probable_prime(100), "Carmichael number {c} must be rejected");
    }
}

#[test]
fn certainty_zero_always_reports_prime() {
    // certainty <= 0 means "don't know, assume prime" per the facade's
    // documented contract.
    assert!(big("4").is_probable_prime(0));
    assert!(big("1001").is_probable_prime(-5));
}

#[test]
fn generated_probable_prime_is_odd_and_right_sized_and_passes_its_own_test() {
    for bits in [16u64, 64, 128] {
        let p = BigInt::probable_prime(bits).unwrap();
        assert_eq!(p.bit_length(), bits);
        assert!(p.test_bit(0).unwrap(), "generated prime must be odd");
        assert!(p.is_probable_prime(100));
    }
}

#[test]
fn next_probable_prime_is_prime_and_strictly_greater() {
    let mut n = big("100");
    for _ in 0..20 {
        let next = n.next_probable_prime();
        assert!(next > n);
        assert!(next.is_probable_prime(100));
        n = next;
    }
}

#[test]
fn next_probable_prime_of_known_prime_skips_to_the_following_one() {
    // 7 -> 11, not 7 itself.
    assert_eq!(big("7").next_probable_prime(), big("11"));
    // 13 -> 17.
    assert_eq!(big("13").next_probable_prime(), big("17"));
}

#[test]
fn even_numbers_are_never_reported_prime() {
    for n in ["2", "1000000", "104728"] {
        let v = big(n);
        if v == big("2") {
            assert!(v.is_probable_prime(100));
        } else {
            assert!(!v.is_probable_prime(100));
        }
    }
}
