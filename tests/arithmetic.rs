use bignum::BigInt;

fn big(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10).unwrap()
}

#[test]
fn zero_plus_zero() {
    let z = big("0");
    let sum = &z + &z;
    assert_eq!(sum.signum(), 0);
    assert_eq!(sum.to_string_radix(10), "0");
    assert_eq!(sum.to_byte_array(), vec![0]);
}

#[test]
fn ring_laws_hold_over_a_range_of_sizes() {
    let samples = [
        "0",
        "1",
        "-1",
        "12345678901234567890",
        "-998877665544332211",
        "170141183460469231731687303715884105727", // 2^127 - 1
    ];

    for &a_s in &samples {
        for &b_s in &samples {
            for &c_s in &samples {
                let a = big(a_s);
                let b = big(b_s);
                let c = big(c_s);

                assert_eq!(&(&a + &b) + &c, &a + &(&b + &c), "associativity of +");
                assert_eq!(&a + &b, &b + &a, "commutativity of +");
                assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c), "distributivity");
                assert_eq!(&a * &b, &b * &a, "commutativity of *");
                assert_eq!(&a * &BigInt::zero(), BigInt::zero(), "a * 0 == 0");
                assert_eq!(&a * &BigInt::one(), a, "a * 1 == a");
            }
        }
    }
}

#[test]
fn division_contract_holds_and_remainder_sign_follows_dividend() {
    let values = ["1", "-1", "12345", "-12345", "999999999999999999999999"];
    let divisors = ["7", "-7", "3", "-1000003"];

    for &a_s in &values {
        for &d_s in &divisors {
            let a = big(a_s);
            let d = big(d_s);

            let q = &a / &d;
            let r = &a % &d;

            assert_eq!(&(&q * &d) + &r, a, "a == (a/d)*d + (a%d) for a={a_s} d={d_s}");
            assert!(r.abs() < d.abs(), "|remainder| < |divisor|");
            assert!(r.signum() == 0 || r.signum() == a.signum(), "sign(remainder) in {{0, sign(a)}}");
        }
    }
}

#[test]
fn modulo_is_always_nonnegative() {
    let a = big("-1234567890123456789");
    let m = big("97");
    let r = a.modulo(&m).unwrap();
    assert!(r.signum() >= 0);
    assert!(r < m);

    // a.mod(m) == ((a % m) + m) % m
    let naive = (&(&a % &m) + &m) % &m;
    assert_eq!(r, naive);
}

#[test]
fn shift_laws() {
    let a = big("123456789012345678901234567890");
    for n in [0i32, 1, 5, 31, 32, 33, 64, 100] {
        let shifted_left = a.shift_left(n).unwrap();
        assert_eq!(shifted_left, &a * &BigInt::from(2u8).pow(n as u32));
    }

    let neg = big("-123456789012345678901234567890");
    for n in [0i32, 1, 5, 31, 32, 64] {
        // round toward -infinity: equivalent to floor division by 2^n
        let shifted = neg.shift_right(n).unwrap();
        let pow2 = BigInt::from(2u8).pow(n as u32);
        let expected_q = &neg / &pow2;
        let expected_r = &neg % &pow2;
        let expected = if expected_r.signum() < 0 { &expected_q - &BigInt::one() } else { expected_q };
        assert_eq!(shifted, expected, "shift_right({n}) rounds toward -infinity");
    }

    assert_eq!(big("-1").shift_right(1).unwrap(), big("-1"));
}

#[test]
fn bit_tests_agree_with_shifts() {
    let a = big("837");
    for n in 0..16u64 {
        let bit = a.test_bit(n).unwrap();
        let by_shift = a.shift_right(n as i32).unwrap().test_bit(0).unwrap();
        assert_eq!(bit, by_shift);
    }
}

#[test]
fn set_clear_flip_bit_round_trip() {
    let a = big("1024");
    let set = a.set_bit(3).unwrap();
    assert!(set.test_bit(3).unwrap());

    let cleared = set.clear_bit(3).unwrap();
    assert_eq!(cleared, a);

    let flipped_twice = a.flip_bit(5).unwrap().flip_bit(5).unwrap();
    assert_eq!(flipped_twice, a);
}

#[test]
fn byte_round_trip() {
    for s in ["0", "1", "-1", "255", "-255", "256", "-256", "123456789012345678901234567890", "-1"] {
        let v = big(s);
        let bytes = v.to_byte_array();
        let back = BigInt::from_bytes(&bytes).unwrap();
        assert_eq!(back, v, "round trip failed for {s}");
    }
}

#[test]
fn radix_round_trip() {
    let v = big("123456789012345678901234567890");
    for radix in 2..=36u32 {
        let s = v.to_string_radix(radix);
        let back = BigInt::from_str_radix(&s, radix).unwrap();
        assert_eq!(back, v, "round trip failed for radix {radix}");
    }
}

#[test]
fn hex_plus_one_equals_power_of_two() {
    let max = BigInt::from_str_radix("ffffffffffffffffffffffffffffffff", 16).unwrap();
    let wrapped = &max + &BigInt::one();
    assert_eq!(wrapped, BigInt::one().shift_left(128).unwrap());
}

#[test]
fn large_power_of_ten_division() {
    let ten = BigInt::from_str_radix("10", 10).unwrap();
    let p100 = ten.pow(100);
    let seven = big("7");

    let q = &p100 / &seven;
    let r = &p100 % &seven;
    assert_eq!(&(&q * &seven) + &r, p100);
    assert_eq!(r, big("4"));
}

#[test]
fn ordering_matches_sign_and_magnitude() {
    assert!(big("-5") < big("-1"));
    assert!(big("-1") < big("0"));
    assert!(big("0") < big("1"));
    assert!(big("1") < big("5"));
    assert!(big("-100") < big("5"));
}
