use bignum::{Algorithm, BigInt, with_forced_algorithm};

fn random_like(seed: u64, digits: usize) -> BigInt {
    // Deterministic pseudo-random decimal string (LCG), no external RNG
    // dependency needed for a test fixture.
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut s = String::with_capacity(digits);
    for i in 0..digits {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let d = ((state >> 33) % 10) as u32;
        let d = if i == 0 && d == 0 { 1 } else { d };
        s.push(std::char::from_digit(d, 10).unwrap());
    }
    BigInt::from_str_radix(&s, 10).unwrap()
}

#[test]
fn multiplication_agrees_across_forced_algorithms() {
    // 1, 10, 49, 50, 74, 75, 89, 90, 139, 140 limbs (~32 bits/digit) worth
    // of decimal digits, to straddle the Karatsuba/Toom-3 crossovers.
    let sizes = [1, 10, 49, 50, 74, 75, 89, 90, 139, 140];

    for (i, &limbs) in sizes.iter().enumerate() {
        let digits = (limbs * 10).max(1);
        let a = random_like(1000 + i as u64, digits);
        let b = random_like(2000 + i as u64, digits);

        let schoolbook = with_forced_algorithm(Algorithm::Schoolbook, || &a * &b);
        let karatsuba = with_forced_algorithm(Algorithm::Karatsuba, || &a * &b);
        let toom3 = with_forced_algorithm(Algorithm::Toom3, || &a * &b);
        let ss = with_forced_algorithm(Algorithm::SchonhageStrassen, || &a * &b);

        assert_eq!(schoolbook, karatsuba, "schoolbook vs karatsuba at {limbs} limbs");
        assert_eq!(schoolbook, toom3, "schoolbook vs toom3 at {limbs} limbs");
        assert_eq!(schoolbook, ss, "schoolbook vs schonhage-strassen at {limbs} limbs");
    }
}

#[test]
fn squaring_agrees_with_multiplying_by_self_across_algorithms() {
    let sizes = [1, 10, 50, 75, 140];

    for (i, &limbs) in sizes.iter().enumerate() {
        let digits = (limbs * 10).max(1);
        let a = random_like(3000 + i as u64, digits);

        for alg in [Algorithm::Schoolbook, Algorithm::Karatsuba, Algorithm::Toom3, Algorithm::SchonhageStrassen] {
            let squared = with_forced_algorithm(alg, || &a * &a);
            assert_eq!(squared, &a * &a, "squaring matches a*a for {alg:?} at {limbs} limbs");
        }
    }
}

#[test]
fn division_contract_holds_across_schoolbook_and_burnikel_ziegler_regimes() {
    // Below the schoolbook threshold (50 limbs) and comfortably above it
    // (triggers Burnikel-Ziegler, since it's far below the Barrett
    // crossover which starts in the millions of bits).
    let cases = [(5, 3), (60, 40), (200, 90)];

    for (i, &(dividend_limbs, divisor_limbs)) in cases.iter().enumerate() {
        let a = random_like(4000 + i as u64, dividend_limbs * 10);
        let b = random_like(5000 + i as u64, divisor_limbs * 10);

        let q = &a / &b;
        let r = &a % &b;
        assert_eq!(&(&q * &b) + &r, a, "a == (a/b)*b + (a%b) at {dividend_limbs}x{divisor_limbs} limbs");
        assert!(r.abs() < b.abs());
    }
}

#[test]
#[ignore = "Barrett only becomes reachable above a multi-million-bit operand; run explicitly with --ignored"]
fn division_contract_holds_at_barrett_scale() {
    let a = random_like(9001, 1_000_000);
    let b = random_like(9002, 500_000);

    let q = &a / &b;
    let r = &a % &b;
    assert_eq!(&(&q * &b) + &r, a);
    assert!(r.abs() < b.abs());
}
