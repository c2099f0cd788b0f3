use bignum::BigInt;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn decimal_digits(seed: u64, digits: usize) -> BigInt {
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

/// Roughly RSA-shaped: an odd modulus of the given bit length and the
/// common public exponent 65537.
fn odd_modulus(seed: u64, decimal_digits_count: usize) -> BigInt {
    let candidate = decimal_digits(seed, decimal_digits_count);
    if candidate.test_bit(0).unwrap() { candidate } else { &candidate + &BigInt::one() }
}

pub fn bench_mod_pow_rsa_like(c: &mut Criterion) {
    let exponent = BigInt::from(65537u32);

    let mut group = c.benchmark_group("mod_pow_odd_modulus");
    for digits in [150, 300, 600] {
        let base = decimal_digits(10, digits);
        let m = odd_modulus(20, digits);
        group.bench_function(format!("{digits} digits"), |bencher| {
            bencher.iter(|| black_box(&base).mod_pow(black_box(&exponent), black_box(&m)).unwrap())
        });
    }
    group.finish();
}

pub fn bench_mod_pow_even_modulus(c: &mut Criterion) {
    // Exercises the Garner's-CRT even-modulus path instead of the direct
    // Montgomery path.
    let base = decimal_digits(30, 300);
    let m = &odd_modulus(40, 300) + &BigInt::one();
    let exponent = BigInt::from(65537u32);

    c.bench_function("mod_pow even modulus 300 digits", |b| {
        b.iter(|| black_box(&base).mod_pow(black_box(&exponent), black_box(&m)).unwrap())
    });
}

pub fn bench_mod_inverse(c: &mut Criterion) {
    let m = odd_modulus(50, 300);
    let a = decimal_digits(60, 300);

    c.bench_function("mod_inverse 300 digits", |b| b.iter(|| black_box(&a).mod_inverse(black_box(&m)).unwrap()));
}

criterion_group!(benches, bench_mod_pow_rsa_like, bench_mod_pow_even_modulus, bench_mod_inverse);
criterion_main!(benches);
