use bignum::{Algorithm, BigInt, with_forced_algorithm};
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

pub fn bench_multiply_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for digits in [30, 300, 1500, 3000] {
        let a = decimal_digits(1, digits);
        let b = decimal_digits(2, digits);
        group.bench_function(format!("{digits} digits"), |bencher| {
            bencher.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

pub fn bench_multiply_by_algorithm(c: &mut Criterion) {
    // Fixed operand size comfortably inside the Karatsuba/Toom-3 band, so
    // every forced algorithm runs a realistic amount of work.
    let a = decimal_digits(3, 800);
    let b = decimal_digits(4, 800);

    let mut group = c.benchmark_group("multiply_algorithm_800_digits");
    for alg in [Algorithm::Schoolbook, Algorithm::Karatsuba, Algorithm::Toom3, Algorithm::SchonhageStrassen] {
        group.bench_function(format!("{alg:?}"), |bencher| {
            bencher.iter(|| with_forced_algorithm(alg, || black_box(&a) * black_box(&b)))
        });
    }
    group.finish();
}

pub fn bench_square(c: &mut Criterion) {
    let a = decimal_digits(5, 1500);
    c.bench_function("square 1500 digits", |b| b.iter(|| black_box(&a) * black_box(&a)));
}

criterion_group!(benches, bench_multiply_by_size, bench_multiply_by_algorithm, bench_square);
criterion_main!(benches);
