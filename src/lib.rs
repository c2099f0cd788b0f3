//! An arbitrary-precision signed integer.
//!
//! This crate provides `BigInt`, a sign-magnitude big integer with the full
//! range of arithmetic, bitwise, modular, and primality operations one
//! would expect from a mature big-integer library — without depending on
//! one. The focus is on **clarity, predictability, and auditability**
//! rather than squeezing out the last percent of performance, though the
//! multiplication and division engines dispatch across several classical
//! algorithms (schoolbook, Karatsuba, Toom-Cook-3, Schönhage–Strassen;
//! schoolbook, Burnikel–Ziegler, Barrett) so that both small and very large
//! operands stay fast.
//!
//! # Module overview
//!
//! - `mag`
//!   Unsigned, big-endian limb storage (`MagBuffer`) and the scratch-buffer
//!   primitives (schoolbook division, binary and extended GCD) the higher
//!   engines are built on.
//!
//! - `mul`
//!   Multiplication and squaring algorithm dispatch.
//!
//! - `div`
//!   Division algorithm dispatch.
//!
//! - `modarith`
//!   Modular reduction, Montgomery exponentiation, and modular inversion.
//!
//! - `prime`
//!   Miller–Rabin and strong Lucas primality testing, and probable-prime
//!   generation.
//!
//! - `bigint`
//!   The public, signed `BigInt` facade tying the above together.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generation, used by
//!   probable-prime generation and random-bit-length construction.
//!
//! - `os`
//!   Per-platform OS entropy sourcing backing `rng`.
//!
//! # Design goals
//!
//! - Stable, well-defined semantics matching the documented invariants of
//!   every operation
//! - No silent truncation or wraparound — fallible operations return
//!   `Result<_, Error>`
//! - Differential-testing hooks (`with_forced_algorithm`) so the dispatch
//!   tables themselves are part of the tested contract, not just an
//!   implementation detail

mod bigint;
mod div;
mod error;
mod mag;
mod modarith;
mod mul;
mod os;
mod prime;
pub mod rng;

pub use bigint::BigInt;
pub use error::{Error, Result};
pub use mul::{Algorithm, with_forced_algorithm};
