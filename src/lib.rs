//! Multi-precision signed-magnitude integer arithmetic
//!
//! This crate provides an arbitrary-precision signed integer type,
//! [`BigInt`](bigint::BigInt), and the arithmetic needed to use it as the
//! substrate for public-key cryptography: addition, subtraction,
//! schoolbook and Karatsuba multiplication/squaring, division, Barrett
//! modular reduction, and modular exponentiation.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level API. Components are explicit
//! in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `word`
//!   Selects the machine word width (`u8`/`u16`/`u32`/`u64`) the rest of
//!   the crate is generic over, at compile time via Cargo features.
//!
//! - `error`
//!   The `BigIntError` type returned by fallible operations (division,
//!   reduction, exponentiation).
//!
//! - `bigint`
//!   The `BigInt` value model and all arithmetic built on top of it: hex
//!   codec, addition/subtraction, multiplication/squaring, division,
//!   Barrett reduction, modular exponentiation.
//!
//! - `rng`
//!   A ChaCha20-based cryptographically secure pseudorandom number
//!   generator, seeded from OS entropy, used by `BigInt::random`. Not
//!   part of this crate's public surface.
//!
//! # Design goals
//!
//! - No heap allocations beyond the digit vectors `BigInt` itself owns
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between arithmetic and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! big-integer libraries; it is a small, controlled foundation suitable
//! for teaching and experimentation with public-key primitives.

pub mod bigint;
pub mod error;
pub mod word;

mod os;
mod rng;
