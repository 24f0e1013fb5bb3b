//! Word-size configuration.
//!
//! A `Word` is the fixed-size unsigned machine integer used as a single
//! digit of a [`BigInt`](crate::bigint::BigInt) magnitude, in base
//! `2^WORD_BITS`. The width is chosen at compile time via exactly one of
//! the `word8` / `word16` / `word32` / `word64` Cargo features (default:
//! `word32`, matching the original C library's default `BI_WORD32`).
//! Enabling more than one width feature is a compile error: every `BigInt`
//! in a given build must agree on `W`.

#[cfg(all(feature = "word8", feature = "word16"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");
#[cfg(all(feature = "word8", feature = "word32"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");
#[cfg(all(feature = "word8", feature = "word64"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");
#[cfg(all(feature = "word16", feature = "word32"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");
#[cfg(all(feature = "word16", feature = "word64"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");
#[cfg(all(feature = "word32", feature = "word64"))]
compile_error!("at most one of the word8/word16/word32/word64 features may be enabled");

#[cfg(feature = "word8")]
pub type Word = u8;

#[cfg(feature = "word16")]
pub type Word = u16;

#[cfg(feature = "word64")]
pub type Word = u64;

#[cfg(not(any(feature = "word8", feature = "word16", feature = "word64")))]
pub type Word = u32;

/// Bit width of a single digit (`W`).
pub const WORD_BITS: u32 = Word::BITS;

/// Byte width of a single digit.
pub const WORD_BYTES: usize = (WORD_BITS / 8) as usize;

/// Number of hex characters one zero-padded digit occupies (`ceil(W/4)`).
pub const WORD_HEX_CHARS: usize = WORD_BYTES * 2;
