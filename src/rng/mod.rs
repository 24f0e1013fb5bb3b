//! Random number generation.
//!
//! [`BigInt::random`](crate::bigint::BigInt::random) draws its digits from
//! a ChaCha20-based deterministic random bit generator (DRBG), itself
//! seeded from OS entropy.
///
/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through periodic rekeying
/// - No heap allocation
/// - Minimal and explicit API surface
mod chacha20;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;
