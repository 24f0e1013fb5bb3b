//! Barrett modular reduction.
//!
//! Barrett trades a division per reduction for one multiplication against
//! a modulus-derived constant `T = floor(B^(2n) / N)`, computed once and
//! reused across every reduction against that modulus (e.g. once per
//! modular exponentiation rather than once per squaring/multiplication
//! inside it).

use core::cmp::Ordering;

use super::BigInt;
use crate::error::BigIntError;

/// Pre-computes `T = floor(B^(2n) / N)` for a modulus `N` of `n` digits.
pub fn barrett_precompute(modulus: &BigInt) -> Result<BigInt, BigIntError> {
    let dividend = BigInt::one().expand(2 * modulus.digit_count());
    let (quotient, _remainder) = super::divide_word_long(&dividend, modulus)?;
    Ok(quotient)
}

/// Reduces `dividend` modulo `modulus` using the pre-computed constant
/// from [`barrett_precompute`].
///
/// `dividend` must fit in at most `2 * modulus.digit_count()` digits
/// (`0 <= dividend < B^(2n)`); anything wider fails with
/// [`BigIntError::ReductionDomain`] rather than silently truncating.
pub fn barrett_reduce(
    dividend: &BigInt,
    modulus: &BigInt,
    pre_computed: &BigInt,
) -> Result<BigInt, BigIntError> {
    if dividend.digit_count() > modulus.digit_count() * 2 {
        return Err(BigIntError::ReductionDomain);
    }

    let n = modulus.digit_count();

    let mut quotient = dividend.compress(n - 1); // A >> W^(n-1)
    quotient = quotient.mul_karatsuba(pre_computed); // * T
    quotient = quotient.compress(n + 1); // >> W^(n+1)

    let mut remainder = dividend.sub(&quotient.mul_karatsuba(modulus)); // A - QN

    while remainder.compare(modulus) != Ordering::Less {
        remainder = remainder.sub(modulus);
    }

    remainder.refine();
    Ok(remainder)
}
