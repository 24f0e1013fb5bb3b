//! Modular exponentiation.
//!
//! Both variants pre-compute the Barrett constant for `modulus` once and
//! reduce after every squaring and every multiplication, rather than
//! accumulating an unreduced intermediate and reducing once at the end.

use super::reduction::{barrett_precompute, barrett_reduce};
use super::{BigInt, Sign};
use crate::error::BigIntError;
use crate::word::WORD_BITS;

fn reject_negative(base: &BigInt, exponent: &BigInt) -> Result<(), BigIntError> {
    if base.sign() == Sign::Negative || exponent.sign() == Sign::Negative {
        return Err(BigIntError::DivisionDomain);
    }
    Ok(())
}

/// Left-to-right square-and-multiply: scans the exponent from its most
/// significant bit, always squaring the accumulator and conditionally
/// multiplying by `base` when the current bit is 1.
pub fn modexp_left_to_right(
    base: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, BigIntError> {
    reject_negative(base, exponent)?;

    let barrett_t = barrett_precompute(modulus)?;
    let mut result = BigInt::one();

    for digit_idx in (0..exponent.digit_count()).rev() {
        for bit_idx in (0..WORD_BITS).rev() {
            result = result.sqr_schoolbook();
            result = barrett_reduce(&result, modulus, &barrett_t)?;

            if (exponent.digits()[digit_idx] >> bit_idx) & 1 == 1 {
                result = result.mul_schoolbook(base);
                result = barrett_reduce(&result, modulus, &barrett_t)?;
            }
        }
    }

    result.refine();
    Ok(result)
}

/// Montgomery ladder: maintains the invariant `right / left == base`
/// (mod `modulus`) and performs one multiply and one square per exponent
/// bit regardless of its value, so the operation sequence does not
/// depend on the bit pattern (though timing within each operation still
/// does — this is not a constant-time implementation).
pub fn modexp_montgomery_ladder(
    base: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, BigIntError> {
    reject_negative(base, exponent)?;

    let barrett_t = barrett_precompute(modulus)?;
    let mut left = BigInt::one();
    let mut right = base.clone();

    for digit_idx in (0..exponent.digit_count()).rev() {
        for bit_idx in (0..WORD_BITS).rev() {
            if (exponent.digits()[digit_idx] >> bit_idx) & 1 == 1 {
                left = left.mul_schoolbook(&right);
                left = barrett_reduce(&left, modulus, &barrett_t)?;
                right = right.sqr_schoolbook();
                right = barrett_reduce(&right, modulus, &barrett_t)?;
            } else {
                right = right.mul_schoolbook(&left);
                right = barrett_reduce(&right, modulus, &barrett_t)?;
                left = left.sqr_schoolbook();
                left = barrett_reduce(&left, modulus, &barrett_t)?;
            }
        }
    }

    left.refine();
    Ok(left)
}
