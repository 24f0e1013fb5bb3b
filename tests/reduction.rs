//! Barrett reduction equivalence with word-long division (spec property
//! law 8), plus the digit-count domain guard.

use mpint::bigint::reduction::{barrett_precompute, barrett_reduce};
use mpint::bigint::{divide_word_long, BigInt, Sign};
use mpint::error::BigIntError;

fn hex(s: &str) -> BigInt {
    BigInt::from_hex(s, Sign::Positive).unwrap()
}

#[test]
fn wide_modulus_reduction_agrees_with_division() {
    let modulus = hex("ac077f929024783a922982b34ae144dde21d1903b68cb1dc43b296274c0b21bb");
    let dividend = hex("c08d7139ec42a07d368e3fdfcc11a53fa2297928fef126d0ae89d501bd16022e");

    let t = barrett_precompute(&modulus).unwrap();
    let reduced = barrett_reduce(&dividend, &modulus, &t).unwrap();

    let (_, expected) = divide_word_long(&dividend, &modulus).unwrap();
    assert_eq!(reduced, expected);
}

#[test]
fn reduction_agrees_with_division_across_several_moduli() {
    let dividend = hex("fedcba9876543210abcdef0123456789fedcba9876543210");

    for modulus_hex in ["97", "1001", "deadbeef", "123456789abcdef01"] {
        let modulus = hex(modulus_hex);
        let t = barrett_precompute(&modulus).unwrap();
        let reduced = barrett_reduce(&dividend, &modulus, &t).unwrap();
        let (_, expected) = divide_word_long(&dividend, &modulus).unwrap();
        assert_eq!(reduced, expected, "mismatch for modulus {modulus_hex}");
    }
}

#[test]
fn rejects_dividend_wider_than_twice_the_modulus() {
    let modulus = hex("7");
    let dividend = BigInt::set_from_words(&[1, 2, 3], Sign::Positive);
    assert_eq!(
        barrett_reduce(&dividend, &modulus, &BigInt::zero()),
        Err(BigIntError::ReductionDomain)
    );
}
