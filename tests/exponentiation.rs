//! Modular exponentiation: agreement between left-to-right and
//! Montgomery ladder (spec property law 9), a wide-operand scenario, and
//! the domain guard on negative operands.

use mpint::bigint::exponentiation::{modexp_left_to_right, modexp_montgomery_ladder};
use mpint::bigint::{BigInt, Sign};
use mpint::error::BigIntError;

fn hex(s: &str) -> BigInt {
    BigInt::from_hex(s, Sign::Positive).unwrap()
}

#[test]
fn wide_operand_modexp_matches_a_known_value_and_both_algorithms_agree() {
    let base = hex("c08d7139ec42a07d368e3fdfcc11a53fa2297928fef126d0ae89d501bd16022e");
    let exponent = hex("d07acf4d5c297f7002fa85004dce801d40c8cdc1bbe5071e4");
    let modulus = hex("ac077f929024783a922982b34ae144dde21d1903b68cb1dc43b296274c0b21bb");

    let expected = hex("63b567c1b3bb919989ea9bb1221947d70fbe01240c20eabe8b332fafeb188a44");

    let left = modexp_left_to_right(&base, &exponent, &modulus).unwrap();
    let ladder = modexp_montgomery_ladder(&base, &exponent, &modulus).unwrap();

    assert_eq!(left, expected);
    assert_eq!(ladder, expected);
}

#[test]
fn zero_exponent_always_yields_one() {
    let base = hex("feedface");
    let modulus = hex("10001");
    let one = modexp_left_to_right(&base, &BigInt::zero(), &modulus).unwrap();
    assert!(one.is_one());
    let one_ladder = modexp_montgomery_ladder(&base, &BigInt::zero(), &modulus).unwrap();
    assert!(one_ladder.is_one());
}

#[test]
fn rejects_negative_base_or_exponent() {
    let neg = BigInt::from_hex("5", Sign::Negative).unwrap();
    let pos = hex("5");
    let modulus = hex("97");
    assert_eq!(
        modexp_left_to_right(&neg, &pos, &modulus),
        Err(BigIntError::DivisionDomain)
    );
    assert_eq!(
        modexp_montgomery_ladder(&pos, &neg, &modulus),
        Err(BigIntError::DivisionDomain)
    );
}
