//! Squaring agreement with multiplication and with itself across
//! algorithms (spec property law 6).

use mpint::bigint::{BigInt, Sign};

fn hex(s: &str) -> BigInt {
    BigInt::from_hex(s, Sign::Positive).unwrap()
}

#[test]
fn wide_operand_square_matches_self_multiplication() {
    let x = hex("c08d7139ec42a07d368e3fdfcc11a53fa2297928fef126d0ae89d501bd16022e");
    let expected =
        hex("90d477fcce4661ce7d2863abf0206fada11cce52fee5742e7a3ae75b3ee11f3edc3b24e90e5a3dc5e422e1448331bfdc526028dd392763ee82b211784becc044");

    assert_eq!(x.sqr_schoolbook(), expected);
    assert_eq!(x.sqr_karatsuba(), expected);
    assert_eq!(x.mul_schoolbook(&x), expected);
}

#[test]
fn karatsuba_and_schoolbook_squaring_agree_on_many_widths() {
    for n in 1..12 {
        let words: Vec<u32> = (1..=n as u32).collect();
        let x = BigInt::set_from_words(&words, Sign::Positive);
        assert_eq!(x.sqr_schoolbook(), x.sqr_karatsuba(), "disagreement at width {n}");
    }
}

#[test]
fn squaring_a_negative_value_is_positive() {
    let neg = BigInt::from_hex("2a", Sign::Negative).unwrap();
    assert_eq!(neg.sqr_schoolbook().sign(), Sign::Positive);
    assert_eq!(neg.sqr_karatsuba().sign(), Sign::Positive);
}
