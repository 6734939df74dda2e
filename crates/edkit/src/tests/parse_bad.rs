use alloc::vec::Vec;
use core::ffi::{c_long, c_ulong};

use rstest::rstest;

use crate::{Error, NumResult, parse_slong, parse_ulong};

#[rstest]
#[case("abc", 0)]
#[case("abc", 10)]
#[case("", 10)]
#[case("   ", 10)]
#[case("-", 10)]
#[case("+ 1", 10)]
#[case("9", 8)]
#[case("2", 2)]
#[case("g", 16)]
fn not_a_number(#[case] text: &str, #[case] base: u32) {
    let parsed = parse_ulong(text.as_bytes(), base);
    assert_eq!(parsed.result, NumResult::Err, "{text:?}");
    assert_eq!(parsed.end, 0, "{text:?}");
    assert_eq!(parsed.value(), None);
    assert_eq!(parsed.into_result(), Err(Error::MalformedInput));

    let parsed = parse_slong(text.as_bytes(), base);
    assert_eq!(parsed.result, NumResult::Err, "{text:?}");
    assert_eq!(parsed.end, 0, "{text:?}");
    assert_eq!(parsed.into_result(), Err(Error::MalformedInput));
}

#[rstest]
#[case(1)]
#[case(37)]
#[case(100)]
fn unsupported_radix(#[case] base: u32) {
    assert_eq!(parse_ulong(b"10", base).result, NumResult::Err);
    assert_eq!(parse_slong(b"10", base).result, NumResult::Err);
}

#[test]
fn unsigned_overflow_clamps_to_max() {
    let text = "99999999999999999999999999";
    let parsed = parse_ulong(text.as_bytes(), 10);
    assert_eq!(parsed.result, NumResult::Overflow);
    assert_eq!(parsed.value, c_ulong::MAX);
    assert_eq!(parsed.value(), Some(c_ulong::MAX));
    assert_eq!(parsed.end, text.len());
}

#[test]
fn unsigned_overflow_consumes_trailing_digits() {
    let parsed = parse_ulong(b"0xffffffffffffffffffffffff;", 0);
    assert_eq!(parsed.result, NumResult::Overflow);
    assert_eq!(parsed.end, 26);
}

#[test]
fn negative_unsigned_overflow_is_still_overflow() {
    let parsed = parse_ulong(b"-99999999999999999999999999", 10);
    assert_eq!(parsed.result, NumResult::Overflow);
    assert_eq!(parsed.value, c_ulong::MAX);
}

#[test]
fn signed_overflow_clamps_to_max() {
    let parsed = parse_slong(b"99999999999999999999", 10);
    assert_eq!(parsed.result, NumResult::Overflow);
    assert_eq!(parsed.value, c_long::MAX);
    assert_eq!(
        parsed.into_result(),
        Err(Error::Overflow {
            limit: c_long::MAX.unsigned_abs()
        })
    );
}

#[test]
fn signed_underflow_clamps_to_min() {
    let text: Vec<char> = "-99999999999999999999".chars().collect();
    let parsed = parse_slong(&text, 10);
    assert_eq!(parsed.result, NumResult::Underflow);
    assert_eq!(parsed.value, c_long::MIN);
    assert_eq!(parsed.end, text.len());
}
