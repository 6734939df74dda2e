#![no_main]
use core::ffi::{c_long, c_ulong};

use arbitrary::Arbitrary;
use edkit::{NumResult, parse_slong, parse_ulong};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    base: u8,
    text: Vec<u8>,
}

/// Reference answer for plain decimal text: optional sign, then digits only.
fn reference_signed(text: &str) -> Option<NumResult> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(match text.parse::<c_long>() {
        Ok(_) => NumResult::Ok,
        Err(_) if text.starts_with('-') => NumResult::Underflow,
        Err(_) => NumResult::Overflow,
    })
}

fn check(input: Input) {
    let base = u32::from(input.base % 40);
    let text = &input.text;

    let unsigned = parse_ulong(text, base);
    let signed = parse_slong(text, base);

    assert!(unsigned.end <= text.len());
    assert!(signed.end <= text.len());
    if unsigned.result == NumResult::Err {
        assert_eq!(unsigned.end, 0);
    }
    assert_ne!(unsigned.result, NumResult::Underflow);
    if unsigned.result == NumResult::Overflow {
        assert_eq!(unsigned.value, c_ulong::MAX);
    }
    match signed.result {
        NumResult::Overflow => assert_eq!(signed.value, c_long::MAX),
        NumResult::Underflow => assert_eq!(signed.value, c_long::MIN),
        _ => {}
    }

    // Wide text must agree with narrow text.
    let wide: Vec<char> = text.iter().map(|b| char::from(*b)).collect();
    assert_eq!(parse_slong(&wide, base), signed);

    if base == 10 {
        if let Ok(s) = std::str::from_utf8(text) {
            if let Some(expected) = reference_signed(s) {
                assert_eq!(signed.result, expected, "{s:?}");
                assert_eq!(signed.end, s.len());
                if expected == NumResult::Ok {
                    assert_eq!(Ok(signed.value), s.parse::<c_long>());
                }
            }
        }
    }
}

fuzz_target!(|input: Input| check(input));
