//! Integer parsing with the overflow reporting of the C library's `strtoul`
//! and `strtol`.
//!
//! The conversion itself mirrors the C routines: it clamps to the type's
//! extreme and flags a range error, or flags an invalid-input error. The
//! outcome is then classified by comparing the clamped value against the
//! extremes, which is what lets callers say "number too large" instead of
//! "not a number".

use core::ffi::{c_long, c_ulong};

use tracing::debug;

use crate::{CodeUnit, Error};

/// How a numeric conversion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumResult {
    /// The whole number fit.
    Ok,
    /// The number exceeded the largest value; the value is that maximum.
    Overflow,
    /// The number was below the smallest value; the value is that minimum.
    Underflow,
    /// Not a number, or an unsupported radix.
    Err,
}

/// Outcome, value and stop position of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Classification of the conversion.
    pub result: NumResult,
    /// Converted value. Meaningless when `result` is [`NumResult::Err`].
    pub value: T,
    /// Index of the first unit not consumed. Zero when nothing was converted.
    pub end: usize,
}

impl<T: Copy> Parsed<T> {
    /// The value, unless the conversion failed outright.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self.result {
            NumResult::Err => None,
            NumResult::Ok | NumResult::Overflow | NumResult::Underflow => Some(self.value),
        }
    }
}

impl Parsed<c_ulong> {
    /// Accept only an in-range number.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] or [`Error::MalformedInput`].
    pub fn into_result(self) -> Result<c_ulong, Error> {
        match self.result {
            NumResult::Ok => Ok(self.value),
            NumResult::Overflow => Err(Error::Overflow { limit: c_ulong::MAX }),
            NumResult::Underflow | NumResult::Err => Err(Error::MalformedInput),
        }
    }
}

impl Parsed<c_long> {
    /// Accept only an in-range number.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`], [`Error::Underflow`] or [`Error::MalformedInput`].
    pub fn into_result(self) -> Result<c_long, Error> {
        match self.result {
            NumResult::Ok => Ok(self.value),
            NumResult::Overflow => Err(Error::Overflow {
                limit: c_long::MAX.unsigned_abs(),
            }),
            NumResult::Underflow => Err(Error::Underflow { limit: c_long::MIN }),
            NumResult::Err => Err(Error::MalformedInput),
        }
    }
}

/// Parse an unsigned `long` from the start of `src`.
///
/// Leading whitespace is skipped and a `+` or `-` sign accepted; a `-`
/// negates the result modulo 2^N, as `strtoul` does. `base` is 2..=36, or 0
/// to pick 16 for a `0x` prefix, 8 for a leading `0` and 10 otherwise. A
/// [`CodeUnit::NUL`] or the end of `src` ends the text.
///
/// ```rust
/// use edkit::{NumResult, parse_ulong};
///
/// let parsed = parse_ulong(b"0x1f;", 0);
/// assert_eq!(parsed.result, NumResult::Ok);
/// assert_eq!(parsed.value, 31);
/// assert_eq!(parsed.end, 4);
/// ```
pub fn parse_ulong<C: CodeUnit>(src: &[C], base: u32) -> Parsed<c_ulong> {
    let conv = strtoul(src, base);
    Parsed {
        result: classify_unsigned(&conv),
        value: conv.value,
        end: conv.end,
    }
}

/// Parse a signed `long` from the start of `src`.
///
/// Same input rules as [`parse_ulong`]; values past either end of `c_long`
/// report [`NumResult::Overflow`] or [`NumResult::Underflow`].
///
/// ```rust
/// use edkit::{NumResult, parse_slong};
///
/// let parsed = parse_slong(&['-', '4', '2'], 10);
/// assert_eq!(parsed.result, NumResult::Ok);
/// assert_eq!(parsed.value, -42);
/// ```
pub fn parse_slong<C: CodeUnit>(src: &[C], base: u32) -> Parsed<c_long> {
    let conv = strtol(src, base);
    Parsed {
        result: classify_signed(&conv),
        value: conv.value,
        end: conv.end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Errno {
    /// `ERANGE`
    Range,
    /// `EINVAL`
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conversion<T> {
    value: T,
    end: usize,
    errno: Option<Errno>,
}

fn classify_unsigned(conv: &Conversion<c_ulong>) -> NumResult {
    match conv.errno {
        None => NumResult::Ok,
        Some(Errno::Range) if conv.value == c_ulong::MAX => NumResult::Overflow,
        Some(_) => NumResult::Err,
    }
}

fn classify_signed(conv: &Conversion<c_long>) -> NumResult {
    match conv.errno {
        None => NumResult::Ok,
        Some(Errno::Range) if conv.value == c_long::MAX => NumResult::Overflow,
        Some(Errno::Range) if conv.value == c_long::MIN => NumResult::Underflow,
        Some(_) => NumResult::Err,
    }
}

fn strtoul<C: CodeUnit>(src: &[C], base: u32) -> Conversion<c_ulong> {
    let Some(digits) = scan(src, base, |_| c_ulong::MAX) else {
        return invalid(0);
    };
    if digits.overflowed {
        debug!(end = digits.end, "unsigned conversion out of range");
        return Conversion {
            value: c_ulong::MAX,
            end: digits.end,
            errno: Some(Errno::Range),
        };
    }
    let value = if digits.negative {
        digits.magnitude.wrapping_neg()
    } else {
        digits.magnitude
    };
    Conversion {
        value,
        end: digits.end,
        errno: None,
    }
}

fn strtol<C: CodeUnit>(src: &[C], base: u32) -> Conversion<c_long> {
    let limit = |negative: bool| {
        if negative {
            c_long::MIN.unsigned_abs()
        } else {
            c_long::MAX.unsigned_abs()
        }
    };
    let Some(digits) = scan(src, base, limit) else {
        return invalid(0);
    };
    if digits.overflowed {
        debug!(end = digits.end, negative = digits.negative, "signed conversion out of range");
        return Conversion {
            value: if digits.negative { c_long::MIN } else { c_long::MAX },
            end: digits.end,
            errno: Some(Errno::Range),
        };
    }
    // Within `limit`, so only the magnitude of `MIN` fails to convert.
    let value = match c_long::try_from(digits.magnitude) {
        Ok(m) if digits.negative => -m,
        Ok(m) => m,
        Err(_) => c_long::MIN,
    };
    Conversion {
        value,
        end: digits.end,
        errno: None,
    }
}

fn invalid<T: Default>(end: usize) -> Conversion<T> {
    debug!("no conversion performed");
    Conversion {
        value: T::default(),
        end,
        errno: Some(Errno::Invalid),
    }
}

struct Digits {
    negative: bool,
    magnitude: c_ulong,
    overflowed: bool,
    end: usize,
}

/// Shared front end of both conversions. `None` means nothing was converted.
fn scan<C: CodeUnit>(src: &[C], base: u32, limit: impl Fn(bool) -> c_ulong) -> Option<Digits> {
    if base == 1 || base > 36 {
        return None;
    }
    let at = |i: usize| src.get(i).copied().unwrap_or(C::NUL);

    let mut i = 0;
    while at(i).is_space() {
        i += 1;
    }

    let negative = at(i).is(b'-');
    if negative || at(i).is(b'+') {
        i += 1;
    }

    let has_hex_prefix = at(i).is(b'0')
        && (at(i + 1).is(b'x') || at(i + 1).is(b'X'))
        && at(i + 2).digit(16).is_some();
    let radix = match base {
        0 | 16 if has_hex_prefix => {
            i += 2;
            16
        }
        0 if at(i).is(b'0') => 8,
        0 => 10,
        radix => radix,
    };

    let limit = limit(negative);
    let wide_radix = c_ulong::from(radix);
    let start = i;
    let mut magnitude: c_ulong = 0;
    let mut overflowed = false;
    while let Some(d) = at(i).digit(radix) {
        if !overflowed {
            match magnitude
                .checked_mul(wide_radix)
                .and_then(|m| m.checked_add(c_ulong::from(d)))
            {
                Some(m) if m <= limit => magnitude = m,
                _ => overflowed = true,
            }
        }
        i += 1;
    }

    (i > start).then_some(Digits {
        negative,
        magnitude,
        overflowed,
        end: i,
    })
}
