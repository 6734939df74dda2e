use core::fmt::Debug;

/// A single element of narrow or wide text.
///
/// Implemented for `u8` (narrow text), `u16`, `u32` and `char` (wide text).
/// Classification is ASCII-only for every width: wide text is matched on its
/// scalar value.
pub trait CodeUnit: Copy + Eq + Debug + 'static {
    /// The terminator appended to duplicated strings.
    const NUL: Self;

    /// Scalar value of this unit.
    fn to_u32(self) -> u32;

    /// Space or tab.
    #[inline]
    fn is_blank(self) -> bool {
        matches!(self.to_u32(), 0x20 | 0x09)
    }

    /// Whitespace as skipped before a number: space, `\t`, `\n`, `\v`, `\f`,
    /// `\r`.
    #[inline]
    fn is_space(self) -> bool {
        matches!(self.to_u32(), 0x20 | 0x09..=0x0d)
    }

    /// Value of this unit as a digit in `radix` (2..=36), if it is one.
    #[inline]
    fn digit(self, radix: u32) -> Option<u32> {
        let value = match self.to_u32() {
            c @ 0x30..=0x39 => c - 0x30,
            c @ 0x41..=0x5a => c - 0x41 + 10,
            c @ 0x61..=0x7a => c - 0x61 + 10,
            _ => return None,
        };
        (value < radix).then_some(value)
    }

    /// Matches the ASCII character `c`.
    #[inline]
    fn is(self, c: u8) -> bool {
        self.to_u32() == u32::from(c)
    }
}

impl CodeUnit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
}

impl CodeUnit for char {
    const NUL: Self = '\0';

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}
