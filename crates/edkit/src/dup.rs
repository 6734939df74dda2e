use alloc::{boxed::Box, vec::Vec};

use bstr::BStr;
use tracing::{trace, warn};

use crate::{CodeUnit, Diagnostics, Error, diag::report};

/// Code unit of wide text.
pub type WideChar = char;

/// An owned copy of a span followed by one [`CodeUnit::NUL`].
///
/// The span itself may contain `NUL` units; [`Terminated::len`] is the length
/// that was copied, not the distance to the first terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terminated<C: CodeUnit> {
    units: Box<[C]>,
}

impl<C: CodeUnit> Terminated<C> {
    /// Number of copied units, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// `true` if nothing but the terminator was stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The copied units.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.units[..self.len()]
    }

    /// The copied units and the terminator.
    #[must_use]
    pub fn as_slice_with_nul(&self) -> &[C] {
        &self.units
    }

    /// Consume the copy, terminator included.
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[C]> {
        self.units
    }
}

impl Terminated<u8> {
    /// The copied bytes as a byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_slice())
    }
}

/// Copy `src` into new storage and terminate it.
///
/// Exactly `src.len()` units are copied, whatever they contain, then a
/// [`CodeUnit::NUL`] is appended.
///
/// # Errors
///
/// [`Error::AllocationFailure`] if `src.len() + 1` units cannot be allocated.
/// Nothing is kept on failure and the error is reported to `diag` when
/// present.
pub fn dup_units<C: CodeUnit>(
    diag: Option<&mut dyn Diagnostics>,
    src: &[C],
) -> Result<Terminated<C>, Error> {
    let mut copy: Vec<C> = Vec::new();
    let reserved = src
        .len()
        .checked_add(1)
        .and_then(|requested| copy.try_reserve_exact(requested).ok());
    if reserved.is_none() {
        let requested = src.len().saturating_add(1);
        warn!(requested, "string duplication failed");
        let error = Error::AllocationFailure { requested };
        report(diag, &error);
        return Err(error);
    }
    copy.extend_from_slice(src);
    copy.push(C::NUL);
    trace!(len = src.len(), "duplicated string");
    Ok(Terminated {
        units: copy.into_boxed_slice(),
    })
}

/// [`dup_units`] for bytes.
///
/// # Errors
///
/// As for [`dup_units`].
pub fn dup_narrow(diag: Option<&mut dyn Diagnostics>, src: &[u8]) -> Result<Terminated<u8>, Error> {
    dup_units(diag, src)
}

/// [`dup_units`] for wide characters.
///
/// # Errors
///
/// As for [`dup_units`].
pub fn dup_wide(
    diag: Option<&mut dyn Diagnostics>,
    src: &[WideChar],
) -> Result<Terminated<WideChar>, Error> {
    dup_units(diag, src)
}
