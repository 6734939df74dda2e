//! Low-level support primitives for a line-oriented text editor.
//!
//! - [`GrowBuf`]: a byte buffer whose newly grown region is always zeroed.
//! - [`dup_narrow`] / [`dup_wide`]: length-bounded, terminated string copies.
//! - [`parse_ulong`] / [`parse_slong`]: integer parsing that tells overflow and
//!   underflow apart from malformed input.
//! - [`first_nonblank`]: locate the first non-blank column of a line fetched
//!   from a [`LineSource`].
//!
//! Everything here is synchronous and allocation failures are reported, not
//! aborted on.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod blank;
mod diag;
mod dup;
mod error;
mod grow;
mod lines;
mod number;
mod options;
mod unit;

#[cfg(test)]
mod tests;

pub use blank::first_nonblank;
pub use diag::Diagnostics;
pub use dup::{Terminated, WideChar, dup_narrow, dup_units, dup_wide};
pub use error::Error;
pub use grow::GrowBuf;
pub use lines::{LineError, LineSource, MemLines, RecNo};
pub use number::{NumResult, Parsed, parse_slong, parse_ulong};
pub use options::{DEFAULT_GROWTH_INCREMENT, GrowthOptions};
pub use unit::CodeUnit;
