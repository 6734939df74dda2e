use core::ffi::{c_long, c_ulong};

use thiserror::Error;

use crate::lines::LineError;

/// Everything that can go wrong in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The allocator could not provide the requested storage.
    #[error("unable to allocate {requested} units")]
    AllocationFailure {
        /// Total size asked for, in code units.
        requested: usize,
    },
    /// A number was larger than the result type can hold.
    #[error("number larger than {limit}")]
    Overflow {
        /// Largest value of the result type.
        limit: c_ulong,
    },
    /// A signed number was smaller than the result type can hold.
    #[error("number less than {limit}")]
    Underflow {
        /// Smallest value of the result type.
        limit: c_long,
    },
    /// The text was not a number in the requested radix.
    #[error("not a number")]
    MalformedInput,
    /// The line storage could not supply a line.
    #[error(transparent)]
    UpstreamFailure(#[from] LineError),
}
