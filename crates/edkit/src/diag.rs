use alloc::vec::Vec;

use crate::Error;

/// Where user-visible error messages go.
///
/// Operations that can fail take an `Option<&mut dyn Diagnostics>`. With
/// `None` nothing is reported and the error is still returned.
pub trait Diagnostics {
    /// Record a system-level error, such as an allocation failure.
    fn sys_error(&mut self, error: &Error);
}

impl Diagnostics for Vec<Error> {
    fn sys_error(&mut self, error: &Error) {
        self.push(error.clone());
    }
}

pub(crate) fn report(diag: Option<&mut dyn Diagnostics>, error: &Error) {
    if let Some(diag) = diag {
        diag.sys_error(error);
    }
}
