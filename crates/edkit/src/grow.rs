use alloc::vec::Vec;

use tracing::{trace, warn};

use crate::{Diagnostics, Error, GrowthOptions, diag::report};

/// A caller-owned byte buffer that only ever grows, zero-filling as it goes.
///
/// The capacity reported by [`GrowBuf::capacity`] is the number of usable,
/// initialized bytes. It is distinct from the capacity of the backing
/// allocation: after a failed growth it drops to zero while the allocation is
/// kept.
#[derive(Debug, Clone, Default)]
pub struct GrowBuf {
    data: Vec<u8>,
    options: GrowthOptions,
}

impl GrowBuf {
    /// An empty buffer with the default growth increment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer growing by `options.increment` at a time.
    #[must_use]
    pub fn with_options(options: GrowthOptions) -> Self {
        Self {
            data: Vec::new(),
            options,
        }
    }

    /// Number of usable bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// `true` when no bytes are usable, either because the buffer was never
    /// grown or because a growth failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The growth configuration this buffer was created with.
    #[must_use]
    pub fn options(&self) -> GrowthOptions {
        self.options
    }

    /// The usable bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The usable bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Ensure at least `min` usable bytes.
    ///
    /// A `min` of zero, or one already covered by the current capacity, leaves
    /// the buffer untouched. Otherwise the capacity grows by
    /// `max(min, increment)` and the new bytes are zero.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the allocator refuses. The capacity is
    /// then reset to zero and the error is reported to `diag` when present.
    pub fn ensure(&mut self, diag: Option<&mut dyn Diagnostics>, min: usize) -> Result<(), Error> {
        if min == 0 || self.capacity() >= min {
            return Ok(());
        }
        self.grow_by(diag, min.max(self.options.step()))
    }

    /// Grow once by the configured increment, whatever the current capacity.
    ///
    /// # Errors
    ///
    /// As for [`GrowBuf::ensure`].
    pub fn grow_step(&mut self, diag: Option<&mut dyn Diagnostics>) -> Result<(), Error> {
        self.grow_by(diag, self.options.step())
    }

    /// Forget the contents but keep the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Take the usable bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn grow_by(&mut self, diag: Option<&mut dyn Diagnostics>, additional: usize) -> Result<(), Error> {
        let old = self.capacity();
        let Some(new) = old.checked_add(additional) else {
            return Err(self.fail(diag, usize::MAX));
        };

        // Reserve first so a refusal leaves the contents where they were.
        if self.data.try_reserve_exact(additional).is_err() {
            return Err(self.fail(diag, new));
        }

        // `resize` writes every new byte, so `[old, new)` is zero even when
        // the allocation is being reused after a failure.
        self.data.resize(new, 0);
        trace!(old, new, "grew buffer");
        Ok(())
    }

    fn fail(&mut self, diag: Option<&mut dyn Diagnostics>, requested: usize) -> Error {
        warn!(requested, "buffer growth failed");
        self.data.clear();
        let error = Error::AllocationFailure { requested };
        report(diag, &error);
        error
    }
}
