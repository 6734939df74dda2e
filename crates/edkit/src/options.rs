/// Growth step used when no [`GrowthOptions`] are given.
pub const DEFAULT_GROWTH_INCREMENT: usize = 256;

/// Configuration for [`GrowBuf`](crate::GrowBuf).
///
/// # Examples
///
/// ```rust
/// use edkit::{GrowBuf, GrowthOptions};
///
/// let mut buf = GrowBuf::with_options(GrowthOptions { increment: 64 });
/// buf.ensure(None, 10).unwrap();
/// assert_eq!(buf.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthOptions {
    /// Smallest amount a single growth adds to the capacity.
    ///
    /// Each growth adds `max(minimum, increment)` units, so many small requests
    /// share one reallocation. A value of zero is treated as one.
    ///
    /// # Default
    ///
    /// [`DEFAULT_GROWTH_INCREMENT`] (256)
    pub increment: usize,
}

impl GrowthOptions {
    pub(crate) fn step(self) -> usize {
        self.increment.max(1)
    }
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self {
            increment: DEFAULT_GROWTH_INCREMENT,
        }
    }
}
