use thiserror::Error;

/// Errors surfaced by coordinate mapping and viewport operations.
///
/// Both variants are synchronous, detected at the call site. The library
/// never recovers on its own: on a failed commit the caller keeps the prior
/// bounds and decides whether to discard or adjust the pending transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    /// `rescale` was called with an empty source range.
    #[error("degenerate source range: min == max == {value}")]
    DegenerateRange { value: f64 },

    /// A viewport operation would produce non-monotonic plane bounds or was
    /// given a non-positive zoom factor.
    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },
}

impl FractalError {
    pub fn invalid_viewport(reason: impl Into<String>) -> Self {
        Self::InvalidViewport {
            reason: reason.into(),
        }
    }
}
