//! Outcome taxonomy shared by every resource access path.

/// A specialized `Result` type for resource access.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// The outcome attached to a [`ResourceView`](crate::ResourceView).
///
/// The set is closed. `Success` is a member so that a view can carry its
/// outcome inline; every other variant is a failure. The `Display` strings are
/// part of the compatibility surface and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u8)]
pub enum ResourceError {
    /// The access produced a usable view.
    #[error("Success")]
    Success = 0,
    /// Either bound was null.
    #[error("Null pointer encountered")]
    NullPointer = 1,
    /// The end bound precedes the start bound.
    #[error("Invalid resource size (end < start)")]
    InvalidSize = 2,
    /// A checked size does not fit a 32-bit size field.
    #[error("Resource size exceeds uint32_t limit")]
    IntegerOverflow = 3,
    /// A loader lookup found no resource under the requested name.
    #[error("Resource not found")]
    NotFound = 4,
}

impl ResourceError {
    /// Every outcome, in discriminant order.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::NullPointer,
        Self::InvalidSize,
        Self::IntegerOverflow,
        Self::NotFound,
    ];

    /// Returns the fixed message for this outcome.
    ///
    /// Identical to the `Display` output, but usable in `const` contexts and
    /// without a formatter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::NullPointer => "Null pointer encountered",
            Self::InvalidSize => "Invalid resource size (end < start)",
            Self::IntegerOverflow => "Resource size exceeds uint32_t limit",
            Self::NotFound => "Resource not found",
        }
    }

    /// `true` only for [`ResourceError::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}
