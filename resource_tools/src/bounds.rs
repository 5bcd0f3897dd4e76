//! Conversion of a raw `(start, end)` bounds pair into a [`ResourceView`].
//!
//! Only addresses are compared and subtracted here; nothing is dereferenced,
//! so every function in this module is safe to call with arbitrary pointers.

use crate::{ResourceView, Result, error::ResourceError};

/// Validates the bounds of an embedded resource.
///
/// `start` is the first byte and `end` is one past the last byte, as exported
/// by the linker (e.g. `_binary_<name>_start` / `_binary_<name>_end`). The
/// checks run in this order and the first one that fails decides the outcome:
///
/// 1. `start` is null: [`ResourceError::NullPointer`]
/// 2. `end` is null: [`ResourceError::NullPointer`]
/// 3. `end` precedes `start`: [`ResourceError::InvalidSize`]
///
/// Otherwise the view aliases `start` with `size == end - start`. Equal bounds
/// yield a successful, empty view.
///
/// The size is native width, so this path never reports
/// [`ResourceError::IntegerOverflow`]; use [`narrow_size`] or
/// [`ResourceView::size_u32`] when a 32-bit count is required.
#[must_use]
pub fn validate(start: *const u8, end: *const u8) -> ResourceView {
    if start.is_null() || end.is_null() {
        return ResourceView::failure(ResourceError::NullPointer);
    }
    let (lo, hi) = (start.addr(), end.addr());
    if hi < lo {
        return ResourceView::failure(ResourceError::InvalidSize);
    }
    ResourceView::success(start, hi - lo)
}

/// Narrows a checked size into a 32-bit count without truncating.
///
/// # Errors
/// Returns [`ResourceError::IntegerOverflow`] if `size` exceeds `u32::MAX`.
pub fn narrow_size(size: usize) -> Result<u32> {
    u32::try_from(size).map_err(|_| ResourceError::IntegerOverflow)
}

/// Raw pointer difference truncated to 32 bits, with no validation at all.
///
/// The result is meaningless when either pointer is null, when `end` precedes
/// `start` (the difference wraps), when the pointers belong to different
/// objects, or when the region is 4 GiB or larger. Kept only so that existing
/// accessors keep building; new code calls [`validate`].
#[deprecated(note = "unchecked; use `validate` and `ResourceView::size_u32`")]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn legacy_raw_size(start: *const u8, end: *const u8) -> u32 {
    end.addr().wrapping_sub(start.addr()) as u32
}
