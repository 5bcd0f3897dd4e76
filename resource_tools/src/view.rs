//! The value handed back to callers for every resource access.
use std::ptr;

use crate::{Result, bounds::narrow_size, error::ResourceError};

/// A non-owning view of an embedded resource, or the reason there is none.
///
/// On success `data` points at the first byte of the resource and `size` is its
/// exact length; an empty resource still has a non-null `data`. On failure
/// `data` is null and `size` is `0`, so a caller that skips the
/// [`succeeded`](Self::succeeded) check reads an empty region rather than
/// garbage.
///
/// Views are plain values. They never own or free the memory they describe,
/// which belongs to the process image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceView {
    data: *const u8,
    size: usize,
    error: ResourceError,
}

// SAFETY: a view only describes immutable, process-lifetime memory; it has no
// interior mutability and reading through it from any thread is race-free.
unsafe impl Send for ResourceView {}
unsafe impl Sync for ResourceView {}

impl ResourceView {
    /// Success view over `size` bytes at `data`. `data` must be non-null.
    pub(crate) const fn success(data: *const u8, size: usize) -> Self {
        Self {
            data,
            size,
            error: ResourceError::Success,
        }
    }

    /// Failure view: null data, zero size.
    pub(crate) const fn failure(error: ResourceError) -> Self {
        debug_assert!(!error.is_success());
        Self {
            data: ptr::null(),
            size: 0,
            error,
        }
    }

    /// The view a loader returns when a lookup misses.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::failure(ResourceError::NotFound)
    }

    /// Wraps a resource the loader already resolved to a static slice.
    #[must_use]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self::success(bytes.as_ptr(), bytes.len())
    }

    /// Pointer to the first byte, or null on failure.
    #[must_use]
    pub const fn data(&self) -> *const u8 {
        self.data
    }

    /// Byte length, or `0` on failure.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The outcome of the access that produced this view.
    #[must_use]
    pub const fn error(&self) -> ResourceError {
        self.error
    }

    /// `true` iff the outcome is [`ResourceError::Success`].
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_success()
    }

    /// The fixed message for [`error`](Self::error).
    #[must_use]
    pub const fn error_message(&self) -> &'static str {
        self.error.as_str()
    }

    /// The view itself on success, its outcome otherwise. Lets callers use `?`
    /// without touching the bytes.
    ///
    /// # Errors
    /// Returns the view's outcome if it is not a success.
    pub const fn ok(self) -> Result<Self> {
        if self.succeeded() {
            Ok(self)
        } else {
            Err(self.error)
        }
    }

    /// The size as a 32-bit count.
    ///
    /// # Errors
    /// Returns the view's own outcome if it failed, or
    /// [`ResourceError::IntegerOverflow`] if the size does not fit in a `u32`.
    pub fn size_u32(&self) -> Result<u32> {
        if !self.succeeded() {
            return Err(self.error);
        }
        narrow_size(self.size)
    }

    /// Borrows the resource bytes.
    ///
    /// # Errors
    /// Returns the view's outcome if it is not a success.
    ///
    /// # Safety
    /// If this view was produced by [`validate`](crate::validate), the bounds
    /// passed in must describe memory that is readable and unchanging for the
    /// rest of the process, inside a single allocation (linker symbols for an
    /// embedded blob satisfy this). Views built by
    /// [`from_static`](Self::from_static) or a
    /// [`ResourceTable`](crate::ResourceTable) always satisfy it.
    pub unsafe fn as_bytes(&self) -> Result<&'static [u8]> {
        if !self.succeeded() {
            return Err(self.error);
        }
        // SAFETY: success implies non-null data; the caller vouches for the
        // range being live and immutable.
        Ok(unsafe { std::slice::from_raw_parts(self.data, self.size) })
    }
}
