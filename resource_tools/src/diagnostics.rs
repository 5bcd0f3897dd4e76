//! An optional hook through which accessors report failures.
//!
//! The core never requires a logger. A host application that wants to see
//! failures installs a plain function; with the `log` feature enabled,
//! [`log_sink`] is such a function and routes reports to the `log` facade.

use std::{
    mem, ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

/// Receives one diagnostic message.
pub type DiagnosticCallback = fn(&str);

/// A single replaceable callback slot.
///
/// The slot is swapped atomically, so installing, clearing and invoking may
/// happen from any thread; the last writer wins and nothing is queued. A
/// report racing with a replacement may reach either callback.
#[derive(Debug)]
pub struct Diagnostics {
    slot: AtomicPtr<()>,
}

impl Diagnostics {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Installs `callback`, or clears the slot with `None`. Returns the
    /// callback that was installed before.
    pub fn set(&self, callback: Option<DiagnosticCallback>) -> Option<DiagnosticCallback> {
        let new = callback.map_or(ptr::null_mut(), |f| f as *mut ());
        Self::decode(self.slot.swap(new, Ordering::AcqRel))
    }

    /// The installed callback, if any.
    #[must_use]
    pub fn get(&self) -> Option<DiagnosticCallback> {
        Self::decode(self.slot.load(Ordering::Acquire))
    }

    /// Sends `message` to the installed callback, if any.
    pub fn report(&self, message: &str) {
        if let Some(callback) = self.get() {
            callback(message);
        }
    }

    fn decode(raw: *mut ()) -> Option<DiagnosticCallback> {
        if raw.is_null() {
            None
        } else {
            // SAFETY: the slot only ever holds null or a value produced from a
            // `DiagnosticCallback` in `set`.
            Some(unsafe { mem::transmute::<*mut (), DiagnosticCallback>(raw) })
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Diagnostics = Diagnostics::new();

/// The process-wide diagnostics context.
#[must_use]
pub fn global() -> &'static Diagnostics {
    &GLOBAL
}

/// Installs or clears the process-wide diagnostic callback.
pub fn set_diagnostic_callback(callback: Option<DiagnosticCallback>) {
    GLOBAL.set(callback);
}

/// A callback that forwards messages to `log::warn!`.
#[cfg(feature = "log")]
pub fn log_sink(message: &str) {
    log::warn!(target: "resource_tools", "{message}");
}
