//! One interface over both loader paths.
//!
//! Generated accessors pick the implementation for their target when they are
//! generated; nothing here inspects the platform at runtime.

use crate::{ResourceTable, ResourceView, validate};

/// Something that can produce a [`ResourceView`] for a single resource.
pub trait ResourceSource {
    /// Short label used in diagnostics.
    fn describe(&self) -> &str;

    /// Produces the view; failures are encoded in it, never panicked on.
    fn resolve(&self) -> ResourceView;
}

/// Linker-provided bounds of one embedded blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkerBounds {
    name: &'static str,
    start: *const u8,
    end: *const u8,
}

impl LinkerBounds {
    /// Bounds `start..end` for the resource labelled `name`.
    #[must_use]
    pub const fn new(name: &'static str, start: *const u8, end: *const u8) -> Self {
        Self { name, start, end }
    }
}

// SAFETY: the bounds point into the read-only image of the process and are
// only ever compared, never written through.
unsafe impl Send for LinkerBounds {}
unsafe impl Sync for LinkerBounds {}

impl ResourceSource for LinkerBounds {
    fn describe(&self) -> &str {
        self.name
    }

    fn resolve(&self) -> ResourceView {
        validate(self.start, self.end)
    }
}

/// A named entry in a [`ResourceTable`].
#[derive(Debug, Clone, Copy)]
pub struct TableResource<'t> {
    table: &'t ResourceTable,
    name: &'t str,
}

impl<'t> TableResource<'t> {
    /// The entry `name` of `table`.
    #[must_use]
    pub const fn new(table: &'t ResourceTable, name: &'t str) -> Self {
        Self { table, name }
    }
}

impl ResourceSource for TableResource<'_> {
    fn describe(&self) -> &str {
        self.name
    }

    fn resolve(&self) -> ResourceView {
        self.table.lookup(self.name)
    }
}
