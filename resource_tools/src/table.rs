//! Lookup-by-name access, for platforms that ship resources in a table
//! (e.g. a PE resource section) instead of as linker symbol pairs.
//!
//! The loader already knows each resource's pointer and length, so this path
//! builds views directly and never goes through [`validate`](crate::validate).

use crate::ResourceView;

/// One named resource in a [`ResourceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceEntry {
    name: &'static str,
    bytes: &'static [u8],
}

impl ResourceEntry {
    /// An entry named `name` holding `bytes`.
    #[must_use]
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }

    /// The lookup key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The resource contents.
    #[must_use]
    pub const fn bytes(&self) -> &'static [u8] {
        self.bytes
    }
}

/// A static table of named resources.
///
/// # Example
/// ```
/// use resource_tools::{ResourceEntry, ResourceError, ResourceTable};
///
/// static ENTRIES: [ResourceEntry; 1] = [
///     ResourceEntry::new("TEST_FILE_TXT", b"Hello, Resource Tools!"),
/// ];
/// static TABLE: ResourceTable = ResourceTable::new(&ENTRIES);
///
/// assert_eq!(TABLE.lookup("TEST_FILE_TXT").size(), 22);
/// assert_eq!(TABLE.lookup("MISSING").error(), ResourceError::NotFound);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourceTable {
    entries: &'static [ResourceEntry],
}

impl ResourceTable {
    /// A table over `entries`, searched in order.
    #[must_use]
    pub const fn new(entries: &'static [ResourceEntry]) -> Self {
        Self { entries }
    }

    /// Finds `name` (exact, case-sensitive match).
    ///
    /// A hit returns a view aliasing the entry's bytes; a miss returns
    /// [`ResourceView::not_found`]. If a name appears twice the first entry
    /// wins.
    #[must_use]
    pub fn lookup(&self, name: &str) -> ResourceView {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map_or_else(ResourceView::not_found, |entry| {
                ResourceView::from_static(entry.bytes)
            })
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(ResourceEntry::name)
    }
}
