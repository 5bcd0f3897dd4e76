//! Checked access to binary resources embedded into a program at build time.
//!
//! Build tooling embeds files into the final binary in one of two ways:
//!
//! - **Linker symbols (ELF, Mach-O):** each file becomes an object file that
//!   exports a `start` and an `end` symbol around its bytes. Generated
//!   accessors take the addresses of both symbols and hand them to
//!   [`validate`].
//! - **Resource tables (PE):** the loader looks the file up by name and
//!   already knows its pointer and length. Generated accessors go through a
//!   [`ResourceTable`].
//!
//! Either way the caller receives a [`ResourceView`]: a small `Copy` value with
//! the data pointer, the size, and a [`ResourceError`] outcome. A failed view
//! always has a null pointer and a zero size.
//!
//! ## Usage
//!
//! ```
//! use resource_tools::{ResourceError, validate};
//!
//! // Stand-ins for `&raw const _binary_test_file_txt_start` / `_end`.
//! static BLOB: &[u8] = b"Hello, Resource Tools!";
//! let range = BLOB.as_ptr_range();
//!
//! let view = validate(range.start, range.end);
//! assert!(view.succeeded());
//! assert_eq!(view.size(), 22);
//!
//! // SAFETY: the bounds describe a `'static` slice.
//! let bytes = unsafe { view.as_bytes() }.unwrap();
//! assert_eq!(bytes, b"Hello, Resource Tools!");
//!
//! let inverted = validate(range.end, range.start);
//! assert_eq!(inverted.error(), ResourceError::InvalidSize);
//! assert_eq!(inverted.error_message(), "Invalid resource size (end < start)");
//! ```
//!
//! Failures can be observed without choosing a logging framework: install a
//! callback with [`set_diagnostic_callback`] and use a [`Config`] to report
//! through it. Enable the `log` feature to also route reports to the `log`
//! facade.

pub mod bounds;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod source;
pub mod table;
pub mod view;

#[allow(deprecated)]
pub use bounds::legacy_raw_size;
pub use bounds::{narrow_size, validate};
pub use config::Config;
pub use diagnostics::{DiagnosticCallback, Diagnostics, set_diagnostic_callback};
pub use error::{ResourceError, Result};
pub use source::{LinkerBounds, ResourceSource, TableResource};
pub use table::{ResourceEntry, ResourceTable};
pub use view::ResourceView;
