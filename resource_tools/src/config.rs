//! Accessor configuration: where failures are reported.
use crate::{
    Diagnostics, ResourceError, ResourceSource, ResourceTable, ResourceView, Result, diagnostics,
    validate,
};

/// A builder for resource accessors that report failures.
///
/// Every method returns exactly what the matching free function returns;
/// the only addition is that a failure is also described to a
/// [`Diagnostics`] sink. By default that is the process-wide context.
/// Inject a local sink with [`Config::diagnostics`] for deterministic
/// behaviour in tests or libraries.
///
/// # Example
/// ```
/// use resource_tools::{Config, Diagnostics, ResourceError};
///
/// static SINK: Diagnostics = Diagnostics::new();
///
/// let view = Config::new()
///     .diagnostics(&SINK)
///     .validate(std::ptr::null(), std::ptr::null());
/// assert_eq!(view.error(), ResourceError::NullPointer);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Config<'d> {
    diagnostics: &'d Diagnostics,
    report_failures: bool,
}

impl Config<'static> {
    /// A configuration that reports to [`diagnostics::global`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: diagnostics::global(),
            report_failures: true,
        }
    }
}

impl Default for Config<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Config<'d> {
    /// Reports to `sink` instead of the process-wide context.
    #[must_use]
    pub const fn diagnostics<'e>(self, sink: &'e Diagnostics) -> Config<'e> {
        Config {
            diagnostics: sink,
            report_failures: self.report_failures,
        }
    }

    /// Enables or disables failure reporting. Enabled by default.
    #[must_use]
    pub const fn report_failures(mut self, enabled: bool) -> Self {
        self.report_failures = enabled;
        self
    }

    /// [`validate`] with reporting.
    #[must_use]
    pub fn validate(&self, start: *const u8, end: *const u8) -> ResourceView {
        let view = validate(start, end);
        self.check("resource bounds", view)
    }

    /// [`ResourceTable::lookup`] with reporting.
    #[must_use]
    pub fn lookup(&self, table: &ResourceTable, name: &str) -> ResourceView {
        let view = table.lookup(name);
        self.check(name, view)
    }

    /// [`ResourceSource::resolve`] with reporting.
    #[must_use]
    pub fn resolve<S: ResourceSource + ?Sized>(&self, source: &S) -> ResourceView {
        let view = source.resolve();
        self.check(source.describe(), view)
    }

    /// [`ResourceView::size_u32`] with reporting.
    ///
    /// Only an overflow is reported here; a view that had already failed was
    /// reported when it was produced.
    ///
    /// # Errors
    /// Same as [`ResourceView::size_u32`].
    pub fn narrow(&self, view: &ResourceView) -> Result<u32> {
        view.size_u32().inspect_err(|err| {
            if self.report_failures && *err == ResourceError::IntegerOverflow {
                self.diagnostics
                    .report(&format!("resource size: {}", err.as_str()));
            }
        })
    }

    fn check(&self, context: &str, view: ResourceView) -> ResourceView {
        if self.report_failures && !view.succeeded() {
            self.diagnostics
                .report(&format!("{context}: {}", view.error_message()));
        }
        view
    }
}
