//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::interned_names::WellKnownNames;
use super::Interpreter;
use crate::context_stack::{ConstructStack, ScanPolicy};
use crate::eval_mode::EvalMode;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use tarn_ir::StringInterner;

/// Builder for [`Interpreter`].
///
/// Defaults: script mode, stdout output, non-destructive legality scan,
/// and a file label chosen by the mode.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
    source_file_path: Option<String>,
    scan_policy: ScanPolicy,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            mode: EvalMode::default(),
            print_handler: None,
            source_file_path: None,
            scan_policy: ScanPolicy::default(),
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Where `print` and interactive echo write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// File name used when rendering diagnostics.
    #[must_use]
    pub fn source_file_path(mut self, path: impl Into<String>) -> Self {
        self.source_file_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        if self.scan_policy == ScanPolicy::Drain {
            tracing::warn!("construct scan drains frames; break/continue/return checks may misfire");
        }
        Interpreter {
            interner: self.interner,
            mode: self.mode,
            constructs: ConstructStack::new(self.scan_policy),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            source_file_path: self
                .source_file_path
                .unwrap_or_else(|| self.mode.default_source_label().to_string()),
            names: WellKnownNames::new(self.interner),
        }
    }
}
