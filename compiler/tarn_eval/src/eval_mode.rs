//! Evaluation modes.
//!
//! A script run and an interactive session execute statements identically.
//! They differ only in what the host sees: the interactive prompt echoes
//! the value of each top-level expression statement and labels diagnostics
//! with a pseudo file name.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Running a source file.
    #[default]
    Script,
    /// Read-eval-print loop.
    Interactive,
}

impl EvalMode {
    /// Whether top-level expression results are printed.
    #[inline]
    pub fn echoes_results(self) -> bool {
        matches!(self, EvalMode::Interactive)
    }

    /// Label used in diagnostics when the host gives no file name.
    pub fn default_source_label(self) -> &'static str {
        match self {
            EvalMode::Script => "<script>",
            EvalMode::Interactive => "<stdin>",
        }
    }
}
