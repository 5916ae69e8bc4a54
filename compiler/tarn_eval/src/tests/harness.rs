//! Shared setup for executor tests.

use tarn_ir::{AstBuilder, Block, Span, Stmt, StringInterner};

use crate::{
    buffer_handler, EvalError, EvalErrorKind, EvalMode, Interpreter, InterpreterBuilder,
    LocalScope, ScanPolicy, Scope, SharedPrintHandler, Value,
};

/// A global scope, an interner and a captured print sink.
pub(crate) struct Harness {
    pub(crate) interner: StringInterner,
    pub(crate) output: SharedPrintHandler,
    pub(crate) globals: LocalScope<Scope>,
    mode: EvalMode,
    policy: ScanPolicy,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Harness {
            interner: StringInterner::new(),
            output: buffer_handler(),
            globals: Scope::global(),
            mode: EvalMode::Script,
            policy: ScanPolicy::Peek,
        }
    }

    pub(crate) fn interactive() -> Self {
        Harness {
            mode: EvalMode::Interactive,
            ..Harness::new()
        }
    }

    pub(crate) fn draining() -> Self {
        Harness {
            policy: ScanPolicy::Drain,
            ..Harness::new()
        }
    }

    pub(crate) fn builder(&self) -> AstBuilder<'_> {
        AstBuilder::new(&self.interner)
    }

    pub(crate) fn interpreter(&self) -> Interpreter<'_> {
        InterpreterBuilder::new(&self.interner)
            .mode(self.mode)
            .scan_policy(self.policy)
            .print_handler(self.output.clone())
            .build()
    }

    /// Run `stmts` as a program against the harness globals.
    pub(crate) fn run(&self, stmts: Vec<Stmt>) -> Result<(), EvalError> {
        let program = Block::new(stmts, Span::DUMMY);
        self.interpreter().run_program(&program, &self.globals)
    }

    /// Run and fail the test on error.
    pub(crate) fn run_ok(&self, stmts: Vec<Stmt>) {
        if let Err(err) = self.run(stmts) {
            panic!("program failed: {err}");
        }
    }

    /// Run and return the error kind, failing the test on success.
    pub(crate) fn run_err(&self, stmts: Vec<Stmt>) -> EvalErrorKind {
        match self.run(stmts) {
            Ok(()) => panic!("program succeeded unexpectedly"),
            Err(err) => err.kind,
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<Value> {
        self.globals.borrow().lookup(self.interner.intern(name))
    }

    /// Global `name` formatted, or `<unbound>`.
    pub(crate) fn show(&self, name: &str) -> String {
        self.get(name)
            .map_or_else(|| "<unbound>".to_string(), |value| value.to_string())
    }

    pub(crate) fn output(&self) -> String {
        self.output.get_output()
    }
}
