use pretty_assertions::assert_eq;
use tarn_ir::{AssignOp, BinaryOp};

use super::harness::Harness;
use crate::{ConstructKind, EvalErrorKind, Outcome, Scope};

fn illegal(statement: &'static str, required: &'static str) -> EvalErrorKind {
    EvalErrorKind::IllegalControlFlow {
        statement,
        required,
    }
}

#[test]
fn break_at_top_level_is_illegal() {
    let h = Harness::new();
    let b = h.builder();
    assert_eq!(h.run_err(vec![b.break_()]), illegal("break", "for"));
}

#[test]
fn continue_inside_if_without_loop_is_illegal() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![b.if_(b.bool(true), vec![b.continue_()])]);
    assert_eq!(kind, illegal("continue", "for"));
}

#[test]
fn return_outside_function_is_illegal() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![b.for_(
        None,
        None,
        None,
        vec![b.ret(vec![b.int(1)])],
    )]);
    assert_eq!(kind, illegal("return", "func"));
}

#[test]
fn continue_in_function_body_without_loop_is_illegal() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![
        b.func_def("f", &[], vec![b.continue_()]),
        b.expr_stmt(b.call("f", vec![])),
    ]);
    assert_eq!(kind, illegal("continue", "for"));
}

#[test]
fn signal_skips_remaining_statements() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.assign(b.ident("after"), b.int(0)),
        b.func_def(
            "f",
            &[],
            vec![b.ret(vec![b.int(1)]), b.assign(b.ident("after"), b.int(2))],
        ),
        b.assign(b.ident("r"), b.call("f", vec![])),
    ]);
    assert_eq!(h.show("r"), "1");
    assert_eq!(h.show("after"), "0");
}

#[test]
fn errors_stop_the_block_immediately() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![
        b.assign(b.ident("x"), b.int(1)),
        b.assign(b.ident("y"), b.ident("missing")),
        b.assign(b.ident("z"), b.int(3)),
    ]);
    assert_eq!(
        kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
    assert_eq!(h.show("x"), "1");
    assert_eq!(h.get("z"), None);
}

#[test]
fn nested_block_shares_scope() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![b.block_stmt(vec![b.assign(b.ident("inner"), b.int(4))])]);
    assert_eq!(h.show("inner"), "4");
}

#[test]
fn local_block_returns_first_signal() {
    let h = Harness::new();
    let b = h.builder();
    let mut interp = h.interpreter();
    let body = b.block(vec![
        b.assign(b.ident("a"), b.int(1)),
        b.break_(),
        b.assign(b.ident("a"), b.int(2)),
    ]);
    let scope = Scope::global();
    let outcome = interp.within(ConstructKind::For, |inner| inner.exec_local_block(&body, &scope));
    assert_eq!(outcome, Ok(Outcome::Break));
    assert_eq!(scope.borrow().lookup(b.name("a")).map(|v| v.to_string()), Some("1".into()));
}

#[test]
fn interactive_echoes_expression_results() {
    let h = Harness::interactive();
    let b = h.builder();
    h.run_ok(vec![
        b.expr_stmt(b.binary(BinaryOp::Add, b.int(1), b.int(2))),
        b.expr_stmt(b.str("text")),
    ]);
    assert_eq!(h.output(), "3\ntext\n");
}

#[test]
fn interactive_is_silent_for_statements_and_nil() {
    let h = Harness::interactive();
    let b = h.builder();
    h.run_ok(vec![
        b.assign(b.ident("x"), b.int(5)),
        b.assign_op(b.ident("x"), AssignOp::AddAssign, b.int(1)),
        b.func_def("noop", &[], vec![]),
        b.class_def("C", vec![]),
        b.expr_stmt(b.call("noop", vec![])),
        b.expr_stmt(b.nil()),
        b.if_(b.bool(true), vec![b.expr_stmt(b.int(9))]),
        b.expr_stmt(b.ident("x")),
    ]);
    assert_eq!(h.output(), "6\n");
}

#[test]
fn script_mode_never_echoes() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![b.expr_stmt(b.int(42))]);
    assert_eq!(h.output(), "");
}

#[test]
fn construct_stack_is_empty_after_run() {
    let h = Harness::new();
    let b = h.builder();
    let mut interp = h.interpreter();
    let program = b.block(vec![
        b.func_def(
            "f",
            &[],
            vec![b.for_(None, None, None, vec![b.if_(b.bool(true), vec![b.ret(vec![])])])],
        ),
        b.expr_stmt(b.call("f", vec![])),
    ]);
    assert!(interp.run_program(&program, &h.globals).is_ok());
    assert!(interp.constructs().is_empty());
}

#[test]
fn construct_stack_is_empty_after_error() {
    let h = Harness::new();
    let b = h.builder();
    let mut interp = h.interpreter();
    let program = b.block(vec![b.for_(
        None,
        None,
        None,
        vec![b.if_(b.bool(true), vec![b.expr_stmt(b.ident("nope"))])],
    )]);
    assert!(interp.run_program(&program, &h.globals).is_err());
    assert!(interp.constructs().is_empty());
}

fn continue_twice(h: &Harness) -> Result<(), crate::EvalError> {
    let b = h.builder();
    h.run(vec![
        b.assign(b.ident("n"), b.int(0)),
        b.for_(
            Some(b.assign(b.ident("i"), b.int(0))),
            Some(b.binary(BinaryOp::Lt, b.ident("i"), b.int(3))),
            Some(b.assign_op(b.ident("i"), AssignOp::AddAssign, b.int(1))),
            vec![
                b.assign_op(b.ident("n"), AssignOp::AddAssign, b.int(1)),
                b.if_(b.bool(true), vec![b.continue_()]),
            ],
        ),
    ])
}

#[test]
fn peek_scan_keeps_frames_across_iterations() {
    let h = Harness::new();
    assert!(continue_twice(&h).is_ok());
    assert_eq!(h.show("n"), "3");
}

#[test]
fn drain_scan_loses_the_loop_frame() {
    // The first `continue` drains the `if` frame, and the `if` guard then
    // pops the loop's frame. The second iteration no longer sees a loop.
    let h = Harness::draining();
    let err = continue_twice(&h).err().map(|err| err.kind);
    assert_eq!(err, Some(illegal("continue", "for")));
    assert_eq!(h.show("n"), "2");
}
