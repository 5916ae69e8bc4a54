use pretty_assertions::assert_eq;
use tarn_ir::BinaryOp;

use super::harness::Harness;
use crate::{ConstructKind, EvalErrorKind, Outcome, Scope, Value};

#[test]
fn bare_return_yields_empty() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.func_def("f", &[], vec![b.ret(vec![])]),
        b.assign(b.ident("r"), b.call("f", vec![])),
    ]);
    assert_eq!(h.get("r"), Some(Value::Empty));
}

#[test]
fn single_result_is_not_wrapped() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.func_def("f", &[], vec![b.ret(vec![b.list(vec![b.int(1)])])]),
        b.assign(b.ident("r"), b.call("f", vec![])),
    ]);
    assert_eq!(h.show("r"), "[1]");
}

#[test]
fn several_results_form_a_tuple_in_order() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.func_def(
            "f",
            &[],
            vec![b.ret(vec![b.int(1), b.str("two"), b.double(3.5)])],
        ),
        b.assign(b.ident("r"), b.call("f", vec![])),
    ]);
    let r = h.get("r");
    assert!(matches!(&r, Some(Value::Tuple(items)) if items.len() == 3));
    assert_eq!(h.show("r"), "(1, \"two\", 3.5)");
}

#[test]
fn falling_off_the_end_yields_empty() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.func_def("f", &[], vec![b.assign(b.ident("x"), b.int(1))]),
        b.assign(b.ident("r"), b.call("f", vec![])),
    ]);
    assert_eq!(h.show("r"), "nil");
}

#[test]
fn return_evaluation_stops_at_first_error() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![
        b.assign(b.ident("count"), b.int(0)),
        b.func_def(
            "tick",
            &[],
            vec![
                b.assign(
                    b.ident("count"),
                    b.binary(BinaryOp::Add, b.ident("count"), b.int(1)),
                ),
                b.ret(vec![b.ident("count")]),
            ],
        ),
        b.func_def(
            "f",
            &[],
            vec![b.ret(vec![
                b.call("tick", vec![]),
                b.ident("nope"),
                b.call("tick", vec![]),
            ])],
        ),
        b.expr_stmt(b.call("f", vec![])),
    ]);
    assert!(matches!(kind, EvalErrorKind::UndefinedVariable { .. }));
    assert_eq!(h.show("count"), "1");
}

#[test]
fn return_statement_produces_return_signal() {
    let h = Harness::new();
    let b = h.builder();
    let mut interp = h.interpreter();
    let scope = Scope::global();
    let stmt = b.ret(vec![b.int(1), b.int(2)]);
    let outcome = interp.within(ConstructKind::Func, |inner| inner.exec_stmt(&stmt, &scope));
    assert_eq!(
        outcome,
        Ok(Outcome::Return(Value::tuple(vec![Value::Int(1), Value::Int(2)])))
    );
}
