use pretty_assertions::assert_eq;
use tarn_ir::{BinaryOp, UnaryOp};

use super::harness::Harness;
use crate::{EvalErrorKind, Scope, Value};

fn eval(h: &Harness, expr: &tarn_ir::Expr) -> Result<Value, EvalErrorKind> {
    let mut interp = h.interpreter();
    interp
        .eval_expr(expr, &Scope::global())
        .map_err(|err| err.kind)
}

#[test]
fn logical_operators_short_circuit() {
    let h = Harness::new();
    let b = h.builder();
    let and = b.binary(BinaryOp::And, b.bool(false), b.call("boom", vec![]));
    let or = b.binary(BinaryOp::Or, b.int(1), b.call("boom", vec![]));
    assert_eq!(eval(&h, &and), Ok(Value::Bool(false)));
    assert_eq!(eval(&h, &or), Ok(Value::Bool(true)));
}

#[test]
fn arithmetic_and_comparison() {
    let h = Harness::new();
    let b = h.builder();
    let sum = b.binary(
        BinaryOp::Add,
        b.int(2),
        b.binary(BinaryOp::Mul, b.int(3), b.int(4)),
    );
    assert_eq!(eval(&h, &sum), Ok(Value::Int(14)));
    let cmp = b.binary(BinaryOp::Lt, b.str("apple"), b.str("banana"));
    assert_eq!(eval(&h, &cmp), Ok(Value::Bool(true)));
    let neg = b.unary(UnaryOp::Neg, b.double(2.5));
    assert_eq!(eval(&h, &neg), Ok(Value::Double(-2.5)));
}

#[test]
fn index_reads() {
    let h = Harness::new();
    let b = h.builder();
    let list = b.index(b.list(vec![b.int(10), b.int(20)]), b.int(1));
    assert_eq!(eval(&h, &list), Ok(Value::Int(20)));
    let tuple = b.index(b.tuple(vec![b.str("a"), b.str("b")]), b.int(0));
    assert_eq!(eval(&h, &tuple), Ok(Value::string("a")));
    let chars = b.index(b.str("héllo"), b.int(1));
    assert_eq!(eval(&h, &chars), Ok(Value::string("é")));
    let dict = b.index(b.dict(vec![(b.int(1), b.str("one"))]), b.str("1"));
    assert_eq!(eval(&h, &dict), Ok(Value::string("one")));
}

#[test]
fn index_read_errors() {
    let h = Harness::new();
    let b = h.builder();
    let out_of_range = b.index(b.list(vec![]), b.int(0));
    assert_eq!(
        eval(&h, &out_of_range),
        Err(EvalErrorKind::IndexOutOfBounds { index: 0, len: 0 })
    );
    let missing = b.index(b.dict(vec![]), b.str("k"));
    assert_eq!(
        eval(&h, &missing),
        Err(EvalErrorKind::KeyNotFound {
            key: "k".to_string()
        })
    );
    let scalar = b.index(b.int(3), b.int(0));
    assert_eq!(
        eval(&h, &scalar),
        Err(EvalErrorKind::CannotIndex {
            type_name: "int".to_string()
        })
    );
}

#[test]
fn private_member_reads_need_this() {
    let h = Harness::new();
    let b = h.builder();
    let kind = h.run_err(vec![
        b.class_def(
            "Vault",
            vec![b.function(
                "init",
                &[],
                vec![b.assign(b.attr(b.ident("this"), "_code"), b.int(1234))],
            )],
        ),
        b.assign(b.ident("v"), b.call("Vault", vec![])),
        b.assign(b.ident("stolen"), b.attr(b.ident("v"), "_code")),
    ]);
    assert_eq!(
        kind,
        EvalErrorKind::NoSuchMember {
            owner: "v".to_string(),
            member: "_code".to_string()
        }
    );
}

#[test]
fn collection_literals_copy_value_elements() {
    let h = Harness::new();
    let b = h.builder();
    h.run_ok(vec![
        b.assign(b.ident("s"), b.str("a")),
        b.assign(b.ident("l"), b.list(vec![b.ident("s")])),
        b.assign(b.ident("s"), b.str("b")),
    ]);
    assert_eq!(h.show("l"), "[\"a\"]");
}

#[test]
fn division_by_zero_surfaces() {
    let h = Harness::new();
    let b = h.builder();
    let div = b.binary(BinaryOp::Div, b.int(1), b.int(0));
    assert_eq!(eval(&h, &div), Err(EvalErrorKind::DivisionByZero));
}
