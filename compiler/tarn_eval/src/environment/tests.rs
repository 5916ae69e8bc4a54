use super::*;
use pretty_assertions::assert_eq;
use tarn_ir::StringInterner;

fn names() -> (Name, Name) {
    let interner = StringInterner::new();
    (interner.intern("x"), interner.intern("y"))
}

#[test]
fn lookup_walks_outward() {
    let (x, _) = names();
    let outer = Scope::global();
    outer.borrow_mut().define(x, Value::Int(1));
    let inner = Scope::child(&outer);

    assert_eq!(inner.borrow().lookup(x), Some(Value::Int(1)));
    assert_eq!(inner.borrow().lookup_local(x), None);
}

#[test]
fn define_shadows_outer_binding() {
    let (x, _) = names();
    let outer = Scope::global();
    outer.borrow_mut().define(x, Value::Int(1));
    let inner = Scope::child(&outer);
    inner.borrow_mut().define(x, Value::Int(2));

    assert_eq!(inner.borrow().lookup(x), Some(Value::Int(2)));
    assert_eq!(outer.borrow().lookup(x), Some(Value::Int(1)));
}

#[test]
fn set_updates_nearest_binding() {
    let (x, _) = names();
    let outer = Scope::global();
    outer.borrow_mut().define(x, Value::Int(1));
    let inner = Scope::child(&outer);

    inner.borrow_mut().set(x, Value::Int(5));

    assert!(!inner.borrow().contains_local(x));
    assert_eq!(outer.borrow().lookup(x), Some(Value::Int(5)));
}

#[test]
fn set_defines_locally_when_unbound() {
    let (x, y) = names();
    let outer = Scope::global();
    outer.borrow_mut().define(y, Value::Int(0));
    let inner = Scope::child(&outer);

    inner.borrow_mut().set(x, Value::Bool(true));

    assert!(inner.borrow().contains_local(x));
    assert!(!outer.borrow().is_bound(x));
    assert!(inner.borrow().is_bound(y));
}

#[test]
fn assign_reports_unbound_name() {
    let (x, _) = names();
    let scope = Scope::global();
    let result = scope.borrow_mut().assign(x, Value::Int(3));
    assert_eq!(result, Err(Value::Int(3)));
    assert!(scope.borrow().is_empty());
}

#[test]
fn child_handles_share_parent() {
    let outer = Scope::global();
    let inner = Scope::child(&outer);
    let parent = inner.borrow().parent().cloned();
    assert!(parent.is_some_and(|p| LocalScope::ptr_eq(&p, &outer)));
}
