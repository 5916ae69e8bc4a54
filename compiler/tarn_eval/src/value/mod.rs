//! Runtime values.
//!
//! Integers, doubles, booleans and strings are value types: binding one
//! stores an independent copy. Tuples, lists, dicts, instances, classes and
//! functions are reference types: binding one shares the underlying storage,
//! so a mutation through any alias is visible through all of them.
//!
//! Tuples are shared but never mutated. Lists and dicts live behind a
//! [`Heap`] handle.

mod heap;

pub use heap::Heap;

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tarn_ir::{ClassDef, FunctionDef, Name};

use crate::environment::{LocalScope, Scope};

/// Dict storage, keyed by the formatted form of the original key.
pub type DictMap = BTreeMap<String, DictEntry>;

/// A dict slot. The original key is kept so iteration yields it unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct DictEntry {
    pub key: Value,
    pub value: Value,
}

/// A user function together with the scope it was defined in.
pub struct FunctionValue {
    pub name: &'static str,
    pub def: Arc<FunctionDef>,
    pub captured: LocalScope<Scope>,
}

/// A class together with the scope its methods close over.
pub struct ClassValue {
    pub name: &'static str,
    pub def: Arc<ClassDef>,
    pub captured: LocalScope<Scope>,
}

impl ClassValue {
    /// Method `name` bound to the class's defining scope. `label` is the
    /// method's display name.
    pub fn method(&self, name: Name, label: &'static str) -> Option<FunctionValue> {
        self.def.method(name).map(|def| FunctionValue {
            name: label,
            def: Arc::clone(def),
            captured: self.captured.clone(),
        })
    }
}

/// An object created by calling a class.
pub struct InstanceValue {
    pub class: Rc<ClassValue>,
    pub members: LocalScope<Scope>,
}

impl InstanceValue {
    pub fn member(&self, name: Name) -> Option<Value> {
        self.members.borrow().lookup_local(name)
    }
}

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Tuple(Rc<[Value]>),
    List(Heap<Vec<Value>>),
    Dict(Heap<DictMap>),
    /// The absence of a value. Formats as `nil`.
    Empty,
    Instance(Rc<InstanceValue>),
    Class(Rc<ClassValue>),
    Function(Rc<FunctionValue>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Rc::from(items))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Build a dict from key/value pairs. A later pair replaces an earlier
    /// one whose key formats identically.
    pub fn dict(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let map: DictMap = pairs
            .into_iter()
            .map(|(key, value)| (key.dict_key(), DictEntry { key, value }))
            .collect();
        Value::Dict(Heap::new(map))
    }

    pub fn function(
        name: &'static str,
        def: Arc<FunctionDef>,
        captured: LocalScope<Scope>,
    ) -> Self {
        Value::Function(Rc::new(FunctionValue {
            name,
            def,
            captured,
        }))
    }

    pub fn class(name: &'static str, def: Arc<ClassDef>, captured: LocalScope<Scope>) -> Self {
        Value::Class(Rc::new(ClassValue {
            name,
            def,
            captured,
        }))
    }

    pub fn instance(class: Rc<ClassValue>) -> Self {
        Value::Instance(Rc::new(InstanceValue {
            class,
            members: Scope::global(),
        }))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Empty => "nil",
            Value::Instance(_) => "instance",
            Value::Class(_) => "class",
            Value::Function(_) => "function",
        }
    }

    /// Whether binding this value stores an independent copy.
    pub fn is_value_type(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Double(_) | Value::Bool(_) | Value::Str(_)
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// The value to store when this value is bound to a name or slot.
    pub fn for_binding(&self) -> Value {
        match self {
            Value::Int(n) => Value::Int(*n),
            Value::Double(d) => Value::Double(*d),
            Value::Bool(b) => Value::Bool(*b),
            Value::Str(s) => Value::Str(s.clone()),
            // Reference types hand out another handle to the same storage.
            other => other.clone(),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::Tuple(items) => !items.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Dict(map) => !map.borrow().is_empty(),
            Value::Empty => false,
            Value::Instance(_) | Value::Class(_) | Value::Function(_) => true,
        }
    }

    /// Key under which this value is stored in a dict.
    ///
    /// Distinct keys that format identically (`1` and `"1"`) share a slot.
    pub fn dict_key(&self) -> String {
        self.to_string()
    }

    /// Parallel key and value sequences for `foreach`, or `None` if this
    /// value cannot be iterated.
    ///
    /// Sequences yield `(index, element)`, strings yield
    /// `(index, one-character string)`, and dicts yield `(key, value)` in
    /// key order.
    pub fn iteration_pairs(&self) -> Option<(Vec<Value>, Vec<Value>)> {
        fn indexed(items: &[Value]) -> (Vec<Value>, Vec<Value>) {
            let keys = (0..items.len()).map(index_value).collect();
            (keys, items.to_vec())
        }

        match self {
            Value::Tuple(items) => Some(indexed(items)),
            Value::List(items) => Some(indexed(&items.borrow())),
            Value::Str(s) => {
                let values: Vec<Value> = s.chars().map(|c| Value::Str(c.to_string())).collect();
                let keys = (0..values.len()).map(index_value).collect();
                Some((keys, values))
            }
            Value::Dict(map) => Some(
                map.borrow()
                    .values()
                    .map(|entry| (entry.key.clone(), entry.value.clone()))
                    .unzip(),
            ),
            _ => None,
        }
    }

    /// Whether two values are the same storage (reference types) or equal
    /// (value types).
    pub fn same_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Tuple(a), Value::Tuple(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Dict(a), Value::Dict(b)) => Heap::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn index_value(index: usize) -> Value {
    Value::Int(i64::try_from(index).unwrap_or(i64::MAX))
}

/// Structural equality for value types and collections, identity for
/// instances, classes and functions.
///
/// Two distinct lists that each contain themselves never finish comparing;
/// a list compared with itself short-circuits on identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Heap::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Dict(a), Value::Dict(b)) => {
                Heap::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Empty, Value::Empty) => true,
            _ => self.same_storage(other),
        }
    }
}

/// Lists and dicts whose contents are being written. A container met again
/// inside itself is written as `[...]` or `{...}`.
type Active = Vec<*const ()>;

/// Write `value`. Nested strings are quoted.
fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    nested: bool,
    active: &mut Active,
) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Double(d) => write!(f, "{d}"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Str(s) if nested => write!(f, "{s:?}"),
        Value::Str(s) => f.write_str(s),
        Value::Tuple(items) if items.len() == 1 => write_seq(f, "(", items, ",)", active),
        Value::Tuple(items) => write_seq(f, "(", items, ")", active),
        Value::List(items) => {
            let addr = items.addr();
            if active.contains(&addr) {
                return f.write_str("[...]");
            }
            active.push(addr);
            let result = write_seq(f, "[", &items.borrow(), "]", active);
            active.pop();
            result
        }
        Value::Dict(map) => {
            let addr = map.addr();
            if active.contains(&addr) {
                return f.write_str("{...}");
            }
            active.push(addr);
            let result = write_entries(f, &map.borrow(), active);
            active.pop();
            result
        }
        Value::Empty => f.write_str("nil"),
        Value::Instance(instance) => write!(f, "<{} object>", instance.class.name),
        Value::Class(class) => write!(f, "<class {}>", class.name),
        Value::Function(func) => write!(f, "<function {}>", func.name),
    }
}

fn write_seq(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[Value],
    close: &str,
    active: &mut Active,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_value(f, item, true, active)?;
    }
    f.write_str(close)
}

fn write_entries(f: &mut fmt::Formatter<'_>, map: &DictMap, active: &mut Active) -> fmt::Result {
    f.write_str("{")?;
    for (i, entry) in map.values().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_value(f, &entry.key, true, active)?;
        f.write_str(": ")?;
        write_value(f, &entry.value, true, active)?;
    }
    f.write_str("}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, false, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Empty => f.write_str("Empty"),
            Value::Instance(_) | Value::Class(_) | Value::Function(_) => {
                write!(f, "{}", self)
            }
            other => write!(f, "{}({other})", other.type_name()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
