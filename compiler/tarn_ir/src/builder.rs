//! Programmatic construction of syntax trees.
//!
//! Parsers and tests build trees through `AstBuilder` so that names are
//! interned consistently. Nodes get `Span::DUMMY`; use `Expr::at` /
//! `Stmt::at` to attach real positions.

use std::sync::Arc;

use crate::ast::{
    AssignOp, BinaryOp, Block, ClassDef, Expr, ExprKind, FunctionDef, IfBranch, IfStmt, Stmt,
    StmtKind, UnaryOp,
};
use crate::{Name, Span, StringInterner};

pub struct AstBuilder<'i> {
    interner: &'i StringInterner,
}

impl<'i> AstBuilder<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        AstBuilder { interner }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn expr(kind: ExprKind) -> Expr {
        Expr::new(kind, Span::DUMMY)
    }

    fn stmt(kind: StmtKind) -> Stmt {
        Stmt::new(kind, Span::DUMMY)
    }

    // Expressions

    pub fn int(&self, n: i64) -> Expr {
        Self::expr(ExprKind::Int(n))
    }

    pub fn double(&self, d: f64) -> Expr {
        Self::expr(ExprKind::Double(d))
    }

    pub fn bool(&self, b: bool) -> Expr {
        Self::expr(ExprKind::Bool(b))
    }

    pub fn str(&self, s: &str) -> Expr {
        Self::expr(ExprKind::Str(self.name(s)))
    }

    pub fn nil(&self) -> Expr {
        Self::expr(ExprKind::Nil)
    }

    pub fn ident(&self, name: &str) -> Expr {
        Self::expr(ExprKind::Ident(self.name(name)))
    }

    pub fn tuple(&self, items: Vec<Expr>) -> Expr {
        Self::expr(ExprKind::Tuple(items))
    }

    pub fn list(&self, items: Vec<Expr>) -> Expr {
        Self::expr(ExprKind::List(items))
    }

    pub fn dict(&self, entries: Vec<(Expr, Expr)>) -> Expr {
        Self::expr(ExprKind::Dict(entries))
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr) -> Expr {
        Self::expr(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Self::expr(ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn index(&self, collection: Expr, index: Expr) -> Expr {
        Self::expr(ExprKind::Index {
            collection: Box::new(collection),
            index: Box::new(index),
        })
    }

    pub fn attr(&self, object: Expr, member: &str) -> Expr {
        Self::expr(ExprKind::Attribute {
            object: Box::new(object),
            member: self.name(member),
        })
    }

    pub fn call(&self, func: &str, args: Vec<Expr>) -> Expr {
        Self::expr(ExprKind::Call {
            func: self.name(func),
            args,
        })
    }

    pub fn method_call(&self, receiver: Expr, method: &str, args: Vec<Expr>) -> Expr {
        Self::expr(ExprKind::MethodCall {
            receiver: Box::new(receiver),
            method: self.name(method),
            args,
        })
    }

    // Statements

    pub fn expr_stmt(&self, expr: Expr) -> Stmt {
        Self::stmt(StmtKind::Expr(expr))
    }

    pub fn assign(&self, target: Expr, source: Expr) -> Stmt {
        self.assign_op(target, AssignOp::Assign, source)
    }

    pub fn assign_op(&self, target: Expr, op: AssignOp, source: Expr) -> Stmt {
        Self::stmt(StmtKind::Assign { target, op, source })
    }

    pub fn block(&self, stmts: Vec<Stmt>) -> Block {
        Block::new(stmts, Span::DUMMY)
    }

    pub fn block_stmt(&self, stmts: Vec<Stmt>) -> Stmt {
        Self::stmt(StmtKind::Block(self.block(stmts)))
    }

    pub fn branch(&self, cond: Expr, body: Vec<Stmt>) -> IfBranch {
        IfBranch {
            init: None,
            cond,
            body: self.block(body),
        }
    }

    pub fn branch_with_init(&self, init: Stmt, cond: Expr, body: Vec<Stmt>) -> IfBranch {
        IfBranch {
            init: Some(Box::new(init)),
            cond,
            body: self.block(body),
        }
    }

    /// `else` arm: an elif whose condition is always true.
    pub fn else_branch(&self, body: Vec<Stmt>) -> IfBranch {
        self.branch(self.bool(true), body)
    }

    pub fn if_chain(&self, first: IfBranch, elifs: Vec<IfBranch>) -> Stmt {
        Self::stmt(StmtKind::If(IfStmt { first, elifs }))
    }

    pub fn if_(&self, cond: Expr, body: Vec<Stmt>) -> Stmt {
        self.if_chain(self.branch(cond, body), Vec::new())
    }

    pub fn for_(
        &self,
        init: Option<Stmt>,
        cond: Option<Expr>,
        post: Option<Stmt>,
        body: Vec<Stmt>,
    ) -> Stmt {
        Self::stmt(StmtKind::For {
            init: init.map(Box::new),
            cond,
            post: post.map(Box::new),
            body: self.block(body),
        })
    }

    pub fn foreach(&self, first: &str, second: &str, iterable: Expr, body: Vec<Stmt>) -> Stmt {
        Self::stmt(StmtKind::Foreach {
            first: self.name(first),
            second: self.name(second),
            iterable,
            body: self.block(body),
        })
    }

    pub fn break_(&self) -> Stmt {
        Self::stmt(StmtKind::Break)
    }

    pub fn continue_(&self) -> Stmt {
        Self::stmt(StmtKind::Continue)
    }

    pub fn ret(&self, results: Vec<Expr>) -> Stmt {
        Self::stmt(StmtKind::Return(results))
    }

    pub fn function(&self, name: &str, params: &[&str], body: Vec<Stmt>) -> FunctionDef {
        FunctionDef {
            name: self.name(name),
            params: params.iter().map(|p| self.name(p)).collect(),
            body: self.block(body),
            span: Span::DUMMY,
        }
    }

    pub fn func_def(&self, name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
        Self::stmt(StmtKind::FuncDef(Arc::new(self.function(name, params, body))))
    }

    pub fn class_def(&self, name: &str, methods: Vec<FunctionDef>) -> Stmt {
        Self::stmt(StmtKind::ClassDef(Arc::new(ClassDef {
            name: self.name(name),
            methods: methods.into_iter().map(Arc::new).collect(),
            span: Span::DUMMY,
        })))
    }
}
