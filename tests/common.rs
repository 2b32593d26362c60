#![allow(dead_code)]

use scriptck::analysis::{self, SymbolTable};
use scriptck::ast::ty::BuiltinTy;
use scriptck::ast::{
    Assignment, BinOpExpr, BinOpKind, BoolLit, Decl, Expr, If, IntLit, Name, ParenExpr, Print,
    Program, Stmt, StringLit, Term,
};
use scriptck::errors::Diagnostic;
use scriptck::position::{Span, Spanned};

/// Builds tree nodes attributed to a single source line.
#[derive(Debug, Clone, Copy)]
pub struct Line(pub usize);

impl Line {
    fn span(self) -> Span {
        Span::line(self.0)
    }

    fn spanned<T>(self, value: T) -> Spanned<T> {
        Spanned {
            value,
            span: self.span(),
        }
    }

    pub fn name(self, name: &str) -> Name {
        Name(self.spanned(name.to_owned()))
    }

    pub fn ident(self, name: &str) -> Expr {
        Expr::Term(Term::Name(self.name(name)))
    }

    pub fn int(self, value: i64) -> Expr {
        Expr::Term(Term::Int(IntLit(self.spanned(value))))
    }

    pub fn string(self, value: &str) -> Expr {
        Expr::Term(Term::String(StringLit(self.spanned(value.to_owned()))))
    }

    pub fn boolean(self, value: bool) -> Expr {
        Expr::Term(Term::Bool(BoolLit(self.spanned(value))))
    }

    pub fn chain(self, lhs: Expr, ops: &[&str], rhs: Expr) -> Expr {
        Expr::BinOp(BinOpExpr {
            lhs: Box::new(lhs),
            ops: ops
                .iter()
                .map(|&op| self.spanned(BinOpKind::try_from(op).expect("a known operator")))
                .collect(),
            rhs: Box::new(rhs),
            span: self.span(),
        })
    }

    pub fn bin(self, lhs: Expr, op: &str, rhs: Expr) -> Expr {
        self.chain(lhs, &[op], rhs)
    }

    pub fn paren(self, expr: Expr) -> Expr {
        Expr::Paren(ParenExpr {
            expr: Box::new(expr),
            span: self.span(),
        })
    }

    pub fn assignment(self, name: &str, expr: Expr) -> Assignment {
        Assignment {
            name: self.name(name),
            expr: Box::new(expr),
            span: self.span(),
        }
    }

    pub fn assign(self, name: &str, expr: Expr) -> Stmt {
        Stmt::Assignment(self.assignment(name, expr))
    }

    pub fn decl(self, ty: BuiltinTy, name: &str) -> Stmt {
        Stmt::Decl(Decl {
            name: self.name(name),
            ty: self.spanned(ty),
            init: None,
            span: self.span(),
        })
    }

    pub fn decl_init(self, ty: BuiltinTy, name: &str, expr: Expr) -> Stmt {
        Stmt::Decl(Decl {
            name: self.name(name),
            ty: self.spanned(ty),
            init: Some(self.assignment(name, expr)),
            span: self.span(),
        })
    }

    pub fn if_(self, condition: Expr, body: Vec<Stmt>) -> Stmt {
        Stmt::If(If {
            condition: Box::new(condition),
            body,
            span: self.span(),
        })
    }

    pub fn print(self, expr: Expr) -> Stmt {
        Stmt::Print(Print {
            expr: Box::new(expr),
            span: self.span(),
        })
    }
}

pub fn program(stmts: Vec<Stmt>) -> Program {
    Program {
        stmts,
        span: Span::default(),
    }
}

/// Checks a tree that is expected to be well-formed.
pub fn run(program: &Program) -> (SymbolTable, Vec<Diagnostic>) {
    analysis::check(program).expect("the tree is well-formed")
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect()
}

pub fn bindings(symbols: &SymbolTable) -> Vec<(&str, BuiltinTy)> {
    symbols.iter().collect()
}
