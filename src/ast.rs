//! The program tree handed over by the front end.
//!
//! The tree is read-only for the checker. Every node carries a span; diagnostics use the
//! line its span starts on.

pub mod ty;

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::position::{HasSpan, Span, Spanned};

use self::ty::BuiltinTy;

macro_rules! impl_has_span {
    ($type:ty) => {
        impl HasSpan for $type {
            fn span(&self) -> Cow<'_, Span> {
                Cow::Borrowed(&self.span)
            }
        }
    };

    (|&$s:ident: $type:ty| $body:expr) => {
        impl HasSpan for $type {
            fn span(&$s) -> Cow<'_, Span> {
                Cow::Borrowed($body)
            }
        }
    };

    (&$s:ident: $type:ty => $body:expr) => {
        impl HasSpan for $type {
            fn span(&$s) -> Cow<'_, Span> {
                $body
            }
        }
    };
}

macro_rules! define_op_kind {
    ($name:ident { $( $op:ident => $symbol:literal, )+ }) => {
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
        pub enum $name {
            $( $op, )+
        }

        impl $name {
            pub fn symbol(self) -> &'static str {
                match self {
                    $( Self::$op => $symbol, )+
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ();

            fn try_from(symbol: &str) -> Result<Self, Self::Error> {
                match symbol {
                    $( $symbol => Ok(Self::$op), )+
                    _ => Err(()),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(Program);

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
pub struct Name(pub Spanned<String>);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0.value
    }
}

impl_has_span!(|&self: Name| &self.0.span);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Name")
            .field("span", &self.0.span)
            .field("value", &self.0.value)
            .finish()
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub enum Stmt {
    Decl(Decl),
    Assignment(Assignment),
    If(If),
    Print(Print),
}

impl_has_span!(&self: Stmt => match self {
    Self::Decl(stmt) => stmt.span(),
    Self::Assignment(stmt) => stmt.span(),
    Self::If(stmt) => stmt.span(),
    Self::Print(stmt) => stmt.span(),
});

/// `int a;` or `int a = <expr>;`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub name: Name,
    pub ty: Spanned<BuiltinTy>,
    /// The initializing assignment. Its target must be `name`.
    #[serde(default)]
    pub init: Option<Assignment>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(Decl);

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    pub name: Name,
    pub expr: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(Assignment);

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.expr)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct If {
    pub condition: Box<Expr>,
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(If);

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Print {
    pub expr: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(Print);

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Term(Term),
    BinOp(BinOpExpr),
    Paren(ParenExpr),
}

impl_has_span!(&self: Expr => match self {
    Self::Term(expr) => expr.span(),
    Self::BinOp(expr) => expr.span(),
    Self::Paren(expr) => expr.span(),
});

/// Renders the expression the way its tokens read in the source, without whitespace.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => term.fmt(f),
            Self::BinOp(expr) => expr.fmt(f),
            Self::Paren(expr) => expr.fmt(f),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Name(Name),
    Int(IntLit),
    String(StringLit),
    Bool(BoolLit),
}

impl_has_span!(&self: Term => match self {
    Self::Name(name) => name.span(),
    Self::Int(lit) => lit.span(),
    Self::String(lit) => lit.span(),
    Self::Bool(lit) => lit.span(),
});

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => name.fmt(f),
            Self::Int(IntLit(lit)) => write!(f, "{}", lit.value),
            Self::String(StringLit(lit)) => {
                f.write_char('"')?;

                for c in lit.value.chars() {
                    match c {
                        '"' | '\\' => write!(f, "\\{}", c)?,
                        _ => f.write_char(c)?,
                    }
                }

                f.write_char('"')
            }

            Self::Bool(BoolLit(lit)) => write!(f, "{}", lit.value),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct BinOpExpr {
    pub lhs: Box<Expr>,
    /// The operator tokens found between the operands.
    ///
    /// A well-formed node has exactly one.
    pub ops: Vec<Spanned<BinOpKind>>,
    pub rhs: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

impl BinOpExpr {
    /// Returns the operator if the node has exactly one.
    pub fn single_op(&self) -> Option<BinOpKind> {
        match self.ops.as_slice() {
            [op] => Some(op.value),
            _ => None,
        }
    }
}

impl_has_span!(BinOpExpr);

impl Display for BinOpExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.lhs,
            self.ops.iter().map(|op| op.value.symbol()).join(""),
            self.rhs
        )
    }
}

define_op_kind!(BinOpKind {
    Add => "+",
    Subtract => "-",
    Multiply => "*",
    Divide => "/",
    Equals => "==",
    NotEquals => "!=",
    LessThan => "<",
    GreaterThan => ">",
    LessEquals => "<=",
    GreaterEquals => ">=",
});

impl BinOpKind {
    pub fn is_comparison(self) -> bool {
        use BinOpKind::*;

        matches!(
            self,
            Equals | NotEquals | LessThan | GreaterThan | LessEquals | GreaterEquals
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ParenExpr {
    pub expr: Box<Expr>,
    #[serde(default)]
    pub span: Span,
}

impl_has_span!(ParenExpr);

impl Display for ParenExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct IntLit(pub Spanned<i64>);

impl_has_span!(|&self: IntLit| &self.0.span);

/// A string literal with the surrounding quotes stripped.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct StringLit(pub Spanned<String>);

impl_has_span!(|&self: StringLit| &self.0.span);

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct BoolLit(pub Spanned<bool>);

impl_has_span!(|&self: BoolLit| &self.0.span);
