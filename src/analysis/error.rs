use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Deref;

use crate::ast::ty::{BuiltinTy, ResolvedTy};
use crate::ast::Name;
use crate::position::{HasSpan, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchedOperands {
    pub span: Span,
    pub lhs_ty: BuiltinTy,
    pub rhs_ty: BuiltinTy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchedAssignment {
    pub span: Span,
    pub name: Name,
    pub expected_ty: BuiltinTy,
    /// The token text of the assigned expression.
    pub expr_text: String,
    pub actual_ty: BuiltinTy,
}

/// A recoverable typing error.
///
/// Each one is reported as a diagnostic and the checker carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeckError {
    UnrecognizedName(Box<Name>),

    MismatchedOperands(Box<MismatchedOperands>),

    MismatchedAssignment(Box<MismatchedAssignment>),

    ConditionNotBool { span: Span, ty: ResolvedTy },
}

impl Display for TypeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.span().start_line();

        match self {
            Self::UnrecognizedName(name) => {
                write!(f, "Unknown identifier: {} at line {}", name, line)
            }

            Self::MismatchedOperands(err) => {
                let MismatchedOperands { lhs_ty, rhs_ty, .. } = err.deref();

                write!(f, "Type mismatch: {} and {} at line {}", lhs_ty, rhs_ty, line)
            }

            Self::MismatchedAssignment(err) => {
                let MismatchedAssignment {
                    name,
                    expected_ty,
                    expr_text,
                    actual_ty,
                    ..
                } = err.deref();

                write!(
                    f,
                    "Type mismatch in {} ({}) = {} ({}) at line {}",
                    name, expected_ty, expr_text, actual_ty, line,
                )
            }

            Self::ConditionNotBool { ty, .. } => {
                write!(f, "Condition must be bool, found {} at line {}", ty, line)
            }
        }
    }
}

impl Error for TypeckError {}

impl HasSpan for TypeckError {
    fn span(&self) -> Cow<'_, Span> {
        match self {
            Self::UnrecognizedName(name) => name.span(),
            Self::MismatchedOperands(err) => Cow::Borrowed(&err.span),
            Self::MismatchedAssignment(err) => Cow::Borrowed(&err.span),
            Self::ConditionNotBool { span, .. } => Cow::Borrowed(span),
        }
    }
}

/// The tree contains a node the checker has no typing rule for.
///
/// This is a bug in whatever produced the tree, so the pass is aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralViolation {
    /// A binary expression with other than one operator between its operands.
    OperatorChain { span: Span, op_count: usize },

    /// A declaration whose initializer assigns to a different variable.
    InitializerTargetMismatch { decl_name: Box<Name>, init_name: Box<Name> },
}

impl Display for StructuralViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperatorChain { span, op_count } => write!(
                f,
                "malformed tree: binary expression at line {} has {} operators, expected exactly 1",
                span.start_line(),
                op_count,
            ),

            Self::InitializerTargetMismatch {
                decl_name,
                init_name,
            } => write!(
                f,
                "malformed tree: declaration of `{}` at line {} is initialized by an assignment to `{}`",
                decl_name,
                decl_name.span().start_line(),
                init_name,
            ),
        }
    }
}

impl Error for StructuralViolation {}

impl HasSpan for StructuralViolation {
    fn span(&self) -> Cow<'_, Span> {
        match self {
            Self::OperatorChain { span, .. } => Cow::Borrowed(span),
            Self::InitializerTargetMismatch { init_name, .. } => init_name.span(),
        }
    }
}
