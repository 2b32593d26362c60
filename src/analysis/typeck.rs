use tracing::{debug, instrument, trace};

use crate::analysis::error::{
    MismatchedAssignment, MismatchedOperands, StructuralViolation, TypeckError,
};
use crate::analysis::typectx::{Binding, BindingKind, SymbolTable};
use crate::ast::ty::{BuiltinTy, ResolvedTy};
use crate::ast::{self, Expr, Name, Program, Stmt, Term};
use crate::errors::Diagnostics;
use crate::position::HasSpan;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeckOptions {
    /// Report `if` conditions whose type is known and is not `bool`.
    pub require_bool_conditions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeckResult {
    pub symbols: SymbolTable,
}

/// Infers and checks the types of a single program.
///
/// Typing errors are emitted into `diagnostics` and do not stop the pass.
pub struct TypeChecker<'dia, 'emt> {
    diagnostics: &'dia mut Diagnostics<'emt>,
    options: TypeckOptions,
    symbols: SymbolTable,
}

impl<'dia, 'emt> TypeChecker<'dia, 'emt> {
    pub fn new(diagnostics: &'dia mut Diagnostics<'emt>) -> Self {
        Self::with_options(diagnostics, Default::default())
    }

    pub fn with_options(diagnostics: &'dia mut Diagnostics<'emt>, options: TypeckOptions) -> Self {
        Self {
            diagnostics,
            options,
            symbols: SymbolTable::new(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
    pub fn check(mut self, program: &Program) -> Result<TypeckResult, StructuralViolation> {
        for stmt in &program.stmts {
            self.check_stmt(stmt)?;
        }

        debug!(symbols = self.symbols.len(), "type checking finished");

        Ok(TypeckResult {
            symbols: self.symbols,
        })
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), StructuralViolation> {
        match stmt {
            Stmt::Decl(decl) => self.check_decl(decl),
            Stmt::Assignment(assignment) => self.check_assignment(assignment).map(|_| ()),
            Stmt::If(stmt) => self.check_if(stmt),
            Stmt::Print(stmt) => self.check_print(stmt),
        }
    }

    fn check_decl(&mut self, decl: &ast::Decl) -> Result<(), StructuralViolation> {
        let binding = self.symbols.bind_if_empty(
            decl.name.as_str(),
            Binding {
                ty: decl.ty.value.into(),
                kind: BindingKind::Declared,
                location: decl.span.clone(),
            },
        );

        if binding.ty != decl.ty.value {
            debug!(
                variable = decl.name.as_str(),
                previous = %binding.ty,
                redeclared = %decl.ty.value,
                "ignoring a redeclaration"
            );
        }

        match &decl.init {
            Some(init) if init.name.as_str() != decl.name.as_str() => {
                Err(StructuralViolation::InitializerTargetMismatch {
                    decl_name: Box::new(decl.name.clone()),
                    init_name: Box::new(init.name.clone()),
                })
            }

            Some(init) => self.check_assignment(init).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Checks an assignment and returns the type of the assigned expression.
    fn check_assignment(
        &mut self,
        assignment: &ast::Assignment,
    ) -> Result<ResolvedTy, StructuralViolation> {
        let ty = self.type_of_expr(&assignment.expr)?;
        let name = assignment.name.as_str();

        match (self.symbols.lookup(name), ty) {
            (Some(ResolvedTy::Builtin(expected_ty)), ResolvedTy::Builtin(actual_ty))
                if expected_ty != actual_ty =>
            {
                self.report(TypeckError::MismatchedAssignment(Box::new(
                    MismatchedAssignment {
                        span: assignment.span.clone(),
                        name: assignment.name.clone(),
                        expected_ty,
                        expr_text: assignment.expr.to_string(),
                        actual_ty,
                    },
                )));
            }

            (Some(_), _) => {}

            // an untyped expression has already been reported;
            // binding it keeps later uses of the name quiet
            (None, ty) => {
                trace!(variable = name, %ty, "binding an undeclared name on assignment");

                self.symbols.bind_if_empty(
                    name,
                    Binding {
                        ty,
                        kind: BindingKind::Inferred,
                        location: assignment.span.clone(),
                    },
                );
            }
        }

        Ok(ty)
    }

    fn check_if(&mut self, stmt: &ast::If) -> Result<(), StructuralViolation> {
        let ty = self.type_of_expr(&stmt.condition)?;

        if self.options.require_bool_conditions && !ty.is_compatible_with(BuiltinTy::Bool.into())
        {
            self.report(TypeckError::ConditionNotBool {
                span: stmt.condition.span().into_owned(),
                ty,
            });
        }

        for stmt in &stmt.body {
            self.check_stmt(stmt)?;
        }

        Ok(())
    }

    fn check_print(&mut self, stmt: &ast::Print) -> Result<(), StructuralViolation> {
        self.type_of_expr(&stmt.expr).map(|_| ())
    }

    /// Computes the static type of `expr`.
    ///
    /// Returns `ResolvedTy::Untyped` if the expression contains a typing error,
    /// which is reported at the innermost offending node.
    pub fn type_of_expr(&mut self, expr: &Expr) -> Result<ResolvedTy, StructuralViolation> {
        let ty = match expr {
            Expr::Term(term) => self.type_of_term(term),
            Expr::Paren(expr) => self.type_of_expr(&expr.expr)?,
            Expr::BinOp(expr) => self.type_of_bin_op(expr)?,
        };

        trace!(expr = %expr, %ty);

        Ok(ty)
    }

    fn type_of_term(&mut self, term: &Term) -> ResolvedTy {
        match term {
            Term::Name(name) => self.resolve_name(name),
            Term::Int(_) => BuiltinTy::Int.into(),
            Term::String(_) => BuiltinTy::String.into(),
            Term::Bool(_) => BuiltinTy::Bool.into(),
        }
    }

    fn type_of_bin_op(&mut self, expr: &ast::BinOpExpr) -> Result<ResolvedTy, StructuralViolation> {
        let op = expr
            .single_op()
            .ok_or_else(|| StructuralViolation::OperatorChain {
                span: expr.span.clone(),
                op_count: expr.ops.len(),
            })?;

        let lhs_ty = self.type_of_expr(&expr.lhs)?;
        let rhs_ty = self.type_of_expr(&expr.rhs)?;

        Ok(match (lhs_ty, rhs_ty) {
            (ResolvedTy::Builtin(lhs_ty), ResolvedTy::Builtin(rhs_ty)) if lhs_ty != rhs_ty => {
                self.report(TypeckError::MismatchedOperands(Box::new(MismatchedOperands {
                    span: expr.span.clone(),
                    lhs_ty,
                    rhs_ty,
                })));

                ResolvedTy::Untyped
            }

            _ if op.is_comparison() => BuiltinTy::Bool.into(),

            // propagate untypedness
            (ResolvedTy::Untyped, _) | (_, ResolvedTy::Untyped) => ResolvedTy::Untyped,

            (ty, _) => ty,
        })
    }

    /// Looks up the type of `name` without binding it.
    fn resolve_name(&mut self, name: &Name) -> ResolvedTy {
        match self.symbols.lookup(name.as_str()) {
            Some(ty) => ty,

            None => {
                self.report(TypeckError::UnrecognizedName(Box::new(name.clone())));

                ResolvedTy::Untyped
            }
        }
    }

    fn report(&mut self, error: TypeckError) {
        debug!(%error, "reporting a typing error");

        self.diagnostics.error().with_span_and_error(error).emit();
    }
}
