pub mod error;
mod typeck;
mod typectx;

use crate::ast::Program;
use crate::errors::{Diagnostic, Diagnostics};

pub use error::{StructuralViolation, TypeckError};
pub use typeck::{TypeChecker, TypeckOptions, TypeckResult};
pub use typectx::{Binding, BindingKind, SymbolTable};

/// Checks `program` with a fresh symbol table and default options.
///
/// Returns the final symbol table together with the diagnostics in emission order.
/// Fails only if the tree itself is malformed.
pub fn check(program: &Program) -> Result<(SymbolTable, Vec<Diagnostic>), StructuralViolation> {
    check_with_options(program, TypeckOptions::default())
}

pub fn check_with_options(
    program: &Program,
    options: TypeckOptions,
) -> Result<(SymbolTable, Vec<Diagnostic>), StructuralViolation> {
    let mut diagnostics = Diagnostics::new();
    let typeck = TypeChecker::with_options(&mut diagnostics, options);
    let TypeckResult { symbols } = typeck.check(program)?;

    Ok((symbols, diagnostics.into_vec()))
}
