use std::fmt::{self, Display};

use indexmap::map::{self, IndexMap};
use serde::{Deserialize, Serialize};

use crate::ast::ty::{BuiltinTy, ResolvedTy};
use crate::position::Span;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Introduced by a declaration.
    Declared,

    /// Adopted from the first assignment to an undeclared name.
    Inferred,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// `ResolvedTy::Untyped` if the name was first assigned an ill-typed expression.
    pub ty: ResolvedTy,
    pub kind: BindingKind,
    pub location: Span,
}

/// Maps variable names to their types for one checking pass.
///
/// The language has no scopes: entries are never removed, and the first binding of a name
/// is the one that sticks. Iteration follows insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SymbolTable {
    bindings: IndexMap<String, Binding>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` unless it is already bound.
    ///
    /// Returns the binding that is in effect afterwards.
    pub fn bind_if_empty(&mut self, name: &str, binding: Binding) -> &Binding {
        match self.bindings.entry(name.to_owned()) {
            map::Entry::Occupied(entry) => entry.into_mut(),
            map::Entry::Vacant(entry) => entry.insert(binding),
        }
    }

    /// Returns the type of `name` if it is bound to a valid one.
    pub fn get(&self, name: &str) -> Option<BuiltinTy> {
        self.lookup(name).and_then(ResolvedTy::to_builtin_ty)
    }

    /// Returns the type of `name`, including the untyped ones, if it is bound at all.
    pub fn lookup(&self, name: &str) -> Option<ResolvedTy> {
        self.bindings.get(name).map(|binding| binding.ty)
    }

    pub fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the names with a valid type in the order they were bound.
    pub fn iter(&self) -> impl Iterator<Item = (&str, BuiltinTy)> {
        self.bindings
            .iter()
            .filter_map(|(name, binding)| Some((name.as_str(), binding.ty.to_builtin_ty()?)))
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, ty) in self.iter() {
            writeln!(f, "{}: {}", name, ty)?;
        }

        Ok(())
    }
}
