use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A type that can be written in a declaration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTy {
    Int,
    String,
    Bool,
}

impl BuiltinTy {
    /// The keyword used for the type in source code.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }
}

impl Display for BuiltinTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The type inferred for an expression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTy {
    Builtin(BuiltinTy),

    /// An expression that cannot have a valid type.
    ///
    /// It is compatible with every other type so that a single error is not reported
    /// again by every enclosing expression.
    ///
    /// A valid program has no expression of this type;
    /// it only occurs as a result of a typing error.
    Untyped,
}

impl ResolvedTy {
    pub fn to_builtin_ty(self) -> Option<BuiltinTy> {
        match self {
            Self::Builtin(builtin) => Some(builtin),
            Self::Untyped => None,
        }
    }

    /// Returns `true` unless both types are known and distinct.
    pub fn is_compatible_with(self, other: ResolvedTy) -> bool {
        match (self, other) {
            (Self::Untyped, _) | (_, Self::Untyped) => true,
            (Self::Builtin(lhs), Self::Builtin(rhs)) => lhs == rhs,
        }
    }
}

impl Display for ResolvedTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => builtin.fmt(f),
            Self::Untyped => write!(f, "{{invalid}}"),
        }
    }
}

impl From<BuiltinTy> for ResolvedTy {
    fn from(builtin: BuiltinTy) -> ResolvedTy {
        ResolvedTy::Builtin(builtin)
    }
}

impl PartialEq<BuiltinTy> for ResolvedTy {
    fn eq(&self, other: &BuiltinTy) -> bool {
        matches!(self, Self::Builtin(builtin) if builtin == other)
    }
}
