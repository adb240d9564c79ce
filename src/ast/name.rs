//! Symbolic names: variables, labels, relationship types, property keys and
//! parameter names.

use smol_str::SmolStr;
use std::fmt;

/// A name as written by the caller, unescaped.
///
/// Whether the name needs back-quotes is decided at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolicName(SmolStr);

impl SymbolicName {
    /// Creates a symbolic name.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    /// Returns the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name is empty, which no renderer accepts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SymbolicName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SymbolicName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<SmolStr> for SymbolicName {
    fn from(name: SmolStr) -> Self {
        Self(name)
    }
}

impl From<&SymbolicName> for SymbolicName {
    fn from(name: &SymbolicName) -> Self {
        name.clone()
    }
}

impl AsRef<str> for SymbolicName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
