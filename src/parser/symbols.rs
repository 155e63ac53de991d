use std::collections::HashMap;

use crate::ast::ast::Statement;

/// What the parser does when a name is declared a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedeclarationPolicy {
    /// The newer declaration replaces the older one and a notice is recorded.
    #[default]
    Overwrite,
    /// The second declaration fails the parse.
    Reject,
}

/// Declared names, each mapped to the declaration node that introduced it.
///
/// The table is flat: there are no scopes, and it lives as long as the parser
/// that owns it.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Statement>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Registers a declaration under its name, returning the one it replaced.
    pub fn insert(&mut self, declaration: Statement) -> Option<Statement> {
        self.symbols.insert(declaration.name.clone(), declaration)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Declarations ordered by name.
    pub fn sorted(&self) -> Vec<&Statement> {
        let mut declarations: Vec<&Statement> = self.symbols.values().collect();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        declarations
    }
}
