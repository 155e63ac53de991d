/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the statement tree
///
/// Submodules:
/// - ast: Statement nodes and their kinds
/// - types: Named types and their fundamental kinds
pub mod ast;
pub mod types;
