use std::fmt::Display;

use crate::TextSpan;

use super::types::Type;

/// Statement Kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum StatementKind {
    VariableDeclaration,
    AssignmentExpression,
    IdentifierExpression,
    FunctionCall,
    Literal,
    OperatorCall,
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A node of the statement tree.
///
/// Children live in `params`: a declaration or assignment holds its
/// initializer there, an operator call holds its two operands, and literals
/// and identifier references have none.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Statement {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Reserved, nothing reads it yet.
    pub is_var: bool,
    pub params: Vec<Statement>,
    pub kind: StatementKind,
    pub span: TextSpan,
}

impl Statement {
    pub fn new(kind: StatementKind, name: &str, ty: Type, span: TextSpan) -> Self {
        Statement {
            name: name.to_string(),
            ty,
            is_var: false,
            params: vec![],
            kind,
            span,
        }
    }

    pub fn with_params(mut self, params: Vec<Statement>) -> Self {
        self.params = params;
        self
    }

    pub fn get_span(&self) -> &TextSpan {
        &self.span
    }

    /// Renders the node and its children as an indented outline, one node per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} {}: {}\n", self.kind, self.name, self.ty.name));

        for param in &self.params {
            param.write_outline(out, depth + 1);
        }
    }
}

/// Dumps the statement tree as pretty-printed JSON, one array element per
/// top-level statement.
pub fn tree_to_json(tree: &[Statement]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}
