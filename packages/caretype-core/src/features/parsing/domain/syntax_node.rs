//! Syntax node representation
//!
//! Nodes live in a flat arena owned by [`SyntaxTree`](super::SyntaxTree) and
//! refer to each other through [`NodeId`] indices, never through owned links.

use crate::shared::models::{Span, TextRange};

/// Index of a node inside its [`SyntaxTree`](super::SyntaxTree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Syntax node kind (closed vocabulary)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    // Literals
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    ListLiteral,
    DictLiteral,
    SetLiteral,

    // Compound expressions
    BinaryExpr,
    ParenthesizedExpr,
    TupleExpr,
    CallExpr,
    ArgumentList,

    // Names
    /// Use-site occurrence of a variable
    ReferenceExpr,
    /// Left-hand side variable of an assignment (or other binding target)
    TargetExpr,
    /// Name introduced by a parameter, `def`, `class` or `import`
    NameDecl,
    /// Non-binding label: attribute names, keyword-argument names
    Name,

    // Statements
    AssignmentStmt,
    Module,

    // Other
    /// Anonymous grammar token (`(`, `=`, `,` ...)
    Token,
    /// Parse error or missing node
    Error,

    // Unknown/Other
    Other(String),
}

impl SyntaxKind {
    /// Kinds the cursor resolver stops at while walking up from a leaf
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::IntegerLiteral
                | SyntaxKind::FloatLiteral
                | SyntaxKind::ListLiteral
                | SyntaxKind::DictLiteral
                | SyntaxKind::SetLiteral
                | SyntaxKind::BinaryExpr
                | SyntaxKind::ParenthesizedExpr
                | SyntaxKind::TupleExpr
                | SyntaxKind::CallExpr
                | SyntaxKind::ReferenceExpr
                | SyntaxKind::TargetExpr
        )
    }
}

/// Arena-resident syntax node
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,

    /// Original grammar kind (`"assignment"`, `"identifier"` ...)
    pub raw_kind: &'static str,

    /// Grammar field this node occupies in its parent (`"left"`, `"right"` ...)
    pub field: Option<&'static str>,

    pub range: TextRange,
    pub span: Span,

    /// Named nodes are grammar rules; unnamed ones are literal tokens
    pub is_named: bool,

    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,

    /// Node this reference binds to, filled in by the name binder
    pub binding: Option<NodeId>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, raw_kind: &'static str, range: TextRange, span: Span) -> Self {
        Self {
            kind,
            raw_kind,
            field: None,
            range,
            span,
            is_named: true,
            parent: None,
            children: Vec::new(),
            binding: None,
        }
    }

    pub fn with_field(mut self, field: Option<&'static str>) -> Self {
        self.field = field;
        self
    }

    pub fn with_named(mut self, is_named: bool) -> Self {
        self.is_named = is_named;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expression() {
        assert!(SyntaxKind::TargetExpr.is_expression());
        assert!(SyntaxKind::ReferenceExpr.is_expression());
        assert!(SyntaxKind::ParenthesizedExpr.is_expression());
        assert!(!SyntaxKind::AssignmentStmt.is_expression());
        assert!(!SyntaxKind::Name.is_expression());
        assert!(!SyntaxKind::Other("attribute".into()).is_expression());
    }
}
