//! Type Classifier
//!
//! Maps the shape of an assigned value to a [`TypeLabel`]. References are
//! unwound through the [`CursorResolver`] and their own assigned value is
//! classified in turn. Nothing is cached: every call walks the current tree.
//!
//! Reference hops and operator/call nesting share one depth budget; past it
//! the label degrades to `"?"`.

use crate::features::parsing::domain::{NodeId, SyntaxKind, SyntaxTree};
use crate::features::type_hint::domain::TypeLabel;
use crate::features::type_hint::infrastructure::cursor_resolver::{CursorResolver, Hop};

/// Default bound on reference hops per classification
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 32;

pub struct TypeClassifier<'t> {
    resolver: CursorResolver<'t>,
    max_depth: usize,
}

impl<'t> TypeClassifier<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self::with_max_depth(tree, DEFAULT_MAX_RESOLUTION_DEPTH)
    }

    pub fn with_max_depth(tree: &'t SyntaxTree, max_depth: usize) -> Self {
        Self {
            resolver: CursorResolver::new(tree),
            max_depth,
        }
    }

    pub fn resolver(&self) -> &CursorResolver<'t> {
        &self.resolver
    }

    /// Label for an expression node
    pub fn classify(&self, node: NodeId) -> TypeLabel {
        self.classify_at(node, 0)
    }

    /// Label for an operand of a binary expression or an argument of a call
    pub fn classify_operand(&self, node: NodeId) -> TypeLabel {
        self.operand_at(node, 0)
    }

    fn tree(&self) -> &'t SyntaxTree {
        self.resolver.tree()
    }

    fn classify_at(&self, node: NodeId, depth: usize) -> TypeLabel {
        let tree = self.tree();
        match tree.kind(node) {
            SyntaxKind::StringLiteral => TypeLabel::Str,
            SyntaxKind::IntegerLiteral => TypeLabel::Int,
            SyntaxKind::ListLiteral => TypeLabel::List,
            SyntaxKind::FloatLiteral => TypeLabel::Float,
            SyntaxKind::DictLiteral => TypeLabel::Dict,
            SyntaxKind::SetLiteral => TypeLabel::Set,

            SyntaxKind::ParenthesizedExpr => {
                // children: `(`, inner, `)`
                match tree.children(node).get(1).map(|inner| tree.kind(*inner)) {
                    Some(SyntaxKind::TupleExpr) => TypeLabel::Tuple,
                    _ => TypeLabel::AmbiguousTuple,
                }
            }
            SyntaxKind::TupleExpr => TypeLabel::Tuple,

            SyntaxKind::BinaryExpr | SyntaxKind::CallExpr if depth >= self.max_depth => {
                tracing::debug!(
                    expression = tree.node(node).raw_kind,
                    max_depth = self.max_depth,
                    "nesting depth limit reached"
                );
                TypeLabel::Unknown
            }
            SyntaxKind::BinaryExpr => TypeLabel::Operands(
                tree.named_children(node)
                    .map(|operand| self.operand_at(operand, depth + 1))
                    .collect(),
            ),
            SyntaxKind::CallExpr => TypeLabel::Call(self.call_arguments(node, depth + 1)),

            SyntaxKind::ReferenceExpr => self.follow(node, depth),

            SyntaxKind::Error => TypeLabel::Error,

            _ => TypeLabel::Unknown,
        }
    }

    fn call_arguments(&self, call: NodeId, depth: usize) -> Vec<TypeLabel> {
        let tree = self.tree();
        let arguments = tree
            .children(call)
            .iter()
            .copied()
            .find(|child| tree.kind(*child) == &SyntaxKind::ArgumentList);

        match arguments {
            Some(list) => tree
                .named_children(list)
                .map(|arg| self.operand_at(arg, depth))
                .collect(),
            // `f(x for x in xs)`: the generator is the only argument
            None => tree
                .last_child(call)
                .map(|arg| vec![self.operand_at(arg, depth)])
                .unwrap_or_default(),
        }
    }

    fn operand_at(&self, node: NodeId, depth: usize) -> TypeLabel {
        match self.tree().kind(node) {
            SyntaxKind::ReferenceExpr => self.follow(node, depth),
            _ => self.classify_at(node, depth),
        }
    }

    /// Classify the value a reference was last assigned
    fn follow(&self, reference: NodeId, depth: usize) -> TypeLabel {
        if depth >= self.max_depth {
            tracing::debug!(
                reference = self.tree().text(reference),
                max_depth = self.max_depth,
                "resolution depth limit reached"
            );
            return TypeLabel::Unknown;
        }

        match self.resolver.resolve(reference, Hop::Value) {
            Some(value) => self.classify_at(value, depth + 1),
            None => TypeLabel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{Parser, SyntaxTreeBuilder, TreeSitterParser};
    use crate::shared::models::TextRange;

    fn parse(source: &str) -> SyntaxTree {
        TreeSitterParser::python().parse(source, "test.py").unwrap()
    }

    /// Label of the value assigned on the last line
    fn last_value_label(source: &str) -> String {
        let tree = parse(source);
        let assignment = tree
            .nodes_of_kind(&SyntaxKind::AssignmentStmt)
            .last()
            .unwrap();
        let value = tree.last_child(assignment).unwrap();
        TypeClassifier::new(&tree).classify(value).to_string()
    }

    #[test]
    fn test_literals() {
        assert_eq!(last_value_label("x = 'a'\n"), "str");
        assert_eq!(last_value_label("x = \"\"\"doc\"\"\"\n"), "str");
        assert_eq!(last_value_label("x = 3\n"), "int");
        assert_eq!(last_value_label("x = 3.5\n"), "float");
        assert_eq!(last_value_label("x = [1, 2]\n"), "list");
        assert_eq!(last_value_label("x = {'k': 1}\n"), "dict");
        assert_eq!(last_value_label("x = {1, 2}\n"), "set");
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(last_value_label("x = (1, 2)\n"), "tuple");
        assert_eq!(last_value_label("x = ()\n"), "tuple");
        assert_eq!(last_value_label("x = (1)\n"), "tuple?");
        assert_eq!(last_value_label("x = 1, 2\n"), "tuple");
    }

    #[test]
    fn test_binary_lists_operands() {
        assert_eq!(last_value_label("x = 7 + 7\n"), "int, int");
        assert_eq!(last_value_label("x = 1 + 2.0 + 'a'\n"), "int, float, str");
        assert_eq!(last_value_label("y = 1.5\nx = y * 2\n"), "float, int");
    }

    #[test]
    fn test_call_arguments() {
        assert_eq!(last_value_label("x = f(1, \"a\")\n"), "f(int, str)");
        assert_eq!(last_value_label("x = g()\n"), "f()");
        assert_eq!(last_value_label("n = [1]\nx = f(n, k=2)\n"), "f(list, ?)");
    }

    #[test]
    fn test_reference_chain() {
        assert_eq!(last_value_label("z = {1}\ny = z\nx = y\n"), "set");
        assert_eq!(last_value_label("x = undefined\n"), "?");
    }

    #[test]
    fn test_unclassifiable_shapes() {
        assert_eq!(last_value_label("x = None\n"), "?");
        assert_eq!(last_value_label("x = lambda: 1\n"), "?");
        assert_eq!(last_value_label("x = a.b\n"), "?");
    }

    #[test]
    fn test_error_node() {
        let mut b = SyntaxTreeBuilder::new("x = $", "test.py");
        let module = b.push(SyntaxKind::Module, "module", TextRange::new(0, 5), None);
        let error = b.push(SyntaxKind::Error, "ERROR", TextRange::new(4, 5), Some(module));
        let tree = b.finish();
        assert_eq!(TypeClassifier::new(&tree).classify(error), TypeLabel::Error);
    }

    #[test]
    fn test_depth_limit() {
        let source = "a = 1\nb = a\nc = b\nd = c\n";
        let tree = parse(source);
        let d_value = tree
            .nodes_of_kind(&SyntaxKind::ReferenceExpr)
            .last()
            .unwrap();

        let shallow = TypeClassifier::with_max_depth(&tree, 2);
        assert_eq!(shallow.classify(d_value), TypeLabel::Unknown);

        let deep = TypeClassifier::with_max_depth(&tree, 3);
        assert_eq!(deep.classify(d_value), TypeLabel::Int);
    }

    #[test]
    fn test_nesting_limit() {
        let tree = parse("x = 1 + 2 + 3\n");
        let assignment = tree
            .nodes_of_kind(&SyntaxKind::AssignmentStmt)
            .next()
            .unwrap();
        let value = tree.last_child(assignment).unwrap();

        let shallow = TypeClassifier::with_max_depth(&tree, 1);
        assert_eq!(shallow.classify(value).to_string(), "?, int");

        let call = parse("x = f(g(1))\n");
        let assignment = call
            .nodes_of_kind(&SyntaxKind::AssignmentStmt)
            .next()
            .unwrap();
        let value = call.last_child(assignment).unwrap();
        assert_eq!(TypeClassifier::with_max_depth(&call, 1).classify(value).to_string(), "f(?)");
        assert_eq!(TypeClassifier::with_max_depth(&call, 2).classify(value).to_string(), "f(f(int))");
    }

    #[test]
    fn test_classify_operand_unwinds_reference() {
        let tree = parse("y = 'a'\nx = y\n");
        let reference = tree
            .nodes_of_kind(&SyntaxKind::ReferenceExpr)
            .next()
            .unwrap();
        let classifier = TypeClassifier::new(&tree);
        assert_eq!(classifier.classify_operand(reference), TypeLabel::Str);
        assert_eq!(classifier.classify(reference), TypeLabel::Str);
    }
}
