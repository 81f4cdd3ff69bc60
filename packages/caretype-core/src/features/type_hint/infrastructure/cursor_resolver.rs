//! Cursor Resolver
//!
//! Maps a cursor offset to the assignment target (definition) the variable
//! under the cursor refers to.
//!
//! Resolution follows the binding the parser pre-computed for each reference
//! and only ever accepts assignment targets; parameters, imports and other
//! declarations resolve to nothing.

use crate::features::parsing::domain::{NodeId, SyntaxKind, SyntaxTree};

/// How far [`CursorResolver::resolve`] follows a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    /// Stop at the assignment target
    Definition,
    /// Continue to the value assigned to the target
    Value,
}

/// Read-only resolver over one syntax tree
#[derive(Debug, Clone, Copy)]
pub struct CursorResolver<'t> {
    tree: &'t SyntaxTree,
}

impl<'t> CursorResolver<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// Definition of the variable under `offset`, if any.
    ///
    /// Walks up from the deepest node at `offset` to the nearest expression.
    /// A target is returned as is; a reference is followed to its target.
    /// Offsets outside the source yield `None`.
    pub fn resolve_definition_at(&self, offset: usize) -> Option<NodeId> {
        let leaf = self.tree.leaf_at(offset)?;
        let expr = self
            .tree
            .ancestors(leaf)
            .find(|id| self.tree.kind(*id).is_expression())?;

        match self.tree.kind(expr) {
            SyntaxKind::TargetExpr => Some(expr),
            SyntaxKind::ReferenceExpr => self.resolve(expr, Hop::Definition),
            _ => None,
        }
    }

    /// Follow a reference's binding.
    ///
    /// Shared by the top-level reference case and by operands nested inside
    /// binary expressions and calls; `hop` picks where to stop.
    pub fn resolve(&self, reference: NodeId, hop: Hop) -> Option<NodeId> {
        let target = self.tree.binding(reference)?;
        if self.tree.kind(target) != &SyntaxKind::TargetExpr {
            tracing::trace!(
                reference = self.tree.text(reference),
                bound_to = ?self.tree.kind(target),
                "binding is not an assignment target"
            );
            return None;
        }

        match hop {
            Hop::Definition => Some(target),
            Hop::Value => self.extract_rhs(target),
        }
    }

    /// Value assigned to a definition: the last child of its assignment.
    ///
    /// In `x = y = 5` both targets receive `5`.
    pub fn extract_rhs(&self, definition: NodeId) -> Option<NodeId> {
        let assignment = self.assignment_of(definition)?;
        let mut rhs = self.tree.last_child(assignment)?;
        while self.tree.kind(rhs) == &SyntaxKind::AssignmentStmt {
            rhs = self.tree.last_child(rhs)?;
        }
        Some(rhs)
    }

    /// Source text of the assignment's target, `"?"` when malformed
    pub fn extract_name(&self, definition: NodeId) -> String {
        self.assignment_of(definition)
            .and_then(|assignment| self.tree.first_child(assignment))
            .map(|target| self.tree.text(target).to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    fn assignment_of(&self, definition: NodeId) -> Option<NodeId> {
        let parent = self.tree.parent(definition)?;
        (self.tree.kind(parent) == &SyntaxKind::AssignmentStmt).then_some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{Parser, TreeSitterParser};

    fn parse(source: &str) -> SyntaxTree {
        TreeSitterParser::python().parse(source, "test.py").unwrap()
    }

    fn offset_of(tree: &SyntaxTree, needle: &str, nth: usize) -> usize {
        tree.source()
            .match_indices(needle)
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn test_definition_resolves_to_itself() {
        let tree = parse("x = 5\n");
        let resolver = CursorResolver::new(&tree);
        let def = resolver.resolve_definition_at(0).unwrap();
        assert_eq!(tree.kind(def), &SyntaxKind::TargetExpr);
        assert_eq!(resolver.extract_name(def), "x");
    }

    #[test]
    fn test_reference_resolves_to_definition() {
        let tree = parse("x = 5\nshow(x)\n");
        let resolver = CursorResolver::new(&tree);
        let def = resolver
            .resolve_definition_at(offset_of(&tree, "x", 1))
            .unwrap();
        assert_eq!(tree.node(def).span.start_line, 1);
    }

    #[test]
    fn test_non_variable_positions() {
        let tree = parse("x = 5\n");
        let resolver = CursorResolver::new(&tree);
        // the literal
        assert_eq!(resolver.resolve_definition_at(4), None);
        // the `=` token
        assert_eq!(resolver.resolve_definition_at(2), None);
        // past the end
        assert_eq!(resolver.resolve_definition_at(1000), None);
    }

    #[test]
    fn test_parameter_reference_is_rejected() {
        let tree = parse("def f(a):\n    return a\n");
        let resolver = CursorResolver::new(&tree);
        assert_eq!(resolver.resolve_definition_at(offset_of(&tree, "a", 1)), None);
    }

    #[test]
    fn test_cursor_at_end_of_name() {
        // the byte after `xy` is the space, covered by the assignment
        let tree = parse("xy = 5\n");
        let resolver = CursorResolver::new(&tree);
        assert!(resolver.resolve_definition_at(1).is_some());
        assert_eq!(resolver.resolve_definition_at(2), None);
    }

    #[test]
    fn test_extract_rhs_chained() {
        let tree = parse("x = y = 5\n");
        let resolver = CursorResolver::new(&tree);
        for name_offset in [0, 4] {
            let def = resolver.resolve_definition_at(name_offset).unwrap();
            let rhs = resolver.extract_rhs(def).unwrap();
            assert_eq!(tree.kind(rhs), &SyntaxKind::IntegerLiteral);
        }
        let inner = resolver.resolve_definition_at(4).unwrap();
        assert_eq!(resolver.extract_name(inner), "y");
    }

    #[test]
    fn test_resolve_value_hop() {
        let tree = parse("y = 'a'\nx = y\n");
        let resolver = CursorResolver::new(&tree);
        let reference = tree
            .nodes_of_kind(&SyntaxKind::ReferenceExpr)
            .next()
            .unwrap();
        let value = resolver.resolve(reference, Hop::Value).unwrap();
        assert_eq!(tree.kind(value), &SyntaxKind::StringLiteral);
    }

    #[test]
    fn test_target_outside_assignment_is_malformed() {
        let tree = parse("for i in [1]:\n    pass\n");
        let resolver = CursorResolver::new(&tree);
        let def = resolver.resolve_definition_at(offset_of(&tree, "i", 0)).unwrap();
        assert_eq!(resolver.extract_rhs(def), None);
        assert_eq!(resolver.extract_name(def), "?");
    }
}
