//! Name binder
//!
//! Attaches to every reference the binding site it reads, following Python's
//! lexical scoping closely enough for editor hints:
//! - module, function, class, lambda and comprehension scopes
//! - class bodies are invisible to nested scopes
//! - a binding is visible after its statement completes (`x = x + 1` reads
//!   the previous `x`)
//! - a name bound anywhere in a function is local to the whole function
//! - closures see the latest binding of an enclosing scope

use std::collections::HashMap;

use super::tree_sitter::languages::python::{self, node_kinds};
use crate::features::parsing::domain::{NodeId, SyntaxKind, SyntaxTreeBuilder};

/// Binding site of one name in one scope
#[derive(Debug, Clone, Copy)]
struct Binding {
    /// First byte offset at which the binding can be read
    visible_from: usize,
    node: NodeId,
}

/// Scope-aware reference binder
#[derive(Debug, Clone, Default)]
pub struct NameBinder;

impl NameBinder {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every reference in the builder's arena.
    ///
    /// Returns the number of references that received a binding.
    pub fn bind(&self, builder: &mut SyntaxTreeBuilder) -> usize {
        if builder.is_empty() {
            return 0;
        }

        let resolved = Self::resolve_all(builder);
        let bound = resolved.len();
        for (reference, target) in resolved {
            builder.bind(reference, target);
        }
        bound
    }

    /// (reference, binding site) pairs for every reference that resolves
    fn resolve_all(builder: &SyntaxTreeBuilder) -> Vec<(NodeId, NodeId)> {
        let scopes = Self::scope_table(builder);
        let table = Self::binding_table(builder, &scopes);

        Self::ids(builder)
            .filter(|id| builder.node(*id).kind == SyntaxKind::ReferenceExpr)
            .filter_map(|reference| {
                let name = Self::text(builder, reference);
                let at = builder.node(reference).range.start;
                let target =
                    Self::lookup(builder, &scopes, &table, scopes[reference.index()], name, at);
                if target.is_none() {
                    tracing::trace!(name, offset = at, "unbound reference");
                }
                target.map(|target| (reference, target))
            })
            .collect()
    }

    fn ids(builder: &SyntaxTreeBuilder) -> impl Iterator<Item = NodeId> {
        (0..builder.len() as u32).map(NodeId)
    }

    fn text(builder: &SyntaxTreeBuilder, id: NodeId) -> &str {
        let range = builder.node(id).range;
        builder.source().get(range.start..range.end).unwrap_or("")
    }

    fn raw_kind(builder: &SyntaxTreeBuilder, id: NodeId) -> &'static str {
        builder.node(id).raw_kind
    }

    /// For every node, the scope node it lives in.
    ///
    /// Relies on pre-order: parents always precede their children.
    fn scope_table(builder: &SyntaxTreeBuilder) -> Vec<NodeId> {
        let mut scopes: Vec<NodeId> = Vec::with_capacity(builder.len());
        for id in Self::ids(builder) {
            let node = builder.node(id);
            let scope = match node.parent {
                None => id,
                Some(parent) => {
                    let parent_kind = Self::raw_kind(builder, parent);
                    if Self::evaluated_outside(builder, id, parent) {
                        // the function, lambda or comprehension is scopes[parent];
                        // step to the scope enclosing it
                        scopes[scopes[parent.index()].index()]
                    } else if python::is_scope(parent_kind)
                        && !Self::decorates_scope(node.field, parent_kind)
                    {
                        parent
                    } else {
                        scopes[parent.index()]
                    }
                }
            };
            scopes.push(scope);
        }
        scopes
    }

    /// Children of a `def`/`class` header that live in the enclosing scope
    fn decorates_scope(field: Option<&str>, parent_kind: &str) -> bool {
        match parent_kind {
            node_kinds::FUNCTION_DEF => matches!(field, Some("name") | Some("return_type")),
            node_kinds::CLASS_DEF => matches!(field, Some("name") | Some("superclasses")),
            _ => false,
        }
    }

    /// Parameter defaults, parameter annotations and a comprehension's first
    /// iterable run before the inner scope exists.
    fn evaluated_outside(builder: &SyntaxTreeBuilder, id: NodeId, parent: NodeId) -> bool {
        let field = builder.node(id).field;
        match Self::raw_kind(builder, parent) {
            node_kinds::DEFAULT_PARAMETER => field == Some("value"),
            node_kinds::TYPED_DEFAULT_PARAMETER => matches!(field, Some("value") | Some("type")),
            node_kinds::TYPED_PARAMETER => field == Some("type"),
            node_kinds::FOR_IN_CLAUSE if field == Some("right") => {
                builder.node(parent).parent.is_some_and(|comprehension| {
                    builder
                        .node(comprehension)
                        .children
                        .iter()
                        .find(|c| Self::raw_kind(builder, **c) == node_kinds::FOR_IN_CLAUSE)
                        == Some(&parent)
                })
            }
            _ => false,
        }
    }

    /// Collect binding sites keyed by (scope, name), in document order
    fn binding_table<'b>(
        builder: &'b SyntaxTreeBuilder,
        scopes: &[NodeId],
    ) -> HashMap<(NodeId, &'b str), Vec<Binding>> {
        let mut table: HashMap<(NodeId, &str), Vec<Binding>> = HashMap::new();
        for id in Self::ids(builder) {
            let kind = &builder.node(id).kind;
            if !matches!(kind, SyntaxKind::TargetExpr | SyntaxKind::NameDecl) {
                continue;
            }
            let binding = Binding {
                visible_from: Self::visible_from(builder, id),
                node: id,
            };
            table
                .entry((scopes[id.index()], Self::text(builder, id)))
                .or_default()
                .push(binding);
        }
        table
    }

    /// Assignment targets become visible once the whole (possibly chained)
    /// assignment has been evaluated; other bindings right after themselves.
    fn visible_from(builder: &SyntaxTreeBuilder, id: NodeId) -> usize {
        let mut current = id;
        while let Some(parent) = builder.node(current).parent {
            if python::is_target_pattern(Self::raw_kind(builder, parent)) {
                current = parent;
            } else {
                break;
            }
        }

        match builder.node(current).parent {
            Some(parent) if builder.node(parent).kind == SyntaxKind::AssignmentStmt => {
                let mut outermost = parent;
                while let Some(up) = builder.node(outermost).parent {
                    if builder.node(up).kind == SyntaxKind::AssignmentStmt {
                        outermost = up;
                    } else {
                        break;
                    }
                }
                builder.node(outermost).range.end
            }
            _ => builder.node(id).range.end,
        }
    }

    fn lookup(
        builder: &SyntaxTreeBuilder,
        scopes: &[NodeId],
        table: &HashMap<(NodeId, &str), Vec<Binding>>,
        start_scope: NodeId,
        name: &str,
        at: usize,
    ) -> Option<NodeId> {
        let mut scope = start_scope;
        let mut from_inner = false;

        loop {
            let scope_kind = Self::raw_kind(builder, scope);
            if let Some(bindings) = table.get(&(scope, name)) {
                if python::is_comprehension_scope(scope_kind) {
                    return bindings.last().map(|b| b.node);
                }
                if let Some(hit) = bindings.iter().rev().find(|b| b.visible_from <= at) {
                    return Some(hit.node);
                }
                if from_inner {
                    // closure reads whatever the enclosing scope assigned last
                    return bindings.last().map(|b| b.node);
                }
                if scope_kind != node_kinds::CLASS_DEF {
                    // local used before assignment
                    return None;
                }
            }

            if scope_kind == node_kinds::MODULE || builder.node(scope).parent.is_none() {
                return None;
            }

            // Step outward, skipping class bodies
            scope = scopes[scope.index()];
            while Self::raw_kind(builder, scope) == node_kinds::CLASS_DEF {
                if builder.node(scope).parent.is_none() {
                    return None;
                }
                scope = scopes[scope.index()];
            }
            from_inner = true;
        }
    }
}
