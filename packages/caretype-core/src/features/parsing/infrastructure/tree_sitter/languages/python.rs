//! Python-specific tree-sitter configuration

use crate::features::parsing::domain::SyntaxKind;

/// Python node kinds for quick lookup
pub mod node_kinds {
    pub const MODULE: &str = "module";
    pub const FUNCTION_DEF: &str = "function_definition";
    pub const CLASS_DEF: &str = "class_definition";
    pub const LAMBDA: &str = "lambda";
    pub const ASSIGNMENT: &str = "assignment";
    pub const AUGMENTED_ASSIGNMENT: &str = "augmented_assignment";
    pub const IDENTIFIER: &str = "identifier";
    pub const ATTRIBUTE: &str = "attribute";
    pub const CALL: &str = "call";
    pub const ARGUMENT_LIST: &str = "argument_list";
    pub const KEYWORD_ARGUMENT: &str = "keyword_argument";
    pub const TUPLE: &str = "tuple";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
    pub const EXPRESSION_LIST: &str = "expression_list";
    pub const PATTERN_LIST: &str = "pattern_list";
    pub const TUPLE_PATTERN: &str = "tuple_pattern";
    pub const LIST_PATTERN: &str = "list_pattern";
    pub const LIST_SPLAT_PATTERN: &str = "list_splat_pattern";
    pub const DICTIONARY_SPLAT_PATTERN: &str = "dictionary_splat_pattern";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const FOR_IN_CLAUSE: &str = "for_in_clause";
    pub const NAMED_EXPRESSION: &str = "named_expression";
    pub const AS_PATTERN_TARGET: &str = "as_pattern_target";
    pub const PARAMETERS: &str = "parameters";
    pub const LAMBDA_PARAMETERS: &str = "lambda_parameters";
    pub const DEFAULT_PARAMETER: &str = "default_parameter";
    pub const TYPED_PARAMETER: &str = "typed_parameter";
    pub const TYPED_DEFAULT_PARAMETER: &str = "typed_default_parameter";
    pub const IMPORT_STATEMENT: &str = "import_statement";
    pub const IMPORT_FROM_STATEMENT: &str = "import_from_statement";
    pub const ALIASED_IMPORT: &str = "aliased_import";
    pub const DOTTED_NAME: &str = "dotted_name";
    pub const GLOBAL_STATEMENT: &str = "global_statement";
    pub const NONLOCAL_STATEMENT: &str = "nonlocal_statement";
    pub const LIST_COMPREHENSION: &str = "list_comprehension";
    pub const SET_COMPREHENSION: &str = "set_comprehension";
    pub const DICTIONARY_COMPREHENSION: &str = "dictionary_comprehension";
    pub const GENERATOR_EXPRESSION: &str = "generator_expression";
    pub const ERROR: &str = "ERROR";
    pub const OPEN_PAREN: &str = "(";
    pub const CLOSE_PAREN: &str = ")";
}

use node_kinds as nk;

/// Map a named tree-sitter node kind to our SyntaxKind.
///
/// Identifiers are classified separately by [`identifier_role`] because their
/// kind depends on where they sit; here they default to references.
pub fn map_node_kind(ts_kind: &str) -> SyntaxKind {
    match ts_kind {
        // Literals
        "string" | "concatenated_string" => SyntaxKind::StringLiteral,
        "integer" => SyntaxKind::IntegerLiteral,
        "float" => SyntaxKind::FloatLiteral,
        "list" => SyntaxKind::ListLiteral,
        "dictionary" => SyntaxKind::DictLiteral,
        "set" => SyntaxKind::SetLiteral,

        // Expressions
        "binary_operator" | "boolean_operator" | "comparison_operator" => SyntaxKind::BinaryExpr,
        nk::PARENTHESIZED_EXPRESSION | nk::TUPLE => SyntaxKind::ParenthesizedExpr,
        nk::EXPRESSION_LIST => SyntaxKind::TupleExpr,
        nk::CALL => SyntaxKind::CallExpr,
        nk::ARGUMENT_LIST => SyntaxKind::ArgumentList,
        nk::IDENTIFIER => SyntaxKind::ReferenceExpr,

        // Statements
        nk::ASSIGNMENT => SyntaxKind::AssignmentStmt,
        nk::MODULE => SyntaxKind::Module,

        nk::ERROR => SyntaxKind::Error,

        // Unknown
        other => SyntaxKind::Other(other.to_string()),
    }
}

/// What an identifier does at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// Assigned to: `x` in `x = 1`, `for x in ...`, `a, b = ...`
    Target,
    /// Declared without an assigned value: parameters, `def`/`class` names, imports
    Declaration,
    /// Non-binding label: attribute names, keyword-argument names
    Label,
    /// Everything else reads a variable
    Reference,
}

impl IdentifierRole {
    pub fn into_kind(self) -> SyntaxKind {
        match self {
            IdentifierRole::Target => SyntaxKind::TargetExpr,
            IdentifierRole::Declaration => SyntaxKind::NameDecl,
            IdentifierRole::Label => SyntaxKind::Name,
            IdentifierRole::Reference => SyntaxKind::ReferenceExpr,
        }
    }
}

/// Surroundings of an identifier, as seen while building the arena
#[derive(Debug, Clone, Copy)]
pub struct IdentifierContext<'a> {
    /// Grammar kind of the parent node
    pub parent: &'a str,
    /// Field the identifier occupies in its parent
    pub field: Option<&'a str>,
    /// Field the parent occupies in the grandparent
    pub parent_field: Option<&'a str>,
    /// Grammar kind of the grandparent node
    pub grandparent: Option<&'a str>,
    /// Identifier is the parent's first child
    pub first_in_parent: bool,
}

/// Classify an identifier by its grammatical position
pub fn identifier_role(ctx: &IdentifierContext) -> IdentifierRole {
    use IdentifierRole::*;

    let field_is = |name: &str| ctx.field == Some(name);

    match ctx.parent {
        nk::ASSIGNMENT if field_is("left") => Target,
        nk::PATTERN_LIST | nk::TUPLE_PATTERN | nk::LIST_PATTERN | nk::AS_PATTERN_TARGET => Target,
        nk::LIST_SPLAT_PATTERN => match ctx.grandparent {
            Some(nk::PARAMETERS) | Some(nk::LAMBDA_PARAMETERS) => Declaration,
            _ => Target,
        },
        nk::FOR_STATEMENT | nk::FOR_IN_CLAUSE if field_is("left") => Target,
        nk::NAMED_EXPRESSION if field_is("name") => Target,

        nk::FUNCTION_DEF | nk::CLASS_DEF if field_is("name") => Declaration,
        nk::PARAMETERS | nk::LAMBDA_PARAMETERS | nk::DICTIONARY_SPLAT_PATTERN => Declaration,
        nk::DEFAULT_PARAMETER | nk::TYPED_DEFAULT_PARAMETER if field_is("name") => Declaration,
        nk::TYPED_PARAMETER if ctx.first_in_parent => Declaration,

        nk::ALIASED_IMPORT if field_is("alias") => Declaration,
        nk::ALIASED_IMPORT => Label,
        nk::DOTTED_NAME => match ctx.grandparent {
            // `import a.b` binds `a`
            Some(nk::IMPORT_STATEMENT) if ctx.first_in_parent => Declaration,
            // `from m import name`
            Some(nk::IMPORT_FROM_STATEMENT) if ctx.parent_field == Some("name") => Declaration,
            _ => Label,
        },

        nk::ATTRIBUTE if field_is("attribute") => Label,
        nk::KEYWORD_ARGUMENT if field_is("name") => Label,
        nk::GLOBAL_STATEMENT | nk::NONLOCAL_STATEMENT => Label,

        _ => Reference,
    }
}

/// Kinds that open a new name scope
pub fn is_scope(kind: &str) -> bool {
    matches!(
        kind,
        nk::MODULE
            | nk::FUNCTION_DEF
            | nk::CLASS_DEF
            | nk::LAMBDA
            | nk::LIST_COMPREHENSION
            | nk::SET_COMPREHENSION
            | nk::DICTIONARY_COMPREHENSION
            | nk::GENERATOR_EXPRESSION
    )
}

/// Comprehension scopes bind their loop variables before the element
/// expression runs, even though the element comes first in the text.
pub fn is_comprehension_scope(kind: &str) -> bool {
    matches!(
        kind,
        nk::LIST_COMPREHENSION
            | nk::SET_COMPREHENSION
            | nk::DICTIONARY_COMPREHENSION
            | nk::GENERATOR_EXPRESSION
    )
}

/// Target patterns that wrap identifiers on an assignment's left side
pub fn is_target_pattern(kind: &str) -> bool {
    matches!(
        kind,
        nk::PATTERN_LIST | nk::TUPLE_PATTERN | nk::LIST_PATTERN | nk::LIST_SPLAT_PATTERN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(parent: &'a str, field: Option<&'a str>) -> IdentifierContext<'a> {
        IdentifierContext {
            parent,
            field,
            parent_field: None,
            grandparent: None,
            first_in_parent: false,
        }
    }

    #[test]
    fn test_map_literal_kinds() {
        assert_eq!(map_node_kind("string"), SyntaxKind::StringLiteral);
        assert_eq!(map_node_kind("integer"), SyntaxKind::IntegerLiteral);
        assert_eq!(map_node_kind("dictionary"), SyntaxKind::DictLiteral);
        assert_eq!(map_node_kind("comparison_operator"), SyntaxKind::BinaryExpr);
        assert_eq!(
            map_node_kind("list_comprehension"),
            SyntaxKind::Other("list_comprehension".into())
        );
    }

    #[test]
    fn test_assignment_sides() {
        assert_eq!(identifier_role(&ctx("assignment", Some("left"))), IdentifierRole::Target);
        assert_eq!(
            identifier_role(&ctx("assignment", Some("right"))),
            IdentifierRole::Reference
        );
        assert_eq!(
            identifier_role(&ctx("augmented_assignment", Some("left"))),
            IdentifierRole::Reference
        );
    }

    #[test]
    fn test_declarations_and_labels() {
        assert_eq!(
            identifier_role(&ctx("function_definition", Some("name"))),
            IdentifierRole::Declaration
        );
        assert_eq!(identifier_role(&ctx("parameters", None)), IdentifierRole::Declaration);
        assert_eq!(
            identifier_role(&ctx("attribute", Some("attribute"))),
            IdentifierRole::Label
        );
        assert_eq!(
            identifier_role(&ctx("attribute", Some("object"))),
            IdentifierRole::Reference
        );
        assert_eq!(
            identifier_role(&ctx("keyword_argument", Some("name"))),
            IdentifierRole::Label
        );
    }

    #[test]
    fn test_starred_target_vs_star_args() {
        let mut c = ctx("list_splat_pattern", None);
        c.grandparent = Some("pattern_list");
        assert_eq!(identifier_role(&c), IdentifierRole::Target);
        c.grandparent = Some("parameters");
        assert_eq!(identifier_role(&c), IdentifierRole::Declaration);
    }

    #[test]
    fn test_import_names() {
        let mut c = ctx("dotted_name", None);
        c.grandparent = Some("import_statement");
        c.first_in_parent = true;
        assert_eq!(identifier_role(&c), IdentifierRole::Declaration);
        c.first_in_parent = false;
        assert_eq!(identifier_role(&c), IdentifierRole::Label);
    }

    #[test]
    fn test_scopes() {
        assert!(is_scope("function_definition"));
        assert!(is_scope("generator_expression"));
        assert!(!is_scope("if_statement"));
        assert!(is_comprehension_scope("list_comprehension"));
        assert!(!is_comprehension_scope("lambda"));
    }
}
