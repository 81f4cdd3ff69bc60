//! Inferred type labels
//!
//! A closed set of labels rendered into the short strings shown in the
//! status bar.

use std::fmt;

/// Best-effort label for the value bound to a variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeLabel {
    Str,
    Int,
    List,
    Float,
    Dict,
    Set,
    /// `(1, 2)` or `1, 2`
    Tuple,
    /// `(x)`: a parenthesized value that is not known to be a tuple
    AmbiguousTuple,
    /// Operands of a binary expression, left to right
    Operands(Vec<TypeLabel>),
    /// Call with its classified arguments
    Call(Vec<TypeLabel>),
    /// Shape not covered, or a reference that does not resolve
    Unknown,
    /// Parse error node
    Error,
}

fn write_joined(f: &mut fmt::Formatter<'_>, labels: &[TypeLabel]) -> fmt::Result {
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", label)?;
    }
    Ok(())
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeLabel::Str => write!(f, "str"),
            TypeLabel::Int => write!(f, "int"),
            TypeLabel::List => write!(f, "list"),
            TypeLabel::Float => write!(f, "float"),
            TypeLabel::Dict => write!(f, "dict"),
            TypeLabel::Set => write!(f, "set"),
            TypeLabel::Tuple => write!(f, "tuple"),
            TypeLabel::AmbiguousTuple => write!(f, "tuple?"),
            TypeLabel::Operands(operands) => write_joined(f, operands),
            TypeLabel::Call(args) => {
                // the callee is not resolved; every call renders as `f(...)`
                write!(f, "f(")?;
                write_joined(f, args)?;
                write!(f, ")")
            }
            TypeLabel::Unknown => write!(f, "?"),
            TypeLabel::Error => write!(f, ":("),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_labels() {
        assert_eq!(TypeLabel::Str.to_string(), "str");
        assert_eq!(TypeLabel::Dict.to_string(), "dict");
        assert_eq!(TypeLabel::AmbiguousTuple.to_string(), "tuple?");
        assert_eq!(TypeLabel::Unknown.to_string(), "?");
        assert_eq!(TypeLabel::Error.to_string(), ":(");
    }

    #[test]
    fn test_operands_join() {
        let label = TypeLabel::Operands(vec![TypeLabel::Int, TypeLabel::Float]);
        assert_eq!(label.to_string(), "int, float");
    }

    #[test]
    fn test_nested_operands_flatten_in_text() {
        let inner = TypeLabel::Operands(vec![TypeLabel::Int, TypeLabel::Int]);
        let label = TypeLabel::Operands(vec![inner, TypeLabel::Str]);
        assert_eq!(label.to_string(), "int, int, str");
    }

    #[test]
    fn test_call_rendering() {
        assert_eq!(TypeLabel::Call(vec![]).to_string(), "f()");
        assert_eq!(
            TypeLabel::Call(vec![TypeLabel::Int, TypeLabel::Str]).to_string(),
            "f(int, str)"
        );
    }
}
