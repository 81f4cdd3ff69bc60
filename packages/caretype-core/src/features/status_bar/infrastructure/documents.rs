//! In-memory document store

use std::collections::HashMap;

use crate::features::parsing::{Parser, SyntaxTree};
use crate::features::status_bar::domain::EditorId;
use crate::features::status_bar::ports::DocumentSource;
use crate::shared::models::Result;

/// Parsed documents keyed by editor, re-parsed on every change
pub struct InMemoryDocuments<P: Parser> {
    parser: P,
    trees: HashMap<EditorId, SyntaxTree>,
}

impl<P: Parser> InMemoryDocuments<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            trees: HashMap::new(),
        }
    }

    /// Parse `source` and make it the editor's current document
    pub fn open(&mut self, editor: EditorId, source: &str, file_path: &str) -> Result<&SyntaxTree> {
        let tree = self.parser.parse(source, file_path)?;
        tracing::debug!(
            editor = %editor,
            file = file_path,
            errors = tree.error_count(),
            "document parsed"
        );
        self.trees.insert(editor.clone(), tree);
        Ok(&self.trees[&editor])
    }

    /// Replace the editor's document after an edit
    pub fn update(&mut self, editor: EditorId, source: &str) -> Result<&SyntaxTree> {
        let file_path = self
            .trees
            .get(&editor)
            .map(|tree| tree.file_path().to_string())
            .unwrap_or_default();
        self.open(editor, source, &file_path)
    }

    pub fn close(&mut self, editor: &EditorId) -> bool {
        self.trees.remove(editor).is_some()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl<P: Parser> DocumentSource for InMemoryDocuments<P> {
    fn syntax_tree(&self, editor: &EditorId) -> Option<&SyntaxTree> {
        self.trees.get(editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::TreeSitterParser;

    #[test]
    fn test_open_update_close() {
        let mut docs = InMemoryDocuments::new(TreeSitterParser::python());
        let editor = EditorId::new("main.py");

        docs.open(editor.clone(), "x = 1\n", "main.py").unwrap();
        assert_eq!(docs.syntax_tree(&editor).unwrap().source(), "x = 1\n");

        let tree = docs.update(editor.clone(), "x = 'a'\n").unwrap();
        assert_eq!(tree.file_path(), "main.py");
        assert_eq!(tree.source(), "x = 'a'\n");

        assert!(docs.close(&editor));
        assert!(!docs.close(&editor));
        assert!(docs.syntax_tree(&editor).is_none());
        assert!(docs.is_empty());
    }
}
