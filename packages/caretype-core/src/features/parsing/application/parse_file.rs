//! Parse file use case

use std::path::Path;

use crate::features::parsing::domain::SyntaxTree;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{CaretypeError, Result};

/// Parse file use case
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parse in-memory source
    pub fn execute(&self, source: &str, file_path: &str) -> Result<SyntaxTree> {
        self.parser.parse(source, file_path)
    }

    /// Read a file from disk and parse it
    pub fn execute_path(&self, path: &Path) -> Result<SyntaxTree> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !self.parser.supports_extension(ext) {
            return Err(CaretypeError::parse(format!(
                "{} parser does not support '{}'",
                self.parser.language_name(),
                path.display()
            )));
        }

        let source = std::fs::read_to_string(path)?;
        self.execute(&source, &path.to_string_lossy())
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}
