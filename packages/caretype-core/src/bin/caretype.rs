//! Caretype CLI
//!
//! Shows the label the status bar would display for a position in a file.
//!
//! # Usage
//!
//! ```bash
//! # Label of the variable at line 3, column 4
//! caretype infer script.py --at 3:4
//!
//! # Every assignment target in the file, as JSON
//! caretype defs script.py --json
//! ```

use clap::{Parser as ClapParser, Subcommand};
use caretype_core::features::parsing::ParseFileUseCase;
use caretype_core::{CaretypeConfig, InferAtCursorUseCase, TreeSitterParser};
use std::path::{Path, PathBuf};

#[derive(ClapParser)]
#[command(name = "caretype")]
#[command(about = "Best-effort type hints for Python variables", long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the variable at a position
    Infer {
        /// Python source file
        file: PathBuf,

        /// Cursor position as LINE:COL (1-based line, 0-based column)
        #[arg(long, value_parser = parse_position)]
        at: (u32, u32),

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List every assignment target with its label
    Defs {
        /// Python source file
        file: PathBuf,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_position(raw: &str) -> Result<(u32, u32), String> {
    let (line, col) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{}'", raw))?;
    let line = line
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid line '{}': {}", line, e))?;
    let col = col
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    if line == 0 {
        return Err("lines start at 1".to_string());
    }
    Ok((line, col))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    caretype_core::init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let use_case = InferAtCursorUseCase::new(config.inference.clone());

    match cli.command {
        Commands::Infer { file, at, json } => {
            infer(&use_case, &config, &file, at, json)?;
        }
        Commands::Defs { file, json } => {
            list_definitions(&use_case, &file, json)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CaretypeConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => CaretypeConfig::from_yaml_file(path)?,
        None => CaretypeConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn infer(
    use_case: &InferAtCursorUseCase,
    config: &CaretypeConfig,
    file: &Path,
    (line, col): (u32, u32),
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = ParseFileUseCase::new(TreeSitterParser::python()).execute_path(file)?;
    if tree.has_errors() {
        tracing::warn!(file = %file.display(), errors = tree.error_count(), "source has syntax errors");
    }

    let result = use_case.infer_at(&tree, line, col);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Some(result) => println!("{}: {}", result.variable_name, result.type_label),
        None => println!(
            "{}: {}",
            config.status_bar.unknown_name, config.status_bar.empty_label
        ),
    }
    Ok(())
}

fn list_definitions(
    use_case: &InferAtCursorUseCase,
    file: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = ParseFileUseCase::new(TreeSitterParser::python()).execute_path(file)?;
    let hints = use_case.definitions(&tree);

    if json {
        println!("{}", serde_json::to_string_pretty(&hints)?);
        return Ok(());
    }

    for hint in &hints {
        println!(
            "{:>8}  {}: {}",
            hint.span.to_string(),
            hint.result.variable_name,
            hint.result.type_label
        );
    }
    Ok(())
}
