//! Frame model command line tool
//!
//! # Usage
//!
//! ```bash
//! # Print a summary of a model file
//! fmc check model.txt
//!
//! # Rewrite a model with compacted tags
//! fmc renumber model.txt model_out.txt
//!
//! # Split element 3 into four and save
//! fmc split model.txt model_out.txt --element 3 --segments 4
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use frame_model::prelude::*;

#[derive(Parser)]
#[command(name = "fmc")]
#[command(about = "Inspect and rewrite frame model solver files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a model and print its summary
    Check {
        /// Model file
        input: PathBuf,
    },

    /// Load a model and save it with compacted tags
    Renumber {
        input: PathBuf,
        output: PathBuf,
    },

    /// Load a model and write a JSON snapshot
    Snapshot {
        input: PathBuf,
        /// JSON output path
        output: PathBuf,
    },

    /// Split one element into equal segments and save
    Split {
        input: PathBuf,
        output: PathBuf,

        /// Tag of the element to split
        #[arg(short, long)]
        element: Tag,

        /// Number of segments
        #[arg(short, long, default_value = "2")]
        segments: usize,
    },
}

fn load(path: &Path) -> Result<FrameModel> {
    FrameModel::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let model = load(&input)?;
            println!("=== {} ===", input.display());
            println!("{}", model.summary());
        }
        Commands::Renumber { input, output } => {
            let mut model = load(&input)?;
            let before = model.summary();
            model
                .save_model(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;
            println!(
                "Renumbered {} node(s): max tag {} -> {}",
                before.nodes,
                before.max_node_tag,
                model.summary().max_node_tag
            );
        }
        Commands::Snapshot { input, output } => {
            let model = load(&input)?;
            std::fs::write(&output, model.to_json()?)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote snapshot to {}", output.display());
        }
        Commands::Split {
            input,
            output,
            element,
            segments,
        } => {
            let mut model = load(&input)?;
            if segments < 2 {
                bail!("--segments must be at least 2, got {}", segments);
            }
            let parts = model.split_element(element, segments);
            if parts.is_empty() {
                bail!("Element {} was not split: missing, or no free tags left", element);
            }
            println!(
                "Split element {} into {:?} with new nodes {:?}",
                element, parts.elements, parts.nodes
            );
            model
                .save_model(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;
        }
    }

    Ok(())
}
