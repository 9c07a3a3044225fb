//! Scaffold command
//!
//! Generates the files of one artifact family for a model.
//!
//! # Example
//!
//! ```bash
//! crudgen model user \
//!   email:string:true \
//!   age:number:false:18
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use crudgen::config::GeneratorConfig;
use crudgen::scaffold::{ArtifactFamily, ScaffoldGenerator};

pub struct ScaffoldCommand {
    model: String,
    fields: Vec<String>,
    family: ArtifactFamily,
}

impl ScaffoldCommand {
    pub const fn new(model: String, fields: Vec<String>, family: ArtifactFamily) -> Self {
        Self {
            model,
            fields,
            family,
        }
    }

    pub fn execute(self, root: Option<PathBuf>, config_file: Option<&Path>) -> Result<()> {
        let project_root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let config = GeneratorConfig::load(&project_root, config_file)
            .context("Failed to load configuration")?;

        println!(
            "\n{} {} {} {}",
            style("Scaffolding").cyan().bold(),
            style(self.family).cyan(),
            style("for").cyan().bold(),
            style(&self.model).green().bold()
        );

        let generator = ScaffoldGenerator::new(self.model, self.fields, self.family, config)
            .context("Failed to create scaffold generator")?;

        let files = generator
            .generate()
            .context("Failed to generate scaffold files")?;

        let report = generator.write(&files)?;

        for dir in &report.created_dirs {
            println!(
                "  {} Directory '{}' created",
                style("📁").bold(),
                style(dir.display()).dim()
            );
        }

        for file in &files {
            println!(
                "  {} {} created in '{}'",
                style("✓").green(),
                file.description,
                style(file.path.display()).dim()
            );
        }

        println!("\n{}", style("Next steps:").cyan().bold());
        for (index, step) in generator
            .family()
            .next_steps(generator.model_name())
            .iter()
            .enumerate()
        {
            println!("  {}. {}", index + 1, style(step).yellow());
        }

        Ok(())
    }
}
