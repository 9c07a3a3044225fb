//! crudgen CLI tool

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::ScaffoldCommand;
use console::style;
use crudgen::scaffold::ArtifactFamily;
use crudgen::ScaffoldError;

const FIELD_HELP: &str = "Field format: name[:type[:required[:default]]]
  type      string (default), number, boolean, date, or any Mongoose type
  required  true or false (default false)
  default   literal default value

Example: crudgen model user name:string:true:John age:number:false:18";

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "CRUD scaffolding generator for Express and Mongoose", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/crudgen.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model, validation, controller and route
    #[command(after_help = FIELD_HELP)]
    Model {
        /// Model name (e.g. `user`, `blogPost`)
        model: String,
        /// Field definitions (e.g. `email:string:true`, `age:number:false:18`)
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
    },
    /// Generate a file-upload resource with multer middleware
    #[command(after_help = FIELD_HELP)]
    Upload {
        /// Model name (e.g. `photo`)
        model: String,
        /// Extra field definitions, added after `name` and `alt`
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
    },
    /// Generate a user resource with register, login and JWT middleware
    #[command(after_help = FIELD_HELP)]
    User {
        /// Model name (e.g. `user`)
        model: String,
        /// Extra field definitions, added after `email` and `password`
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
    },
}

impl Commands {
    fn into_scaffold(self) -> ScaffoldCommand {
        match self {
            Self::Model { model, fields } => ScaffoldCommand::new(model, fields, ArtifactFamily::Model),
            Self::Upload { model, fields } => {
                ScaffoldCommand::new(model, fields, ArtifactFamily::Upload)
            }
            Self::User { model, fields } => ScaffoldCommand::new(model, fields, ArtifactFamily::User),
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Err(err) = crudgen::observability::init(cli.verbose) {
        eprintln!("{} {err:#}", style("warning:").yellow());
    }

    cli.command
        .into_scaffold()
        .execute(cli.root, cli.config.as_deref())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let marker = match err.downcast_ref::<ScaffoldError>() {
                Some(ScaffoldError::Collision { .. }) => "❌ Collision:",
                _ => "❌ Error:",
            };
            eprintln!("{} {err:#}", style(marker).red().bold());
            ExitCode::FAILURE
        }
    }
}
