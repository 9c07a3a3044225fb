//! crudgen library
//!
//! Scaffolding generator for Express and Mongoose projects. Field tokens of
//! the form `name[:type[:required[:default]]]` are rendered into a schema,
//! validation rules, CRUD handlers and a router.
//!
//! # Example
//!
//! ```rust,no_run
//! use crudgen::config::GeneratorConfig;
//! use crudgen::scaffold::{ArtifactFamily, ScaffoldGenerator};
//!
//! # fn main() -> crudgen::error::Result<()> {
//! let generator = ScaffoldGenerator::new(
//!     "user".to_string(),
//!     vec!["email:string:true".to_string(), "age:number:false:18".to_string()],
//!     ArtifactFamily::Model,
//!     GeneratorConfig::with_root("."),
//! )?;
//! let (_files, report) = generator.run()?;
//! assert_eq!(report.written.len(), 4);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use config::GeneratorConfig;
pub use error::ScaffoldError;
pub use scaffold::{ArtifactFamily, FieldDescriptor, ScaffoldGenerator, TemplateHelpers};
