//! Error types for scaffold generation

use std::path::PathBuf;

use thiserror::Error;

/// Scaffold generation error
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Target artifact already exists
    #[error("The file {} already exists ({kind} for '{entity}')", .path.display())]
    Collision {
        /// Path that is already taken
        path: PathBuf,
        /// Model the artifact belongs to
        entity: String,
        /// Artifact kind (model, validation, ...)
        kind: String,
    },

    /// Model name is empty
    #[error("Invalid model name: '{0}'. A model name is required")]
    InvalidModelName(String),

    /// Directory creation or file write failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Built-in template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration failed to load
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Whether this error is a collision with an existing file
    #[must_use]
    pub const fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }
}

/// Result alias for scaffold operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
