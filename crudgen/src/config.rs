//! Generator configuration
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `crudgen.toml` in the project root, or an explicit `--config` file
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudgen.toml
//! extension = "js"
//!
//! [layout]
//! models = "models"
//! validations = "validations"
//! controllers = "controllers"
//! routes = "routes"
//! middlewares = "middlewares"
//! ```
//!
//! Environment override example: `CRUDGEN_LAYOUT__MODELS=schemas`.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file name, looked up in the project root
pub const CONFIG_FILE: &str = "crudgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CRUDGEN_";

/// Output directory names, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Mongoose models
    pub models: PathBuf,
    /// Joi validation schemas
    pub validations: PathBuf,
    /// Express controllers
    pub controllers: PathBuf,
    /// Express routers
    pub routes: PathBuf,
    /// Shared middleware (upload and auth)
    pub middlewares: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            models: PathBuf::from("models"),
            validations: PathBuf::from("validations"),
            controllers: PathBuf::from("controllers"),
            routes: PathBuf::from("routes"),
            middlewares: PathBuf::from("middlewares"),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Project root every output path is resolved against
    pub root: PathBuf,

    /// Extension of generated files, without the dot
    pub extension: String,

    /// Output directory names
    pub layout: Layout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "js".to_string(),
            layout: Layout::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults rooted at `root`
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Load configuration for a project root
    ///
    /// Reads `config_file` when given, otherwise `<root>/crudgen.toml` if it
    /// exists, then applies `CRUDGEN_*` environment overrides. The `root`
    /// argument always wins over any `root` key found in those sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed.
    pub fn load(root: &Path, config_file: Option<&Path>) -> Result<Self> {
        let file = config_file.map_or_else(|| root.join(CONFIG_FILE), Path::to_path_buf);

        let config: Self = Figment::from(Serialized::defaults(Self::with_root(root)))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(Self {
            root: root.to_path_buf(),
            ..config
        })
    }

    /// File name of a per-model artifact (`user.model.js`)
    #[must_use]
    pub fn artifact_file_name(&self, model: &str, kind: &str) -> String {
        let extension = &self.extension;
        format!("{model}.{kind}.{extension}")
    }

    /// File name of a shared middleware (`auth.js`)
    #[must_use]
    pub fn middleware_file_name(&self, stem: &str) -> String {
        let extension = &self.extension;
        format!("{stem}.{extension}")
    }
}
