//! CRUD scaffold generator orchestrator
//!
//! This module coordinates the generation of all files for a resource.
//! It uses the field renderers, the family descriptors and the template
//! registry to plan every artifact, then checks every target path before the
//! first file is written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::family::{ArtifactFamily, ArtifactKind};
use super::guard;
use super::helpers::TemplateHelpers;
use super::render::{render_schema_fields, render_validation_fields, ValidationMode};
use super::templates::TemplateRegistry;
use crate::config::GeneratorConfig;
use crate::error::{Result, ScaffoldError};

/// CRUD scaffold generator
pub struct ScaffoldGenerator {
    /// Model name as typed (e.g. "user", "blogPost")
    model_name: String,
    /// Raw field tokens supplied by the user
    fields: Vec<String>,
    /// Which set of artifacts to produce
    family: ArtifactFamily,
    /// Output layout and project root
    config: GeneratorConfig,
    /// Template registry
    templates: TemplateRegistry,
}

impl ScaffoldGenerator {
    /// Create a new scaffold generator
    ///
    /// # Arguments
    ///
    /// * `model_name` - Name of the model (e.g. "user", "blogPost")
    /// * `field_specs` - Field tokens (e.g. `["email:string:true", "age:number:false:18"]`)
    /// * `family` - Artifact family to generate
    /// * `config` - Output configuration, including the project root
    ///
    /// # Errors
    ///
    /// Returns an error if the model name is empty or contains path
    /// separators or whitespace, or if the built-in templates fail to compile.
    pub fn new(
        model_name: String,
        field_specs: Vec<String>,
        family: ArtifactFamily,
        config: GeneratorConfig,
    ) -> Result<Self> {
        if model_name.is_empty()
            || model_name
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            return Err(ScaffoldError::InvalidModelName(model_name));
        }

        let fields: Vec<String> = field_specs
            .into_iter()
            .filter(|spec| !spec.trim().is_empty())
            .collect();

        let templates = TemplateRegistry::new()?;

        Ok(Self {
            model_name,
            fields,
            family,
            config,
            templates,
        })
    }

    /// Model name as given
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Artifact family being generated
    #[must_use]
    pub const fn family(&self) -> ArtifactFamily {
        self.family
    }

    /// Project root every path is resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Render every artifact of the family, without touching the disk
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let metadata = self.model_metadata();

        self.family
            .artifacts()
            .iter()
            .map(|&kind| {
                let content = self.templates.render(self.family, kind, &metadata)?;
                let path = self.artifact_path(kind);
                debug!(kind = %kind, path = %path.display(), "rendered artifact");
                Ok(GeneratedFile {
                    path,
                    content,
                    kind,
                    description: self.describe(kind),
                })
            })
            .collect()
    }

    /// Check every target path, then create directories and write all files
    ///
    /// Nothing is written unless every path is free.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Collision`] for the first path that already
    /// exists, or [`ScaffoldError::Io`] if a directory or file cannot be
    /// written.
    pub fn write(&self, files: &[GeneratedFile]) -> Result<WriteReport> {
        let root = &self.config.root;
        let targets: Vec<PathBuf> = files.iter().map(|file| root.join(&file.path)).collect();

        guard::check_all(
            targets
                .iter()
                .zip(files)
                .map(|(target, file)| (target.as_path(), file.kind.label())),
            &self.model_name,
        )?;

        let mut report = WriteReport::default();

        for target in &targets {
            let Some(parent) = target.parent() else {
                continue;
            };
            if parent.exists() {
                continue;
            }
            let missing: Vec<&Path> = parent
                .ancestors()
                .take_while(|dir| !dir.exists())
                .collect();
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            for dir in missing.into_iter().rev() {
                debug!(dir = %dir.display(), "created directory");
                report
                    .created_dirs
                    .push(dir.strip_prefix(root).unwrap_or(dir).to_path_buf());
            }
        }

        for (target, file) in targets.iter().zip(files) {
            fs::write(target, &file.content).map_err(|source| ScaffoldError::Io {
                path: target.clone(),
                source,
            })?;
            debug!(path = %target.display(), "wrote artifact");
            report.written.push(file.path.clone());
        }

        Ok(report)
    }

    /// Generate and write in one step
    ///
    /// # Errors
    ///
    /// See [`Self::generate`] and [`Self::write`].
    pub fn run(&self) -> Result<(Vec<GeneratedFile>, WriteReport)> {
        let files = self.generate()?;
        let report = self.write(&files)?;
        Ok((files, report))
    }

    /// Get model metadata for templates
    ///
    /// This fills every named slot the templates use.
    fn model_metadata(&self) -> serde_json::Value {
        let placeholder = self.family.uses_placeholder();
        let schema_tokens = self.with_prepended(true);
        let rule_tokens = self.with_prepended(self.family.validates_prepended());

        serde_json::json!({
            "model_name": self.model_name,
            "model_pascal": TemplateHelpers::capitalize(&self.model_name),
            "model_plural": TemplateHelpers::to_plural(&self.model_name),
            "schema_fields": render_schema_fields(&schema_tokens, placeholder),
            "create_rules": render_validation_fields(&rule_tokens, ValidationMode::Create, placeholder),
            "update_rules": render_validation_fields(&rule_tokens, ValidationMode::Update, placeholder),
        })
    }

    /// User fields, optionally preceded by the family's fixed fields
    fn with_prepended(&self, prepend: bool) -> Vec<&str> {
        let prepended: &[&str] = if prepend {
            self.family.prepended_fields()
        } else {
            &[]
        };
        prepended
            .iter()
            .copied()
            .chain(self.fields.iter().map(String::as_str))
            .collect()
    }

    /// Path of an artifact, relative to the project root
    fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        let layout = &self.config.layout;
        let dir = match kind {
            ArtifactKind::Model => &layout.models,
            ArtifactKind::Validation => &layout.validations,
            ArtifactKind::Controller => &layout.controllers,
            ArtifactKind::Route => &layout.routes,
            ArtifactKind::UploadMiddleware | ArtifactKind::AuthMiddleware => &layout.middlewares,
        };
        let file_name = kind.fixed_stem().map_or_else(
            || self.config.artifact_file_name(&self.model_name, kind.label()),
            |stem| self.config.middleware_file_name(stem),
        );
        dir.join(file_name)
    }

    fn describe(&self, kind: ArtifactKind) -> String {
        let model = &self.model_name;
        match kind {
            ArtifactKind::Model => format!("Model '{model}'"),
            ArtifactKind::Validation => format!("Validation '{model}'"),
            ArtifactKind::Controller => format!("Controller '{model}'"),
            ArtifactKind::Route => format!("Route '{model}'"),
            ArtifactKind::UploadMiddleware => "Middleware 'multer'".to_string(),
            ArtifactKind::AuthMiddleware => "Middleware 'auth'".to_string(),
        }
    }
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// File description for user feedback
    pub description: String,
}

/// What a successful write touched, relative to the project root
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Directories that did not exist before the run
    pub created_dirs: Vec<PathBuf>,
    /// Files written, in write order
    pub written: Vec<PathBuf>,
}
