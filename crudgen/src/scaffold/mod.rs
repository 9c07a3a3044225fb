//! CRUD scaffold generator implementation
//!
//! This module turns a model name and a list of `name:type:required:default`
//! field tokens into a Mongoose model, Joi validation, Express controller and
//! Express router, plus shared middleware for the upload and user families.

pub mod family;
pub mod field;
pub mod generator;
pub mod guard;
pub mod helpers;
pub mod render;
pub mod templates;

pub use family::{ArtifactFamily, ArtifactKind};
pub use field::{FieldDescriptor, FieldKind};
pub use generator::{GeneratedFile, ScaffoldGenerator, WriteReport};
pub use helpers::TemplateHelpers;
pub use render::{render_schema_fields, render_validation_fields, ValidationMode};
pub use templates::TemplateRegistry;
