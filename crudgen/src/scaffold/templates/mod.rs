//! Boilerplate templates with named slots
//!
//! Every generated file is a handlebars template registered under
//! `<family>.<kind>` (e.g. `user.controller`). Rendering runs in strict mode,
//! so a template referencing a slot the generator does not fill is an error
//! instead of silently producing an empty string.

use handlebars::Handlebars;
use serde::Serialize;

use super::family::{ArtifactFamily, ArtifactKind};
use crate::error::Result;

pub mod files;
pub use files::*;

/// Compiled templates for every family
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile all built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for family in ArtifactFamily::ALL {
            for &kind in family.artifacts() {
                handlebars.register_template_string(
                    &family.template_name(kind),
                    Self::source(family, kind),
                )?;
            }
        }

        Ok(Self { handlebars })
    }

    /// Raw template text for a family's artifact
    #[must_use]
    pub const fn source(family: ArtifactFamily, kind: ArtifactKind) -> &'static str {
        match (family, kind) {
            (ArtifactFamily::User, ArtifactKind::Model) => USER_MODEL,
            (_, ArtifactKind::Model) => MODEL,
            (ArtifactFamily::Model, ArtifactKind::Validation) => VALIDATION,
            (ArtifactFamily::Upload, ArtifactKind::Validation) => UPLOAD_VALIDATION,
            (ArtifactFamily::User, ArtifactKind::Validation) => USER_VALIDATION,
            (ArtifactFamily::Model, ArtifactKind::Controller) => CONTROLLER,
            (ArtifactFamily::Upload, ArtifactKind::Controller) => UPLOAD_CONTROLLER,
            (ArtifactFamily::User, ArtifactKind::Controller) => USER_CONTROLLER,
            (ArtifactFamily::Model, ArtifactKind::Route) => ROUTE,
            (ArtifactFamily::Upload, ArtifactKind::Route) => UPLOAD_ROUTE,
            (ArtifactFamily::User, ArtifactKind::Route) => USER_ROUTE,
            (_, ArtifactKind::UploadMiddleware) => UPLOAD_MIDDLEWARE,
            (_, ArtifactKind::AuthMiddleware) => AUTH_MIDDLEWARE,
        }
    }

    /// Render a family's artifact with the given slot values
    ///
    /// # Errors
    ///
    /// Returns an error if a slot used by the template is missing from `context`.
    pub fn render<T: Serialize>(
        &self,
        family: ArtifactFamily,
        kind: ArtifactKind,
        context: &T,
    ) -> Result<String> {
        Ok(self.handlebars.render(&family.template_name(kind), context)?)
    }
}
