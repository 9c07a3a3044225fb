//! Artifact families
//!
//! A family decides which files a run emits, which fields are always present
//! ahead of the user's own, and which boilerplate each file is built from.
//!
//! | Family   | Extra fields          | Emits                                        |
//! |----------|-----------------------|----------------------------------------------|
//! | `model`  | none                  | model, validation, controller, route         |
//! | `upload` | `name`, `alt`         | the four above (no update) + `multer` middleware |
//! | `user`   | `email`, `password`   | the four above + register/login + `auth` middleware |

use std::fmt;

use super::helpers::TemplateHelpers;

/// Kind of file produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Mongoose schema
    Model,
    /// Joi validation schemas
    Validation,
    /// Express request handlers
    Controller,
    /// Express router
    Route,
    /// Multer storage configuration, shared by upload models
    UploadMiddleware,
    /// JWT verification, shared by user models
    AuthMiddleware,
}

impl ArtifactKind {
    /// Label used in file names and messages (`user.model.js`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Validation => "validation",
            Self::Controller => "controller",
            Self::Route => "route",
            Self::UploadMiddleware | Self::AuthMiddleware => "middleware",
        }
    }

    /// Fixed file stem for shared middleware, `None` for per-model files
    #[must_use]
    pub const fn fixed_stem(self) -> Option<&'static str> {
        match self {
            Self::UploadMiddleware => Some("multer"),
            Self::AuthMiddleware => Some("auth"),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generator variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactFamily {
    /// Plain CRUD resource
    #[default]
    Model,
    /// CRUD resource backed by an uploaded file
    Upload,
    /// User resource with registration, login and JWT auth
    User,
}

impl ArtifactFamily {
    /// Every family, in CLI order
    pub const ALL: [Self; 3] = [Self::Model, Self::Upload, Self::User];

    /// Short name, used as the template namespace
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Upload => "upload",
            Self::User => "user",
        }
    }

    /// Files emitted by this family, in write order
    #[must_use]
    pub const fn artifacts(self) -> &'static [ArtifactKind] {
        use ArtifactKind::{AuthMiddleware, Controller, Model, Route, UploadMiddleware, Validation};
        match self {
            Self::Model => &[Model, Validation, Controller, Route],
            Self::Upload => &[Model, Validation, Controller, Route, UploadMiddleware],
            Self::User => &[Model, Validation, Controller, Route, AuthMiddleware],
        }
    }

    /// Field tokens placed ahead of the user's fields
    #[must_use]
    pub const fn prepended_fields(self) -> &'static [&'static str] {
        match self {
            Self::Model => &[],
            Self::Upload => &["name:string:true", "alt:string:true"],
            Self::User => &["email:string:true", "password:string:true"],
        }
    }

    /// Whether an empty field list gets the `attribut` placeholder
    #[must_use]
    pub const fn uses_placeholder(self) -> bool {
        matches!(self, Self::Model)
    }

    /// Whether prepended fields also go through the validation renderer
    ///
    /// User email rules carry `.email()`, so they live in the template.
    #[must_use]
    pub const fn validates_prepended(self) -> bool {
        matches!(self, Self::Upload)
    }

    /// Registry name of the template for `kind`
    #[must_use]
    pub fn template_name(self, kind: ArtifactKind) -> String {
        let family = self.name();
        let kind = match kind {
            ArtifactKind::UploadMiddleware => "multer",
            ArtifactKind::AuthMiddleware => "auth",
            other => other.label(),
        };
        format!("{family}.{kind}")
    }

    /// Hints printed once the files are written
    #[must_use]
    pub fn next_steps(self, model: &str) -> Vec<String> {
        let route = TemplateHelpers::to_route_path(model);
        let mut steps = vec![format!(
            "Add app.use('{route}', {model}Routes) in server.js"
        )];
        match self {
            Self::Model => {}
            Self::Upload => steps.push("Install multer: npm install multer".to_string()),
            Self::User => steps.push(
                "Install jsonwebtoken and bcrypt, and add SECRET_KEY to .env".to_string(),
            ),
        }
        steps
    }
}

impl fmt::Display for ArtifactFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
