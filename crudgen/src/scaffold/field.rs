//! Field descriptor parser for the scaffold DSL
//!
//! Each field is given on the command line as a colon-delimited token:
//!
//! ```text
//! name[:type[:required[:default]]]
//! ```
//!
//! # Supported Field Types
//!
//! - `string` - Mongoose `String`, Joi `joi.string()` (default)
//! - `number` - Mongoose `Number`, Joi `joi.number()`
//! - `boolean` - Mongoose `Boolean`, Joi `joi.boolean()`
//! - `date` - Mongoose `Date`, Joi `joi.date()`
//!
//! Any other tag is passed through to the schema with its first letter
//! capitalized and validated with `joi.any()`.
//!
//! # Examples
//!
//! ```text
//! title                   → title: String, optional
//! email:string:true       → email: String, required
//! age:number:false:18     → age: Number, optional, default 18
//! color:string:false:red  → color: String, optional, default 'red'
//! tags:array              → tags: Array, validated with joi.any()
//! ```

use std::fmt;

use super::helpers::TemplateHelpers;

/// Segment delimiter inside a field token
pub const DELIMITER: char = ':';

/// A single field parsed from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, taken verbatim from the first segment
    pub name: String,
    /// Type tag as written by the user (`string` when omitted)
    pub type_tag: String,
    /// Validator family resolved from the type tag
    pub kind: FieldKind,
    /// Whether the field is mandatory on create
    pub required: bool,
    /// Literal default value, if a fourth segment was supplied
    pub default: Option<String>,
}

/// Recognized field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text
    String,
    /// Numeric
    Number,
    /// True/false
    Boolean,
    /// Date
    Date,
    /// Any tag not listed above
    Other,
}

impl FieldDescriptor {
    /// Parse a field descriptor from a raw token
    ///
    /// Parsing never fails: missing segments take their defaults and a token
    /// without any delimiter is a bare field name. Everything after the third
    /// delimiter belongs to the default value, so defaults may contain colons.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::scaffold::field::{FieldDescriptor, FieldKind};
    /// let field = FieldDescriptor::parse("age:number:false:18");
    /// assert_eq!(field.name, "age");
    /// assert_eq!(field.kind, FieldKind::Number);
    /// assert!(!field.required);
    /// assert_eq!(field.default.as_deref(), Some("18"));
    ///
    /// let field = FieldDescriptor::parse("title");
    /// assert_eq!(field.kind, FieldKind::String);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = input.splitn(4, DELIMITER);

        let name = parts.next().unwrap_or_default().to_string();
        let type_tag = parts
            .next()
            .filter(|tag| !tag.is_empty())
            .unwrap_or("string")
            .to_string();
        let required = parts
            .next()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"));
        let default = parts.next().map(str::to_string);

        Self {
            kind: FieldKind::from_tag(&type_tag),
            name,
            type_tag,
            required,
            default,
        }
    }

    /// Mongoose schema type name (`string` → `String`, `objectId` → `ObjectId`)
    #[must_use]
    pub fn schema_type(&self) -> String {
        TemplateHelpers::capitalize(&self.type_tag)
    }

    /// Default value as it appears in the schema, quoted for string fields
    ///
    /// The type tag is matched in any case, so `STRING` quotes too.
    ///
    /// ```
    /// # use crudgen::scaffold::field::FieldDescriptor;
    /// assert_eq!(FieldDescriptor::parse("color:string:false:red").default_literal().as_deref(), Some("'red'"));
    /// assert_eq!(FieldDescriptor::parse("count:number:true:0").default_literal().as_deref(), Some("0"));
    /// assert_eq!(FieldDescriptor::parse("count:number").default_literal(), None);
    /// ```
    #[must_use]
    pub fn default_literal(&self) -> Option<String> {
        self.default.as_ref().map(|value| match self.kind {
            FieldKind::String => format!("'{value}'"),
            _ => value.clone(),
        })
    }
}

impl FieldKind {
    /// Resolve a type tag, ignoring case
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            _ => Self::Other,
        }
    }

    /// Joi validator expression for this kind
    #[must_use]
    pub const fn validator(self) -> &'static str {
        match self {
            Self::String => "joi.string()",
            Self::Number => "joi.number()",
            Self::Boolean => "joi.boolean()",
            Self::Date => "joi.date()",
            Self::Other => "joi.any()",
        }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let type_tag = &self.type_tag;
        let required = self.required;
        write!(f, "{name}:{type_tag}:{required}")?;
        if let Some(default) = &self.default {
            write!(f, ":{default}")?;
        }
        Ok(())
    }
}
