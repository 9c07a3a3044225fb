//! Field block renderers
//!
//! Turns a list of raw field tokens into the three text blocks every model
//! needs: Mongoose schema fields, Joi create rules and Joi update rules.
//! Each renderer parses the tokens itself, so the three blocks always agree
//! on field order and spelling.

use super::field::FieldDescriptor;

/// Name of the field emitted when a model has no fields
pub const PLACEHOLDER_FIELD: &str = "attribut";

const SCHEMA_PLACEHOLDER: &str = "  attribut: {\n      type: String,\n  }";
const RULE_PLACEHOLDER: &str = "  attribut: joi.string()\n";

const SCHEMA_SEPARATOR: &str = ",\n";
const RULE_SEPARATOR: &str = ",\n    ";

/// Which Joi schema a rule block is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Creation payloads honour the `required` flag
    Create,
    /// Updates are partial, no field is ever required
    Update,
}

/// Render Mongoose schema fields
///
/// With no fields and `placeholder` set, a single `attribut: String` field
/// is emitted so the schema is never empty.
///
/// # Examples
///
/// ```
/// # use crudgen::scaffold::render::render_schema_fields;
/// let block = render_schema_fields(&["count:number:true:0"], false);
/// assert_eq!(
///     block,
///     "    count: {\n      type: Number,\n      required: true,\n      default: 0\n    }"
/// );
/// assert_eq!(render_schema_fields::<&str>(&[], false), "");
/// ```
#[must_use]
pub fn render_schema_fields<S: AsRef<str>>(fields: &[S], placeholder: bool) -> String {
    if fields.is_empty() && placeholder {
        return SCHEMA_PLACEHOLDER.to_string();
    }

    fields
        .iter()
        .map(|token| schema_entry(&FieldDescriptor::parse(token.as_ref())))
        .collect::<Vec<_>>()
        .join(SCHEMA_SEPARATOR)
}

/// Render Joi validation rules
///
/// # Examples
///
/// ```
/// # use crudgen::scaffold::render::{render_validation_fields, ValidationMode};
/// let fields = ["email:string:true", "age:number"];
/// assert_eq!(
///     render_validation_fields(&fields, ValidationMode::Create, false),
///     "  email: joi.string().required(),\n      age: joi.number()"
/// );
/// assert_eq!(
///     render_validation_fields(&fields, ValidationMode::Update, false),
///     "  email: joi.string(),\n      age: joi.number()"
/// );
/// ```
#[must_use]
pub fn render_validation_fields<S: AsRef<str>>(
    fields: &[S],
    mode: ValidationMode,
    placeholder: bool,
) -> String {
    if fields.is_empty() && placeholder {
        return RULE_PLACEHOLDER.to_string();
    }

    fields
        .iter()
        .map(|token| rule_entry(&FieldDescriptor::parse(token.as_ref()), mode))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
}

fn schema_entry(field: &FieldDescriptor) -> String {
    let name = &field.name;
    let schema_type = field.schema_type();
    let mut entry = format!("    {name}: {{\n      type: {schema_type}");
    if field.required {
        entry.push_str(",\n      required: true");
    }
    if let Some(default) = field.default_literal() {
        entry.push_str(",\n      default: ");
        entry.push_str(&default);
    }
    entry.push_str("\n    }");
    entry
}

fn rule_entry(field: &FieldDescriptor, mode: ValidationMode) -> String {
    let name = &field.name;
    let validator = field.kind.validator();
    match mode {
        ValidationMode::Create if field.required => format!("  {name}: {validator}.required()"),
        _ => format!("  {name}: {validator}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_schema_string_default_is_quoted() {
        let block = render_schema_fields(&["color:string:false:red"], false);
        assert_eq!(block, "    color: {\n      type: String,\n      default: 'red'\n    }");
    }

    #[test]
    fn test_schema_number_default_is_raw() {
        let block = render_schema_fields(&["count:number:true:0"], false);
        assert!(block.contains("default: 0\n"));
        assert!(block.contains("required: true"));
        assert!(!block.contains("'0'"));
    }

    #[test]
    fn test_schema_quoting_ignores_default_content() {
        let block = render_schema_fields(&["zip:string:false:75001", "flag:boolean:false:false"], false);
        assert!(block.contains("default: '75001'"));
        assert!(block.contains("default: false"));
    }

    #[test]
    fn test_schema_preserves_order() {
        let block = render_schema_fields(&["b", "a", "c"], false);
        let b = block.find("b: {").unwrap();
        let a = block.find("a: {").unwrap();
        let c = block.find("c: {").unwrap();
        assert!(b < a && a < c);
        assert_eq!(block.matches(SCHEMA_SEPARATOR).count(), 2);
    }

    #[test]
    fn test_schema_placeholder() {
        assert_eq!(render_schema_fields::<&str>(&[], true), SCHEMA_PLACEHOLDER);
        assert_eq!(render_schema_fields::<&str>(&[], false), "");
        let block = render_schema_fields(&["title"], true);
        assert!(!block.contains(PLACEHOLDER_FIELD));
    }

    #[test]
    fn test_create_rules() {
        let block = render_validation_fields(
            &["email:string:true", "age:number:false:18", "active:boolean", "born:date:TRUE", "tags:array"],
            ValidationMode::Create,
            false,
        );
        assert_eq!(
            block,
            "  email: joi.string().required(),\n      age: joi.number(),\n      active: joi.boolean(),\n      born: joi.date().required(),\n      tags: joi.any()"
        );
    }

    #[test]
    fn test_update_rules_never_required() {
        let block = render_validation_fields(
            &["email:string:true", "count:number:true:0"],
            ValidationMode::Update,
            false,
        );
        assert_eq!(block, "  email: joi.string(),\n      count: joi.number()");
    }

    #[test]
    fn test_rule_placeholder() {
        for mode in [ValidationMode::Create, ValidationMode::Update] {
            assert_eq!(render_validation_fields::<&str>(&[], mode, true), RULE_PLACEHOLDER);
            assert_eq!(render_validation_fields::<&str>(&[], mode, false), "");
        }
    }

    #[test]
    fn test_validator_is_case_insensitive() {
        let block = render_validation_fields(&["n:NUMBER:true"], ValidationMode::Create, false);
        assert_eq!(block, "  n: joi.number().required()");
    }

    fn token() -> impl Strategy<Value = String> {
        (
            "[a-z][a-zA-Z0-9]{0,8}",
            prop::sample::select(vec!["string", "number", "boolean", "date", "Mixed", "STRING"]),
            prop::sample::select(vec!["true", "false", "TRUE", "True"]),
            prop::option::of("[a-z0-9]{1,5}"),
        )
            .prop_map(|(name, tag, required, default)| match default {
                Some(default) => format!("{name}:{tag}:{required}:{default}"),
                None => format!("{name}:{tag}:{required}"),
            })
    }

    proptest! {
        #[test]
        fn update_rules_never_contain_required(tokens in prop::collection::vec(token(), 0..8)) {
            let block = render_validation_fields(&tokens, ValidationMode::Update, true);
            prop_assert!(!block.contains(".required()"));
        }

        #[test]
        fn rendering_is_idempotent(tokens in prop::collection::vec(token(), 0..8)) {
            prop_assert_eq!(render_schema_fields(&tokens, true), render_schema_fields(&tokens, true));
            prop_assert_eq!(
                render_validation_fields(&tokens, ValidationMode::Create, true),
                render_validation_fields(&tokens, ValidationMode::Create, true)
            );
            prop_assert_eq!(
                render_validation_fields(&tokens, ValidationMode::Update, true),
                render_validation_fields(&tokens, ValidationMode::Update, true)
            );
        }

        #[test]
        fn every_field_renders_once_in_each_block(tokens in prop::collection::vec(token(), 1..8)) {
            let schema = render_schema_fields(&tokens, false);
            let create = render_validation_fields(&tokens, ValidationMode::Create, false);
            let update = render_validation_fields(&tokens, ValidationMode::Update, false);
            prop_assert_eq!(schema.matches("      type: ").count(), tokens.len());
            prop_assert_eq!(create.matches(": joi.").count(), tokens.len());
            prop_assert_eq!(update.matches(": joi.").count(), tokens.len());
        }
    }
}
