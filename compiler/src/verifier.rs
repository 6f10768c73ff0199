use lazy_static::lazy_static;
use pipe_xml_schema::{Rule, Schema, DELIMITER};
use regex::Regex;
use tracing::debug;

use crate::{error::ConvertError, utils::quote};

lazy_static! {
    static ref XML_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap();
}

/// Returns `Ok(())` if the schema is usable, or `Err(ConvertError::SchemaError(_))` otherwise.
pub fn verify_schema(schema: &Schema) -> Result<(), ConvertError> {
    // 1) The root is synthetic and never carries leaf fields
    if !schema.root().fields.is_empty() {
        return Err(ConvertError::SchemaError(format!(
            "The root element {} cannot declare fields",
            quote(&schema.root().name)
        )));
    }
    verify_rule("root", schema.root(), schema)?;

    // 2) Tags must be splittable out of a row
    for (tag, rule) in &schema.rules {
        if tag.is_empty() {
            return Err(ConvertError::SchemaError(format!(
                "The rule for {} has an empty tag",
                quote(&rule.name)
            )));
        }
        if tag.contains(DELIMITER) || tag.chars().any(char::is_whitespace) {
            return Err(ConvertError::SchemaError(format!(
                "The tag {} contains a delimiter or whitespace",
                quote(tag)
            )));
        }
        verify_rule(tag, rule, schema)?;
    }

    debug!(rules = schema.rules.len(), "schema verified");
    Ok(())
}

// 3) Names must be valid XML names, and every child tag must resolve
fn verify_rule(tag: &str, rule: &Rule, schema: &Schema) -> Result<(), ConvertError> {
    if !XML_NAME.is_match(&rule.name) {
        return Err(ConvertError::SchemaError(format!(
            "The element name {} for tag {} is not a valid XML name",
            quote(&rule.name),
            quote(tag)
        )));
    }
    for field in &rule.fields {
        if !XML_NAME.is_match(field) {
            return Err(ConvertError::SchemaError(format!(
                "The field name {} in {} is not a valid XML name",
                quote(field),
                quote(&rule.name)
            )));
        }
    }
    for child in &rule.children {
        if !schema.contains(child) {
            return Err(ConvertError::SchemaError(format!(
                "The child tag {} of {} is not defined",
                quote(child),
                quote(&rule.name)
            )));
        }
    }
    Ok(())
}
