use pipe_xml_schema::Schema;
use tracing::{info, instrument};

use crate::{
    builder::{build_xml, BuildOptions},
    error::ConvertError,
    row::split_rows,
    validator::validate_rows,
    verifier::verify_schema,
};

/// Convert raw row text into an XML document.
/// Returns `Err(ConvertError)` if the schema or any row is invalid; no partial output is produced.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn convert(text: &str, schema: &Schema, options: &BuildOptions) -> Result<String, ConvertError> {
    verify_schema(schema)?;
    let rows = split_rows(text);
    let xml = convert_rows(&rows, schema, options)?;
    info!(rows = rows.len(), "converted");
    Ok(xml)
}

/// Validate already split rows, then build them.
pub fn convert_rows(rows: &[&str], schema: &Schema, options: &BuildOptions) -> Result<String, ConvertError> {
    validate_rows(rows, schema)?;
    build_xml(rows, schema, options)
}

/// Parse a JSON schema document and verify it.
pub fn load_schema(text: &str) -> Result<Schema, ConvertError> {
    let schema = Schema::from_json(text)?;
    verify_schema(&schema)?;
    Ok(schema)
}
