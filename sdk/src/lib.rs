//! pipe-xml
//!
//! Converts pipe-delimited row files into nested XML, driven by a schema.
//!
//! - `convert_str` / `convert_file` run the full split → validate → build pipeline
//! - `load_schema_file` / `schema_to_json` read and write JSON schema documents
//! - The schema types and the built-in `people` schema are re-exported

use std::{fs, path::Path};
use tracing::{debug, instrument};

pub use pipe_xml_compiler::{
    build_xml, convert, convert_rows, is_valid, load_schema, validate_rows, BuildOptions,
    ConvertError, RowProblem, TreeBuilder,
};
pub use pipe_xml_compiler::row::split_rows;
pub use pipe_xml_schema::{people, Rule, Schema, DELIMITER};

/// Convert row text with default build options.
pub fn convert_str(text: &str, schema: &Schema) -> Result<String, ConvertError> {
    convert(text, schema, &BuildOptions::default())
}

/// Read a row file from disk and convert it.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    schema: &Schema,
    options: &BuildOptions,
) -> Result<String, ConvertError> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!(bytes = text.len(), "input read");
    convert(&text, schema, options)
}

/// Validate row text without building anything.
pub fn validate_str(text: &str, schema: &Schema) -> Result<(), ConvertError> {
    validate_rows(&split_rows(text), schema)
}

/// Read and verify a JSON schema document.
pub fn load_schema_file<P: AsRef<Path>>(path: P) -> Result<Schema, ConvertError> {
    let text = fs::read_to_string(path.as_ref())?;
    load_schema(&text)
}

/// Pretty-printed JSON for a schema.
pub fn schema_to_json(schema: &Schema) -> Result<String, ConvertError> {
    Ok(schema.to_json_pretty()?)
}

pub mod error {
    pub use pipe_xml_compiler::error::{ConvertError, RowProblem};
}

pub mod schema {
    pub use pipe_xml_schema::{people, Rule, Schema};
}
