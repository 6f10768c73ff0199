use pipe_xml_schema::Schema;
use tracing::{debug, warn};

use crate::{
    error::{ConvertError, RowProblem},
    row::Row,
};

/// Checks every row against the schema before anything is built.
///
/// Unknown tags are collected across the whole input and reported together.
/// Field-shape problems are reported for the first offending row only, with
/// every problem that row has. Row numbers in errors start at 1.
pub fn validate_rows(rows: &[&str], schema: &Schema) -> Result<(), ConvertError> {
    // 1) Empty input
    if rows.iter().all(|row| row.is_empty()) {
        warn!("rejecting empty input");
        return Err(ConvertError::EmptyInput);
    }

    let parsed: Vec<Row<'_>> = rows.iter().map(|row| Row::parse(row)).collect();

    // 2) Every tag must be known, each unknown one listed once
    let mut unknown: Vec<String> = Vec::new();
    for row in &parsed {
        if !schema.contains(row.tag) && !unknown.iter().any(|tag| tag == row.tag) {
            unknown.push(row.tag.to_string());
        }
    }
    if !unknown.is_empty() {
        warn!(tags = ?unknown, "rejecting input with unknown tags");
        return Err(ConvertError::UnknownTag(unknown));
    }

    // 3) Field counts and empty fields, stopping at the first bad row
    for (index, row) in parsed.iter().enumerate() {
        let problems = check_fields(row, schema);
        if !problems.is_empty() {
            warn!(row = index + 1, ?problems, "rejecting row");
            return Err(ConvertError::InvalidRow {
                row: index + 1,
                problems,
            });
        }
    }

    debug!(rows = rows.len(), "input validated");
    Ok(())
}

/// Boolean form of [validate_rows], for callers that only need pass/fail.
pub fn is_valid(rows: &[&str], schema: &Schema) -> bool {
    validate_rows(rows, schema).is_ok()
}

fn check_fields(row: &Row<'_>, schema: &Schema) -> Vec<RowProblem> {
    let max = schema.rule(row.tag).map_or(0, |rule| rule.max_fields());
    let found = row.fields.len();

    let mut problems = Vec::new();
    if found > max {
        problems.push(RowProblem::TooManyFields { found, max });
    }
    if found == 0 {
        problems.push(RowProblem::NoFields);
    }
    if row.fields.iter().any(|field| field.is_empty()) {
        problems.push(RowProblem::EmptyField);
    }
    problems
}
