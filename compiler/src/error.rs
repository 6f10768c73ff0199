use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The input is empty")]
    EmptyInput,

    #[error("The input contains the invalid tags: {}", .0.join(", "))]
    UnknownTag(Vec<String>),

    #[error("Row {row}: {}", join_problems(.problems))]
    InvalidRow {
        row:      usize,
        problems: Vec<RowProblem>,
    },

    #[error("Row {row}: element with tag {tag} cannot be placed inside any open element")]
    Unattachable {
        row: usize,
        tag: String,
    },

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Schema JSON error: {0}")]
    SchemaJson(#[from] serde_json::Error),
}

impl ConvertError {
    /// The field-shape problems carried by an `InvalidRow` error, if any.
    pub fn row_problems(&self) -> &[RowProblem] {
        match self {
            ConvertError::InvalidRow { problems, .. } => problems,
            _ => &[],
        }
    }
}

/// A field-shape problem found in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowProblem {
    TooManyFields { found: usize, max: usize },
    NoFields,
    EmptyField,
}

impl fmt::Display for RowProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowProblem::TooManyFields { found, max } => {
                write!(f, "contains too many fields ({} given, at most {})", found, max)
            }
            RowProblem::NoFields => write!(f, "contains no fields"),
            RowProblem::EmptyField => write!(f, "contains at least one empty field"),
        }
    }
}

fn join_problems(problems: &[RowProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
