use lazy_static::lazy_static;
use pipe_xml_schema::DELIMITER;
use regex::Regex;

lazy_static! {
    pub static ref LINE_BREAK_RX: Regex = Regex::new(r"\r?\n").unwrap();
}

/// One input line, split into its tag and the field values that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub tag:    &'a str,
    pub fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    pub fn parse(text: &'a str) -> Row<'a> {
        let mut parts = text.split(DELIMITER);
        let tag = parts.next().unwrap_or_default();
        Row {
            tag,
            fields: parts.collect(),
        }
    }
}

/// Splits raw text into rows, dropping empty lines.
pub fn split_rows(text: &str) -> Vec<&str> {
    LINE_BREAK_RX
        .split(text)
        .filter(|row| !row.is_empty())
        .collect()
}
