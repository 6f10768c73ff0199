use pipe_xml_schema::{Rule, Schema};
use tracing::{debug, trace};

use crate::{error::ConvertError, row::Row, writer::XmlWriter};

/// Width of one indentation level used by [BuildOptions::default].
pub const DEFAULT_INDENT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Builds an XML document from rows, one row at a time.
///
/// The builder keeps a stack of the rules of every open element. When a row
/// arrives, open elements are closed from the innermost outwards until one
/// permits the row's tag as a child; the row then opens its own element
/// beneath it. Rows never close anything explicitly, so nesting is decided
/// by row order and the schema alone.
#[derive(Debug)]
pub struct TreeBuilder<'s> {
    schema: &'s Schema,
    open:   Vec<&'s Rule>,
    writer: XmlWriter,
    rows:   usize,
}

impl<'s> TreeBuilder<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_options(schema, &BuildOptions::default())
    }

    pub fn with_options(schema: &'s Schema, options: &BuildOptions) -> Self {
        TreeBuilder {
            schema,
            open:   Vec::new(),
            writer: XmlWriter::new(options.indent),
            rows:   0,
        }
    }

    /// Opens the schema's synthetic root element. Call once, before any row.
    pub fn open_root(&mut self) {
        let root = self.schema.root();
        self.open_element(root);
    }

    /// Processes one raw row: closes what cannot contain it, opens its
    /// element, and writes one leaf per non-empty field value.
    ///
    /// Fails without touching the document if the tag has no rule or if no
    /// open element can contain it.
    pub fn process_row(&mut self, text: &str) -> Result<(), ConvertError> {
        self.rows += 1;
        let row = Row::parse(text);

        let rule = self
            .schema
            .rule(row.tag)
            .ok_or_else(|| ConvertError::UnknownTag(vec![row.tag.to_string()]))?;

        let parent_depth = self
            .open
            .iter()
            .rposition(|parent| parent.can_attach(row.tag))
            .ok_or_else(|| ConvertError::Unattachable {
                row: self.rows,
                tag: row.tag.to_string(),
            })?;

        while self.open.len() > parent_depth + 1 {
            self.close_element();
        }

        self.open_element(rule);
        for (index, value) in row.fields.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if let Some(name) = rule.field_name(index) {
                self.writer.leaf(self.open.len(), name, value);
            }
        }
        Ok(())
    }

    /// Closes every open element, innermost first, including the root.
    pub fn close_all(&mut self) {
        while !self.open.is_empty() {
            self.close_element();
        }
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// The document written so far.
    pub fn xml(&self) -> &str {
        self.writer.as_str()
    }

    pub fn finish(mut self) -> String {
        self.close_all();
        self.writer.into_string()
    }

    fn open_element(&mut self, rule: &'s Rule) {
        trace!(element = %rule.name, depth = self.open.len(), "open");
        self.writer.open_tag(self.open.len(), &rule.name);
        self.open.push(rule);
    }

    fn close_element(&mut self) {
        if let Some(rule) = self.open.pop() {
            trace!(element = %rule.name, depth = self.open.len(), "close");
            self.writer.close_tag(self.open.len(), &rule.name);
        }
    }
}

/// Runs a whole build over already validated rows.
pub fn build_xml(rows: &[&str], schema: &Schema, options: &BuildOptions) -> Result<String, ConvertError> {
    let mut builder = TreeBuilder::with_options(schema, options);
    builder.open_root();
    for row in rows {
        builder.process_row(row)?;
    }
    debug!(rows = rows.len(), "document built");
    Ok(builder.finish())
}
