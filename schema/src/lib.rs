//! Schema types for pipe-xml.
//!
//! A schema maps the tag at the start of each input row to a [Rule]: the XML
//! element the row opens, the names of the leaf fields that follow the tag,
//! and the tags allowed to open directly inside that element.
//!
//! ```
//! use pipe_xml_schema::*;
//!
//! let schema = Schema::new(Rule::new("catalog", Vec::<String>::new(), ["B"]))
//!     .with_rule("B", Rule::new("book", ["title", "author"], Vec::<String>::new()));
//!
//! assert!(schema.root().can_attach("B"));
//! assert_eq!(schema.rule("B").unwrap().field_name(1), Some("author"));
//! ```

pub mod people;
pub mod schema;

pub use people::*;
pub use schema::*;

/// Separates the tag and the fields of a row.
pub const DELIMITER: char = '|';
