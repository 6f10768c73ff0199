//! pipe-xml-compiler
//!
//! This crate implements:
//!  1) Row splitting for pipe-delimited input (`row`),
//!  2) A schema verifier (undefined child tags, invalid XML names, etc.),
//!  3) A row validator (unknown tags, field counts, empty fields),
//!  4) The stack-based tree builder and its line writer,
//!  5) Error types (`ConvertError`) and the `convert` entry point.

pub mod error;
pub mod utils;
pub mod row;
pub mod verifier;
pub mod validator;
pub mod writer;
pub mod builder;
pub mod compiler;

pub use builder::{build_xml, BuildOptions, TreeBuilder};
pub use compiler::{convert, convert_rows, load_schema};
pub use error::{ConvertError, RowProblem};
pub use validator::{is_valid, validate_rows};
