//! Import and export formats for glossary collections.
//!
//! Two formats are supported:
//! - **JSON**: a pretty-printed array of records, the same shape the record
//!   store serves.
//! - **Delimited text**: quoted comma-separated rows with a
//!   `term,definition,link,examples` header (see [`delimited`]).
//!
//! A failed import returns an error and yields nothing; partial imports are
//! never produced.

pub mod delimited;
mod error;
mod format;

pub use delimited::{decode, encode, Columns, HEADER};
pub use error::{CodecError, CodecResult};
pub use format::{export, import, import_json, Export, Format};
