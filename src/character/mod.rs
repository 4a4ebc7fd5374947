//! Character model module
//!
//! The character record, its derived statistics and the document format it
//! is read from and written to.

mod derived;
pub mod document;
mod model;

pub use derived::*;
pub use document::{load_document, read_file, render, to_json, to_yaml, write_file, DocumentFormat};
pub use model::*;
