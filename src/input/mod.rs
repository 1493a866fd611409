//! Loading record sets and marker files from disk.

pub mod parse;

pub use parse::{load_markers, parse_records_file, parse_records_json, parse_records_text};
