//! Board snapshot ingestion.

pub mod json_parser;

pub use json_parser::{parse_board_json_file, parse_board_json_str};
