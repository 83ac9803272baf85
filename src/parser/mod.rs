//! Parser for connector path data

mod grammar;
pub mod lexer;

pub use grammar::parse_path_data;
