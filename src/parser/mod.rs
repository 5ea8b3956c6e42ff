pub mod chaynikam_parser;

pub use chaynikam_parser::{ChaynikamParser, Parser};
