//! Delimited text parsing and serialization.

mod parser;
mod sample;

pub use parser::{Parser, ParserConfig, ParsedSource, serialize_grid};
pub use sample::{SAMPLE_NAME, sample_grid};
