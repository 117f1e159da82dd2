//! Delimited parser with delimiter detection.
//!
//! The parser is the boundary collaborator between raw text blobs and the
//! in-memory grid: a failed parse yields an explicit error, never a
//! partially-valid table.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Result, ScansheetError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// A file parsed into a grid, with origin hints for the catalog.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    /// Full grid, row 0 is the header.
    pub grid: Vec<Vec<String>>,
    /// Delimiter the grid was parsed with.
    pub delimiter: u8,
    /// Media type derived from the delimiter (origin hint only).
    pub media_type: String,
    /// Human-readable size of the source blob, e.g. "12.34KB".
    pub size_hint: String,
}

/// Parses delimited text into rectangular grids.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the grid plus origin hints.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedSource> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ScansheetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| ScansheetError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let grid = self.parse_bytes_with(&contents, delimiter)?;

        Ok(ParsedSource {
            grid,
            delimiter,
            media_type: media_type_for(delimiter).to_string(),
            size_hint: format_size(contents.len()),
        })
    }

    /// Parse raw bytes into a grid, row 0 being the header.
    ///
    /// Trailing blank rows are dropped; ragged rows are padded or truncated
    /// to the header width so the grid comes out rectangular.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Vec<String>>> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };
        self.parse_bytes_with(bytes, delimiter)
    }

    fn parse_bytes_with(&self, bytes: &[u8], delimiter: u8) -> Result<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut grid: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            grid.push(record.iter().map(|s| s.to_string()).collect());
        }

        // Tolerate trailing blank rows
        while grid
            .last()
            .is_some_and(|row| row.iter().all(|cell| cell.trim().is_empty()))
        {
            grid.pop();
        }

        if grid.is_empty() {
            return Err(ScansheetError::EmptyData("No rows found".to_string()));
        }

        let width = grid[0].len();
        if width == 0 || grid[0].iter().all(|h| h.trim().is_empty()) {
            return Err(ScansheetError::EmptyData("No columns found".to_string()));
        }

        for row in grid.iter_mut().skip(1) {
            while row.len() < width {
                row.push(String::new());
            }
            row.truncate(width);
        }

        Ok(grid)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a grid back to delimited bytes.
///
/// Left-inverse-compatible with parsing: for rectangular grids containing
/// no embedded delimiter/newline ambiguity, parsing the output yields the
/// original grid.
pub fn serialize_grid(grid: &[Vec<String>], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(Vec::new());

    for row in grid {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ScansheetError::Parse(format!("Failed to flush serialized grid: {}", e)))
}

/// Media type hint for a delimiter.
fn media_type_for(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "text/tab-separated-values",
        b',' | b';' => "text/csv",
        _ => "text/plain",
    }
}

/// Format a byte count the way the file history displays it.
fn format_size(bytes: usize) -> String {
    format!("{:.2}KB", bytes as f64 / 1024.0)
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ScansheetError::EmptyData("No lines to analyze".to_string()));
    }

    // Score each candidate: a delimiter that appears the same number of
    // times on every line is almost certainly the real one.
    let mut scores: IndexMap<u8, usize> = IndexMap::new();
    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        // Tab gets a slight bonus as it is rare inside actual data
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };
        scores.insert(delim, score);
    }

    // First candidate wins ties, preserving the trial order above
    let mut best = b',';
    let mut best_score = 0;
    for (delim, score) in scores {
        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    Ok(best)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_quoted_commas() {
        let data = b"a;b\n\"x,y,z\";2\n\"p,q\";4";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_grid() {
        let parser = Parser::new();
        let grid = parser.parse_bytes(b"name,age\nAlice,30\nBob,25\n").unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["name", "age"]);
        assert_eq!(grid[2], vec!["Bob", "25"]);
    }

    #[test]
    fn test_parse_drops_trailing_blank_rows() {
        let parser = Parser::new();
        let grid = parser.parse_bytes(b"a,b\n1,2\n,\n,\n").unwrap();

        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let grid = parser.parse_bytes(b"a,b,c\n1,2\n").unwrap();

        assert_eq!(grid[1], vec!["1", "2", ""]);
    }

    #[test]
    fn test_parse_empty_input_is_an_error() {
        let parser = Parser::new();
        assert!(parser.parse_bytes(b"").is_err());
        assert!(parser.parse_bytes(b"\n\n").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let parser = Parser::new();
        let grid = vec![
            vec!["h1".to_string(), "h2".to_string()],
            vec!["x".to_string(), "y".to_string()],
        ];

        let bytes = serialize_grid(&grid, b',').unwrap();
        let parsed = parser.parse_bytes(&bytes).unwrap();

        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_serialize_quotes_embedded_delimiters() {
        let grid = vec![
            vec!["name".to_string()],
            vec!["a,b".to_string()],
        ];

        let bytes = serialize_grid(&grid, b',').unwrap();
        let parsed = Parser::with_config(ParserConfig {
            delimiter: Some(b','),
            ..ParserConfig::default()
        })
        .parse_bytes(&bytes)
        .unwrap();

        assert_eq!(parsed[1][0], "a,b");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(1024), "1.00KB");
        assert_eq!(format_size(1536), "1.50KB");
    }
}
