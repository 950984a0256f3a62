//! Access Trace Parsing.
//!
//! A trace is plain text with one access per line:
//!
//! ```text
//! # comment
//! R 0x7ffe1000
//! W 7ffe1008
//! ```
//!
//! The kind is `R`/`W` (or `read`/`write`, any case). The address is hex,
//! with or without a `0x` prefix. Blank lines and `#` comments are skipped.

use std::fmt;
use std::io::BufRead;

use crate::common::{AccessType, ParseError, SimError};

/// One access read from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: AccessType,
    pub addr: u64,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            AccessType::Read => 'R',
            AccessType::Write => 'W',
        };
        write!(f, "{} 0x{:016x}", kind, self.addr)
    }
}

impl TraceRecord {
    /// Parses line number `line` of a trace. Returns `Ok(None)` for lines
    /// that carry no access.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, ParseError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        let [kind, addr] = fields[..] else {
            return Err(ParseError::FieldCount {
                line,
                fields: fields.len(),
            });
        };

        let kind = match kind.to_ascii_lowercase().as_str() {
            "r" | "read" => AccessType::Read,
            "w" | "write" => AccessType::Write,
            _ => {
                return Err(ParseError::InvalidKind {
                    line,
                    kind: kind.to_string(),
                })
            }
        };

        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);
        let addr = u64::from_str_radix(digits, 16).map_err(|_| ParseError::InvalidAddress {
            line,
            addr: addr.to_string(),
        })?;

        Ok(Some(Self { kind, addr }))
    }
}

/// Reads a whole trace, stopping at the first malformed line.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, SimError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(record) = TraceRecord::parse(i + 1, &line?)? {
            records.push(record);
        }
    }
    Ok(records)
}
