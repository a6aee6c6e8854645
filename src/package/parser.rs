//! Record parser for the dpkg status database.
//!
//! Only three fields are recognised: `Package:`, `Depends:` and
//! `Description:`. Every other line, including the continuation lines of a
//! wrapped description, is skipped.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::BufRead;

use super::depends::parse_depends;
use super::record::PackageRecord;

const PACKAGE_FIELD: &str = "Package:";
const DEPENDS_FIELD: &str = "Depends:";
const DESCRIPTION_FIELD: &str = "Description:";

/// Line-by-line accumulator producing [`PackageRecord`]s in file order.
///
/// A record stays under construction until the next `Package:` line or
/// [`RecordParser::finish`], whichever comes first.
#[derive(Debug, Default)]
pub struct RecordParser {
    records: Vec<PackageRecord>,
    current: Option<PackageRecord>,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        if let Some(name) = field_value(line, PACKAGE_FIELD) {
            if let Some(done) = self.current.replace(PackageRecord::new(name)) {
                self.records.push(done);
            }
        } else if let Some(value) = field_value(line, DEPENDS_FIELD) {
            match self.current.as_mut() {
                Some(record) => record.dependencies.extend(parse_depends(value)),
                None => debug!("Ignoring Depends line before any package: {:?}", line),
            }
        } else if let Some(value) = field_value(line, DESCRIPTION_FIELD) {
            match self.current.as_mut() {
                // Last one wins if the field repeats
                Some(record) => record.description = value.to_string(),
                None => debug!("Ignoring Description line before any package: {:?}", line),
            }
        }
    }

    /// Flush the record under construction and return everything parsed.
    pub fn finish(mut self) -> Vec<PackageRecord> {
        if let Some(last) = self.current.take() {
            self.records.push(last);
        }
        self.records
    }
}

/// Value of `field` on `line`, without the marker and the single separator
/// character following it.
fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(field)?;
    let mut chars = rest.chars();
    chars.next();
    Some(chars.as_str())
}

/// Parse every package stanza readable from `reader`.
///
/// Lines are split on raw bytes and decoded lossily, so bytes that are not
/// valid UTF-8 end up as U+FFFD instead of failing the run. Only read errors
/// from `reader` are fatal.
#[tracing::instrument(skip(reader))]
pub fn parse_records<B: BufRead>(reader: B) -> Result<Vec<PackageRecord>> {
    let parser = reader
        .split(b'\n')
        .enumerate()
        .try_fold(RecordParser::new(), |mut parser, (index, line)| {
            let mut line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            parser.feed_line(&String::from_utf8_lossy(&line));
            Ok::<_, anyhow::Error>(parser)
        })?;

    let records = parser.finish();
    info!("Parsed {} package record(s)", records.len());
    Ok(records)
}
