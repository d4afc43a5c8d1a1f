// src/data_input/log_parser.rs

use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;

use crate::classification::{lookup_code, ClassColor};
use crate::constants::{CLASSIFICATION_SEPARATOR, CLASSIFICATION_TOKEN};
use crate::data_input::log_data::{Field, ParsedLog, FIELD_COUNT};
use crate::error::ParseError;
use crate::section::{next_section, Section};
use crate::types::LogParseResult;

// ASCII whitespace only; non-breaking and other Unicode spaces stay inside tokens.
fn whitespace_runs() -> &'static Regex {
    static WHITESPACE_RUNS: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RUNS.get_or_init(|| Regex::new(r"(?-u:\s)+").expect("whitespace pattern is valid"))
}

/// Splits a line on maximal runs of whitespace, keeping the empty leading and
/// trailing tokens produced by whitespace at either end.
///
/// `"    average: 1.5"` gives `["", "average:", "1.5"]`, `""` gives `[""]`.
pub fn tokenize(line: &str) -> Vec<&str> {
    whitespace_runs().split(line).collect()
}

/// Field values gathered for one section of the record currently being read.
#[derive(Debug, Default)]
struct PendingBlock {
    values: [Option<f64>; FIELD_COUNT],
}

impl PendingBlock {
    fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// A record whose classification line has not arrived yet.
#[derive(Debug, Default)]
struct PendingRecord {
    azimuth: PendingBlock,
    elevation: PendingBlock,
    first_line: Option<usize>,
}

impl PendingRecord {
    fn block_mut(&mut self, section: Section) -> &mut PendingBlock {
        match section {
            Section::Azimuth => &mut self.azimuth,
            Section::Elevation => &mut self.elevation,
        }
    }

    fn set_field(
        &mut self,
        section: Section,
        field: Field,
        value: f64,
        line_number: usize,
    ) -> Result<(), ParseError> {
        let slot = &mut self.block_mut(section).values[field as usize];
        if slot.is_some() {
            return Err(ParseError::DuplicateField {
                line: line_number,
                field: field.name().to_string(),
                section,
            });
        }
        *slot = Some(value);
        self.first_line.get_or_insert(line_number);
        Ok(())
    }

    fn commit(self, parsed: &mut ParsedLog, az_color: ClassColor, el_color: ClassColor) {
        parsed.azimuth.push_record(&self.azimuth.values, az_color);
        parsed.elevation.push_record(&self.elevation.values, el_color);
    }
}

/// Parses a `<fieldname>: <value>` line already split into `["", name, value]`.
fn parse_field_line(
    name_token: &str,
    value_token: &str,
    section: Section,
    line_number: usize,
) -> Result<(Field, f64), ParseError> {
    let name = name_token.strip_suffix(':').unwrap_or(name_token);
    let field = Field::from_name(name).ok_or_else(|| ParseError::UnknownField {
        line: line_number,
        field: name.to_string(),
        section,
    })?;
    let value = value_token
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidValue {
            line: line_number,
            field: name.to_string(),
            value: value_token.to_string(),
        })?;
    Ok((field, value))
}

/// Parses `<az_code>,<el_code>` into the azimuth and elevation colours.
fn parse_classification(
    codes_token: Option<&str>,
    line_number: usize,
) -> Result<(ClassColor, ClassColor), ParseError> {
    let found = codes_token.unwrap_or("");
    let mut codes = found.split(CLASSIFICATION_SEPARATOR);
    let (az_code, el_code) = match (codes.next(), codes.next()) {
        (Some(az), Some(el)) => (az, el),
        _ => {
            return Err(ParseError::MissingCode {
                line: line_number,
                found: found.to_string(),
            })
        }
    };
    let lookup = |code: &str| {
        lookup_code(code).map_err(|source| ParseError::UnknownCode {
            line: line_number,
            source,
        })
    };
    Ok((lookup(az_code)?, lookup(el_code)?))
}

/// Runs the line classifier over a sequence of lines and returns both accumulators.
///
/// Section headers must match the whole line. Indented `name: value` lines are
/// collected into the current section of the pending record, and a
/// `classification: <az>,<el>` line commits that record to both tables.
pub fn parse_lines<'a, I>(lines: I) -> LogParseResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = ParsedLog::default();
    let mut section: Option<Section> = None;
    let mut pending = PendingRecord::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        section = next_section(section, line);

        let tokens = tokenize(line);
        match (section, tokens.as_slice()) {
            (Some(current), ["", name, value]) => {
                let (field, value) = parse_field_line(name, value, current, line_number)?;
                pending.set_field(current, field, value, line_number)?;
            }
            (_, [first, rest @ ..]) if *first == CLASSIFICATION_TOKEN => {
                let (az_color, el_color) = parse_classification(rest.first().copied(), line_number)?;
                if pending.azimuth.is_empty() && pending.elevation.is_empty() {
                    warn!("Line {line_number}: classification with no preceding field lines; record padded with NaN");
                }
                std::mem::take(&mut pending).commit(&mut parsed, az_color, el_color);
            }
            _ => {}
        }
    }

    if let Some(line) = pending.first_line {
        return Err(ParseError::MissingClassification { line });
    }

    debug!("Parsed {} records", parsed.len());
    Ok(parsed)
}

/// Parses decompressed log text. Both `\n` and `\r\n` line endings are accepted.
pub fn parse_log_text(text: &str) -> LogParseResult {
    parse_lines(text.lines())
}


// src/data_input/log_parser.rs
