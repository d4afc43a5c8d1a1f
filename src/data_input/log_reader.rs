// src/data_input/log_reader.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::{debug, info};

use crate::data_input::log_data::ParsedLog;
use crate::data_input::log_parser::parse_log_text;
use crate::error::DriveplotError;
use crate::types::DriveplotResult;

/// Reads a gzip-compressed log (all members) and returns its text.
pub fn read_gz_text(path: &Path) -> DriveplotResult<String> {
    let io_error = |source| DriveplotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut decoder = MultiGzDecoder::new(BufReader::new(file));
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes).map_err(io_error)?;
    debug!("Decompressed {} bytes from '{}'", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| DriveplotError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decompresses and parses a single log file.
pub fn load_log_file(path: &Path) -> DriveplotResult<ParsedLog> {
    let text = read_gz_text(path)?;
    parse_log_text(&text).map_err(|source| DriveplotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every file in order and concatenates the records.
/// The first unreadable or malformed file aborts the whole run.
pub fn load_logs(paths: &[PathBuf]) -> DriveplotResult<ParsedLog> {
    let mut combined = ParsedLog::default();
    for path in paths {
        info!("Reading file {}", path.display());
        let parsed = load_log_file(path)?;
        info!("  {} records", parsed.len());
        combined.append(parsed);
    }
    Ok(combined)
}
