// src/types.rs
// Type aliases shared across the parser, reader and plot modules.

use crate::classification::ClassColor;
use crate::data_input::log_data::ParsedLog;
use crate::error::{DriveplotError, ParseError};

// Line classifier return type.
pub type LogParseResult = Result<ParsedLog, ParseError>;

// File/driver level result type.
pub type DriveplotResult<T> = Result<T, DriveplotError>;

// Scatter points grouped by classification colour.
pub type ScatterPoints = Vec<(f64, f64)>;
pub type ClassifiedPoints = Vec<(ClassColor, ScatterPoints)>;
