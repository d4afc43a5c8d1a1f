// src/classification.rs

use plotters::style::RGBColor;
use thiserror::Error;

use crate::constants::{
    COLOR_CLASS_BLACK, COLOR_CLASS_BLUE, COLOR_CLASS_GREEN, COLOR_CLASS_RED, COLOR_CLASS_YELLOW,
};

/// Display colour assigned to a classified record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassColor {
    Black,
    Yellow,
    Blue,
    Red,
    Green,
}

/// Fixed code -> colour table.
pub const CLASS_CODES: [(&str, ClassColor); 5] = [
    ("g", ClassColor::Black),
    ("o", ClassColor::Yellow),
    ("s", ClassColor::Blue),
    ("b", ClassColor::Red),
    ("c", ClassColor::Green),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown classification code '{0}'")]
pub struct UnknownCode(pub String);

impl ClassColor {
    pub fn name(self) -> &'static str {
        match self {
            ClassColor::Black => "black",
            ClassColor::Yellow => "yellow",
            ClassColor::Blue => "blue",
            ClassColor::Red => "red",
            ClassColor::Green => "green",
        }
    }

    pub fn rgb(self) -> RGBColor {
        match self {
            ClassColor::Black => *COLOR_CLASS_BLACK,
            ClassColor::Yellow => *COLOR_CLASS_YELLOW,
            ClassColor::Blue => *COLOR_CLASS_BLUE,
            ClassColor::Red => *COLOR_CLASS_RED,
            ClassColor::Green => *COLOR_CLASS_GREEN,
        }
    }

    /// The log code that maps to this colour.
    pub fn code(self) -> &'static str {
        CLASS_CODES
            .iter()
            .find(|&&(_, color)| color == self)
            .map_or("?", |&(code, _)| code)
    }
}

/// Maps a single classification code to its colour.
pub fn lookup_code(code: &str) -> Result<ClassColor, UnknownCode> {
    CLASS_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|&(_, color)| color)
        .ok_or_else(|| UnknownCode(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(lookup_code("g"), Ok(ClassColor::Black));
        assert_eq!(lookup_code("o"), Ok(ClassColor::Yellow));
        assert_eq!(lookup_code("s"), Ok(ClassColor::Blue));
        assert_eq!(lookup_code("b"), Ok(ClassColor::Red));
        assert_eq!(lookup_code("c"), Ok(ClassColor::Green));
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        assert_eq!(lookup_code("x"), Err(UnknownCode("x".to_string())));
        assert_eq!(lookup_code("G"), Err(UnknownCode("G".to_string())));
        assert!(lookup_code("").is_err());
    }

    #[test]
    fn test_code_round_trip_and_names() {
        for (code, color) in CLASS_CODES {
            assert_eq!(color.code(), code);
        }
        assert_eq!(ClassColor::Blue.name(), "blue");
        assert_eq!(ClassColor::Red.rgb(), RGBColor(255, 0, 0));
    }
}
