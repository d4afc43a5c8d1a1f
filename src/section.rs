// src/section.rs

//! Drive error sections of the log.
//!
//! The parser state is `Option<Section>`: `None` until the first section
//! header is seen, then whichever header came last.

use std::fmt;

use crate::constants::{AZ_ERROR_HEADER, EL_ERROR_HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Azimuth,
    Elevation,
}

/// Header line -> section entered. Matching is on the whole line.
pub const SECTION_HEADERS: [(&str, Section); 2] = [
    (AZ_ERROR_HEADER, Section::Azimuth),
    (EL_ERROR_HEADER, Section::Elevation),
];

/// All section names, in table order.
pub const SECTION_NAMES: [&str; 2] = ["azimuth", "elevation"];

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Azimuth => SECTION_NAMES[0],
            Section::Elevation => SECTION_NAMES[1],
        }
    }

    /// Short label used in plot titles and axis descriptions.
    pub fn short_label(self) -> &'static str {
        match self {
            Section::Azimuth => "AZ",
            Section::Elevation => "EL",
        }
    }

    /// Returns the section a header line opens, if the line is exactly a header.
    pub fn from_header(line: &str) -> Option<Section> {
        SECTION_HEADERS
            .iter()
            .find(|(header, _)| *header == line)
            .map(|&(_, section)| section)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies one line to the section state. Non-header lines keep the current state.
pub fn next_section(current: Option<Section>, line: &str) -> Option<Section> {
    Section::from_header(line).or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_headers_switch_state() {
        assert_eq!(next_section(None, "AZ ERROR"), Some(Section::Azimuth));
        assert_eq!(
            next_section(Some(Section::Azimuth), "EL ERROR"),
            Some(Section::Elevation)
        );
        assert_eq!(
            next_section(Some(Section::Elevation), "AZ ERROR"),
            Some(Section::Azimuth)
        );
    }

    #[test]
    fn test_near_miss_headers_keep_state() {
        assert_eq!(next_section(None, "  AZ ERROR LOG"), None);
        assert_eq!(next_section(None, " AZ ERROR"), None);
        assert_eq!(next_section(None, "az error"), None);
        assert_eq!(
            next_section(Some(Section::Azimuth), "EL ERROR "),
            Some(Section::Azimuth)
        );
    }

    #[test]
    fn test_section_names() {
        assert_eq!(Section::Azimuth.name(), "azimuth");
        assert_eq!(Section::Elevation.to_string(), "elevation");
        assert_eq!(Section::Elevation.short_label(), "EL");
    }
}
