// src/data_input/log_data.rs

use crate::classification::ClassColor;
use crate::section::Section;

/// Number of numeric fields in an error summary block.
pub const FIELD_COUNT: usize = 8;

/// Numeric fields of an AZ/EL error summary block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Average,
    Median,
    Min,
    Max,
    Stdev,
    MaxAmp,
    MaxInterval,
    N,
}

/// Field names exactly as they appear in the log, indexed by `Field as usize`.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "average",
    "median",
    "min",
    "max",
    "stdev",
    "maxamp",
    "maxinterval",
    "n",
];

pub const ALL_FIELDS: [Field; FIELD_COUNT] = [
    Field::Average,
    Field::Median,
    Field::Min,
    Field::Max,
    Field::Stdev,
    Field::MaxAmp,
    Field::MaxInterval,
    Field::N,
];

impl Field {
    pub fn name(self) -> &'static str {
        FIELD_NAMES[self as usize]
    }

    pub fn from_name(name: &str) -> Option<Field> {
        FIELD_NAMES
            .iter()
            .position(|&known| known == name)
            .map(|i| ALL_FIELDS[i])
    }
}

/// Column store for one section (azimuth or elevation).
///
/// Every column has the same length as `classification`; a field missing from
/// a record holds `NaN` at that record's index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorTable {
    columns: [Vec<f64>; FIELD_COUNT],
    classification: Vec<ClassColor>,
}

impl ErrorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self, field: Field) -> &[f64] {
        &self.columns[field as usize]
    }

    pub fn classification(&self) -> &[ClassColor] {
        &self.classification
    }

    pub fn len(&self) -> usize {
        self.classification.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classification.is_empty()
    }

    /// Appends one record. `values` is indexed by `Field as usize`; `None` pads with `NaN`.
    pub fn push_record(&mut self, values: &[Option<f64>; FIELD_COUNT], color: ClassColor) {
        for (column, value) in self.columns.iter_mut().zip(values.iter()) {
            column.push(value.unwrap_or(f64::NAN));
        }
        self.classification.push(color);
    }

    /// Concatenates `other` after the records already held.
    pub fn append(&mut self, mut other: ErrorTable) {
        for (column, other_column) in self.columns.iter_mut().zip(other.columns.iter_mut()) {
            column.append(other_column);
        }
        self.classification.append(&mut other.classification);
    }
}

/// Both accumulators of a parsed log. Index `i` of either table is the same record.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedLog {
    pub azimuth: ErrorTable,
    pub elevation: ErrorTable,
}

impl ParsedLog {
    pub fn table(&self, section: Section) -> &ErrorTable {
        match section {
            Section::Azimuth => &self.azimuth,
            Section::Elevation => &self.elevation,
        }
    }

    pub fn len(&self) -> usize {
        self.azimuth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.azimuth.is_empty()
    }

    pub fn append(&mut self, other: ParsedLog) {
        self.azimuth.append(other.azimuth);
        self.elevation.append(other.elevation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        for field in ALL_FIELDS {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("maxinterval"), Some(Field::MaxInterval));
        assert_eq!(Field::from_name("Average"), None);
        assert_eq!(Field::from_name("average:"), None);
    }

    #[test]
    fn test_push_record_pads_missing_fields() {
        let mut table = ErrorTable::new();
        let mut values = [None; FIELD_COUNT];
        values[Field::Average as usize] = Some(1.5);
        values[Field::Stdev as usize] = Some(0.3);
        table.push_record(&values, ClassColor::Black);

        assert_eq!(table.len(), 1);
        assert_eq!(table.column(Field::Average), &[1.5]);
        assert_eq!(table.column(Field::Stdev), &[0.3]);
        assert!(table.column(Field::Median)[0].is_nan());
        for field in ALL_FIELDS {
            assert_eq!(table.column(field).len(), table.len());
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut first = ErrorTable::new();
        let mut second = ErrorTable::new();
        let mut values = [Some(0.0); FIELD_COUNT];
        values[0] = Some(1.0);
        first.push_record(&values, ClassColor::Red);
        values[0] = Some(2.0);
        second.push_record(&values, ClassColor::Green);

        first.append(second);
        assert_eq!(first.column(Field::Average), &[1.0, 2.0]);
        assert_eq!(first.classification(), &[ClassColor::Red, ClassColor::Green]);
    }
}
