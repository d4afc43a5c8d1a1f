// src/font_config.rs

// Font styles for plot rendering, kept in one place so every chart uses the same text setup.

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
};

/// Font family name for default system fonts.
/// When plotters renders with "sans-serif", it uses system fonts.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoFont trait
// (`.caption()`, `.label_style()`, `Text::new`).
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);
