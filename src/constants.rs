// src/constants.rs

use plotters::style::colors::{BLACK, BLUE, GREEN, RED, YELLOW};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 1000;

// Default output file when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "driveplot_scatter.png";

// Exact section header lines in the drive error logs.
pub const AZ_ERROR_HEADER: &str = "AZ ERROR";
pub const EL_ERROR_HEADER: &str = "EL ERROR";

// First token of a classification line.
pub const CLASSIFICATION_TOKEN: &str = "classification:";
pub const CLASSIFICATION_SEPARATOR: char = ',';

// --- Classification Colors ---
pub const COLOR_CLASS_BLACK: &RGBColor = &BLACK;
pub const COLOR_CLASS_YELLOW: &RGBColor = &YELLOW;
pub const COLOR_CLASS_BLUE: &RGBColor = &BLUE;
pub const COLOR_CLASS_RED: &RGBColor = &RED;
pub const COLOR_CLASS_GREEN: &RGBColor = &GREEN;

// Scatter marker radius in pixels.
pub const SCATTER_POINT_SIZE: u32 = 4;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;

// src/constants.rs
