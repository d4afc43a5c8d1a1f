// src/data_input/mod.rs

pub mod log_data;
pub mod log_parser;
pub mod log_reader;

// src/data_input/mod.rs
