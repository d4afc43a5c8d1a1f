// src/plot_functions/mod.rs

pub mod plot_error_scatter;

// src/plot_functions/mod.rs
