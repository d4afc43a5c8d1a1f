// src/main.rs

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use driveplot::constants::DEFAULT_OUTPUT_FILE;
use driveplot::data_input::log_reader::load_logs;
use driveplot::plot_functions::plot_error_scatter::plot_error_scatter;
use driveplot::section::Section;
use driveplot::types::DriveplotResult;

#[derive(Parser, Debug)]
#[command(author, version = driveplot::crate_version(), about, long_about = None)]
struct Args {
    /// Gzip-compressed drive error log(s), processed in the order given
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Error section to plot
    #[arg(short, long, value_enum, default_value_t = SectionArg::Azimuth)]
    section: SectionArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SectionArg {
    Azimuth,
    Elevation,
}

impl From<SectionArg> for Section {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Azimuth => Section::Azimuth,
            SectionArg::Elevation => Section::Elevation,
        }
    }
}

/// Heading for the plot page: the first input's stem, plus a count of any others.
fn root_name(files: &[PathBuf]) -> String {
    let first = files
        .first()
        .and_then(|p| p.file_stem())
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    match files.len() {
        0 | 1 => first,
        n => format!("{} (+{} more)", first, n - 1),
    }
}

fn run(args: Args) -> DriveplotResult<()> {
    let log = load_logs(&args.files)?;
    info!(
        "Loaded {} records from {} file(s)",
        log.len(),
        args.files.len()
    );

    plot_error_scatter(
        &log,
        args.section.into(),
        &root_name(&args.files),
        &args.output,
    )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
