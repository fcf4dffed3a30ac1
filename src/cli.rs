//! Command-line entry point shared by both converter binaries.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::convert::{csv_to_matrix, pixel_coords_to_grid};

#[derive(Parser, Debug)]
#[command(
    version,
    after_help = "Paths starting with '-' must follow '--', e.g. `-- -in.csv out.json`."
)]
pub struct ConvertArgs {
    /// CSV file to read
    #[arg(value_name = "INPUT.csv")]
    pub input: PathBuf,

    /// JSON file to write (overwritten if it exists)
    #[arg(value_name = "OUTPUT.json")]
    pub output: PathBuf,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which conversion a binary performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Matrix,
    PixelGrid,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Matrix => "generic-csv-to-json",
            Tool::PixelGrid => "pixel-coords-to-grid",
        }
    }

    fn about(self) -> &'static str {
        match self {
            Tool::Matrix => "Convert a headerless CSV file into a JSON 2D list",
            Tool::PixelGrid => {
                "Regroup 448 x,y pixel coordinates into a JSON 64x7 coordinate matrix"
            }
        }
    }

    fn convert(self, args: &ConvertArgs) -> Result<()> {
        let context = || format!("converting {}", args.input.display());
        match self {
            Tool::Matrix => {
                csv_to_matrix(&args.input, &args.output).with_context(context)?;
            }
            Tool::PixelGrid => {
                pixel_coords_to_grid(&args.input, &args.output).with_context(context)?;
            }
        }
        Ok(())
    }
}

/// Parse the arguments for `tool`. The first item is the program name.
pub fn parse_args<I, T>(tool: Tool, args: I) -> std::result::Result<ConvertArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = ConvertArgs::command()
        .name(tool.name())
        .bin_name(tool.name())
        .about(tool.about())
        .try_get_matches_from(args)?;
    ConvertArgs::from_arg_matches(&matches)
}

fn init_logging(verbose: u8) {
    // Ignore the error if a logger is already installed.
    let _ = env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .try_init();
}

pub fn run(tool: Tool) -> ExitCode {
    run_from(tool, std::env::args_os())
}

/// Run `tool` with explicit arguments. Usage errors and failed conversions
/// both exit with status 1.
pub fn run_from<I, T>(tool: Tool, args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match parse_args(tool, args) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version come through here too
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose);

    match tool.convert(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
