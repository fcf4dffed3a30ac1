use std::process::ExitCode;

use csv_grid_tools::cli::{run, Tool};

fn main() -> ExitCode {
    run(Tool::PixelGrid)
}
