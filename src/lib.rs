//! CSV to nested-JSON converters.
//!
//! This crate provides two one-shot conversions:
//! - A headerless CSV to a JSON 2D list, typing each column the way a
//!   dataframe reader would
//! - A 448-row `x,y` pixel coordinate CSV to a 64 × 7 JSON grid of `[x, y]`
//!   pairs
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use csv_grid_tools::convert::pixel_coords_to_grid;
//!
//! let grid = pixel_coords_to_grid(Path::new("pixels.csv"), Path::new("grid.json")).unwrap();
//! assert_eq!(grid.groups().len(), 64);
//! ```

pub mod cli;
pub mod convert;
pub mod data;
pub mod error;

pub use data::grid::PixelGrid;
pub use data::model::{CellValue, Matrix, Number, PixelPair};
pub use error::ConvertError;
