//! The two one-shot conversions: load, transform, write.

use std::path::Path;

use log::info;

use crate::data::grid::PixelGrid;
use crate::data::loader::{load_matrix, load_pixel_pairs};
use crate::data::model::Matrix;
use crate::data::writer::write_json;
use crate::error::Result;

/// Convert a headerless CSV into a JSON 2D list.
pub fn csv_to_matrix(input: &Path, output: &Path) -> Result<Matrix> {
    let matrix = load_matrix(input)?;
    info!(
        "loaded {} rows (widest {}) from {}",
        matrix.len(),
        matrix.max_width(),
        input.display()
    );
    write_json(output, &matrix)?;
    info!("wrote matrix to {}", output.display());
    Ok(matrix)
}

/// Convert a 448-row `x,y` CSV into a JSON 64 × 7 grid of `[x, y]` pairs.
///
/// Nothing is written unless the row count check passes.
pub fn pixel_coords_to_grid(input: &Path, output: &Path) -> Result<PixelGrid> {
    let pairs = load_pixel_pairs(input)?;
    info!("loaded {} samples from {}", pairs.len(), input.display());
    let grid = PixelGrid::from_pairs(&pairs)?;
    write_json(output, &grid)?;
    info!(
        "wrote {}-row pixel grid to {}",
        grid.groups().len(),
        output.display()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::grid::{EXPECTED_ROWS, GROUP_COUNT, GROUP_SIZE};
    use crate::error::ConvertError;
    use std::fmt::Write as _;
    use std::fs;
    use tempfile::tempdir;

    fn pixel_csv(rows: usize) -> String {
        let mut s = String::from("x,y\n");
        for i in 0..rows {
            writeln!(s, "{},{}", i, i * 2).unwrap();
        }
        s
    }

    #[test]
    fn test_csv_to_matrix_scenario() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "1,2\n3,4\n5,6").unwrap();

        let matrix = csv_to_matrix(&input, &output).unwrap();

        assert_eq!(matrix.len(), 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "[[1,2],[3,4],[5,6]]");
    }

    #[test]
    fn test_csv_to_matrix_is_idempotent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "1.5,abc,\n2,def,true\n").unwrap();

        csv_to_matrix(&input, &output).unwrap();
        let first = fs::read(&output).unwrap();
        csv_to_matrix(&input, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_csv_to_matrix_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.json");

        let err = csv_to_matrix(&dir.path().join("absent.csv"), &output).unwrap_err();

        assert!(matches!(err, ConvertError::FileNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_pixel_coords_to_grid_scenario() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pixels.csv");
        let output = dir.path().join("grid.json");
        fs::write(&input, pixel_csv(EXPECTED_ROWS)).unwrap();

        pixel_coords_to_grid(&input, &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let groups = json.as_array().unwrap();
        assert_eq!(groups.len(), GROUP_COUNT);
        for group in groups {
            assert_eq!(group.as_array().unwrap().len(), GROUP_SIZE);
        }
        assert_eq!(
            groups[0].to_string(),
            "[[0,0],[1,2],[2,4],[3,6],[4,8],[5,10],[6,12]]"
        );
    }

    #[test]
    fn test_pixel_coords_to_grid_roundtrips_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pixels.csv");
        let output = dir.path().join("grid.json");
        fs::write(&input, pixel_csv(EXPECTED_ROWS)).unwrap();

        pixel_coords_to_grid(&input, &output).unwrap();

        let grid: Vec<Vec<[i64; 2]>> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let flat: Vec<[i64; 2]> = grid.into_iter().flatten().collect();
        let expected: Vec<[i64; 2]> = (0..EXPECTED_ROWS as i64).map(|i| [i, i * 2]).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_pixel_coords_to_grid_wrong_count_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pixels.csv");
        let output = dir.path().join("grid.json");
        fs::write(&input, pixel_csv(447)).unwrap();

        let err = pixel_coords_to_grid(&input, &output).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::RowCount {
                expected: 448,
                actual: 447
            }
        ));
        assert!(err.to_string().contains("exactly 448 rows"));
        assert!(!output.exists());
    }

    #[test]
    fn test_pixel_coords_to_grid_wrong_count_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pixels.csv");
        let output = dir.path().join("grid.json");
        fs::write(&input, pixel_csv(449)).unwrap();
        fs::write(&output, "old").unwrap();

        assert!(pixel_coords_to_grid(&input, &output).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "old");
    }
}
