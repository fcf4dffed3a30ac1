use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use super::infer::{infer_column_kind, ColumnKind};
use super::model::{CellValue, Matrix, Number, PixelPair};
use crate::error::{ConvertError, Result};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Open `path` for CSV reading, reporting a missing file as
/// [`ConvertError::FileNotFound`].
fn open_csv(path: &Path, builder: &ReaderBuilder) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConvertError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(builder.from_reader(file))
}

fn read_records(path: &Path, reader: &mut Reader<File>) -> Result<Vec<StringRecord>> {
    reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ConvertError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

// ---------------------------------------------------------------------------
// Headerless matrix loader
// ---------------------------------------------------------------------------

/// Load a headerless CSV as rows of typed cells.
///
/// Every column gets one [`ColumnKind`], decided over all the cells present
/// at that index. Rows of different lengths are kept as they are.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    let mut reader = open_csv(path, &builder)?;
    let records = read_records(path, &mut reader)?;
    if records.is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let width = records.iter().map(StringRecord::len).max().unwrap_or(0);
    let kinds: Vec<ColumnKind> = (0..width)
        .map(|col| infer_column_kind(records.iter().filter_map(|r| r.get(col))))
        .collect();
    log::debug!("column kinds for {}: {:?}", path.display(), kinds);

    let rows: Vec<Vec<CellValue>> = records
        .iter()
        .map(|record| {
            record
                .iter()
                .zip(&kinds)
                .map(|(cell, kind)| kind.convert(cell))
                .collect()
        })
        .collect();

    let matrix = Matrix::new(rows);
    if !matrix.is_rectangular() {
        log::warn!(
            "{} has rows of unequal length; keeping them as-is",
            path.display()
        );
    }
    Ok(matrix)
}

// ---------------------------------------------------------------------------
// Pixel coordinate loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `x` and `y` columns, one sample per
/// row. Other columns are ignored.
///
/// Both columns share one numeric type: if any coordinate is fractional,
/// every coordinate is returned as a float.
pub fn load_pixel_pairs(path: &Path) -> Result<Vec<PixelPair>> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true);
    let mut reader = open_csv(path, &builder)?;

    let headers = reader.headers().map_err(|e| ConvertError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if headers.is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let x_idx = column_index(headers, "x")?;
    let y_idx = column_index(headers, "y")?;

    let records = read_records(path, &mut reader)?;
    let mut pairs = Vec::with_capacity(records.len());

    for (row_no, record) in records.iter().enumerate() {
        let x = parse_coordinate(record, x_idx, row_no, "x")?;
        let y = parse_coordinate(record, y_idx, row_no, "y")?;
        pairs.push([x, y]);
    }

    if pairs.iter().flatten().any(Number::is_float) {
        log::debug!("fractional coordinates found; widening all to float");
        for pair in &mut pairs {
            *pair = [pair[0].to_float(), pair[1].to_float()];
        }
    }

    Ok(pairs)
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(ConvertError::MissingColumn { column })
}

fn parse_coordinate(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<Number> {
    let raw = record.get(idx).unwrap_or("");
    Number::parse(raw).ok_or_else(|| ConvertError::InvalidNumber {
        row,
        column,
        value: raw.to_string(),
    })
}
