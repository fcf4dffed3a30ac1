//! Per-column scalar inference for headerless CSV cells.
//!
//! A whole column shares one kind: a single non-numeric cell turns every cell
//! in that column back into text, and a missing cell in an integer column
//! widens it to float.

use super::model::CellValue;

/// Strings treated as a missing value.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: &[&str] = &["True", "true", "TRUE"];
const FALSE_VALUES: &[&str] = &["False", "false", "FALSE"];

/// The dtype shared by every cell of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

pub fn is_missing(s: &str) -> bool {
    NA_VALUES.contains(&s)
}

/// Parse a float, refusing `inf`/`infinity` so they stay text.
fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(s: &str) -> Option<bool> {
    if TRUE_VALUES.contains(&s) {
        Some(true)
    } else if FALSE_VALUES.contains(&s) {
        Some(false)
    } else {
        None
    }
}

/// Decide the kind of a column from all of its raw cells.
///
/// A column made only of missing markers is a float column, so its cells all
/// come out as `null`.
pub fn infer_column_kind<'a, I>(cells: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;
    let mut has_missing = false;

    for cell in cells {
        if is_missing(cell) {
            has_missing = true;
            continue;
        }
        let trimmed = cell.trim();
        if all_int && trimmed.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && parse_finite(trimmed).is_none() {
            all_float = false;
        }
        if all_bool && parse_bool(cell).is_none() {
            all_bool = false;
        }
        if !all_int && !all_float && !all_bool {
            return ColumnKind::Text;
        }
    }

    if all_int && !has_missing {
        ColumnKind::Integer
    } else if all_float {
        ColumnKind::Float
    } else if all_bool {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

impl ColumnKind {
    /// Convert one raw cell of a column already classified as `self`.
    pub fn convert(self, cell: &str) -> CellValue {
        if is_missing(cell) {
            return CellValue::Null;
        }
        let trimmed = cell.trim();
        match self {
            ColumnKind::Integer => trimmed
                .parse::<i64>()
                .map(CellValue::Integer)
                .unwrap_or_else(|_| CellValue::Text(cell.to_string())),
            ColumnKind::Float => parse_finite(trimmed)
                .map(CellValue::Float)
                .unwrap_or_else(|| CellValue::Text(cell.to_string())),
            ColumnKind::Bool => parse_bool(cell)
                .map(CellValue::Bool)
                .unwrap_or_else(|| CellValue::Text(cell.to_string())),
            ColumnKind::Text => CellValue::Text(cell.to_string()),
        }
    }
}
