use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ConvertError, Result};

/// Write `value` to `path` as compact JSON, replacing any existing file.
///
/// The document is fully encoded before the file is touched, so a
/// serialization failure leaves the destination alone.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    fs::write(path, &bytes).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Matrix};
    use tempfile::tempdir;

    #[test]
    fn test_write_json_is_compact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let matrix = Matrix::new(vec![
            vec![CellValue::Integer(1), CellValue::Text("a".to_string())],
            vec![CellValue::Float(2.5), CellValue::Null],
            vec![CellValue::Bool(true)],
        ]);

        write_json(&path, &matrix).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"[[1,"a"],[2.5,null],[true]]"#);
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "previous content that is longer").unwrap();

        write_json(&path, &Matrix::default()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");

        let err = write_json(&path, &Matrix::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
