#![deny(unsafe_code)]

//! Writes the canonical dataset as a CSV artifact.
//!
//! The artifact is written in full to a temporary sibling path and
//! renamed into place, so an interrupted run never leaves a partial
//! file that could be mistaken for a complete output.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use warga_model::{CellValue, Dataset};

/// Errors raised while writing the output artifact. These are fatal:
/// the caller aborts the run and reports them.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize CSV to {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Writes `dataset` to `path` as CSV, atomically.
///
/// Missing cells serialize as empty fields. The data is first
/// written and flushed to `<path>.tmp` in the same directory, then
/// renamed onto the final path.
pub fn write_csv_table(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| OutputError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp_path = tmp_sibling(path);
    let result = write_csv_to(dataset, &tmp_path).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|source| OutputError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        // Leave nothing behind on failure.
        let _ = fs::remove_file(&tmp_path);
        return result;
    }

    info!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "wrote canonical dataset"
    );
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.csv".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_csv_to(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    writer
        .write_record(&dataset.columns)
        .map_err(|e| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for row in &dataset.rows {
        let fields = row.cells.iter().map(|cell| match cell {
            CellValue::Text(value) => value.as_str(),
            CellValue::Missing => "",
        });
        writer
            .write_record(fields)
            .map_err(|e| OutputError::CsvWrite {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    writer.flush().map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warga_model::Record;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new(vec!["nama".to_string(), "no_kk".to_string()]);
        dataset
            .push_row(Record::new(vec![
                CellValue::Text("SITI".to_string()),
                CellValue::Missing,
            ]))
            .unwrap();
        dataset
    }

    #[test]
    fn writes_missing_as_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_table(&sample(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "nama,no_kk\nSITI,\n");
    }

    #[test]
    fn no_tmp_file_left_after_publish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_table(&sample(), &path).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("out.csv.tmp").exists());
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.csv");
        write_csv_table(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rewrite_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_table(&sample(), &path).unwrap();
        let first = fs::read(&path).unwrap();
        write_csv_table(&sample(), &path).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
