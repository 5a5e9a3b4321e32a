//! Reading a registry CSV export into a `Dataset`.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use warga_model::{CellValue, Dataset, Record};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Null tokens produced by upstream tooling when a frame with missing
/// values is re-exported to CSV.
pub fn is_null_token(value: &str) -> bool {
    matches!(value.to_ascii_uppercase().as_str(), "NAN" | "NONE")
}

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() || is_null_token(trimmed) {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Sorts a csv-crate error into the ingest taxonomy: missing file,
/// unreadable file, or malformed content.
fn map_csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => {
            if source.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        }
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Reads a registry CSV into a [`Dataset`].
///
/// Headers are trimmed and BOM-stripped; short rows are padded with
/// missing cells and overlong rows truncated to the header width, so
/// every record matches the schema.
pub fn read_csv_table(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| map_csv_error(path, e))?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut dataset = Dataset::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        let mut cells = Vec::with_capacity(dataset.columns.len());
        for idx in 0..dataset.columns.len() {
            cells.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        // Width is forced to the schema above, so push_row cannot fail.
        let _ = dataset.push_row(Record::new(cells));
    }

    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "ingested registry csv"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn reads_headers_and_rows() {
        let file = create_temp_csv("nama,dusun,sex\nSITI,CEMARA,PEREMPUAN\nBUDI,,LAKI-LAKI\n");
        let dataset = read_csv_table(file.path()).unwrap();

        assert_eq!(dataset.columns, vec!["nama", "dusun", "sex"]);
        assert_eq!(dataset.row_count(), 2);
        assert!(dataset.cell(&dataset.rows[1], "dusun").unwrap().is_missing());
    }

    #[test]
    fn strips_bom_from_first_header() {
        let file = create_temp_csv("\u{feff}nama,dusun\nSITI,CEMARA\n");
        let dataset = read_csv_table(file.path()).unwrap();
        assert_eq!(dataset.columns[0], "nama");
    }

    #[test]
    fn null_tokens_ingest_as_missing() {
        let file = create_temp_csv("nama,no_kk\nSITI,NaN\nBUDI,None\n");
        let dataset = read_csv_table(file.path()).unwrap();
        assert!(dataset.cell(&dataset.rows[0], "no_kk").unwrap().is_missing());
        assert!(dataset.cell(&dataset.rows[1], "no_kk").unwrap().is_missing());
    }

    #[test]
    fn short_rows_are_padded() {
        let file = create_temp_csv("a,b,c\n1,2\n");
        let dataset = read_csv_table(file.path()).unwrap();
        assert_eq!(dataset.rows[0].cells.len(), 3);
        assert!(dataset.rows[0].cells[2].is_missing());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let result = read_csv_table(Path::new("/nonexistent/warga.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn unreadable_path_is_file_read_error() {
        // Opening a directory succeeds on Linux; the failure surfaces
        // on the first read, mid-stream rather than at open time.
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_table(dir.path());
        assert!(matches!(result, Err(IngestError::FileRead { .. })));
    }
}
