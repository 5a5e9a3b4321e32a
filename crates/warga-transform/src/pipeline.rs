//! Record transformer: applies every normalizer to a dataset.
//!
//! The transformer is an embarrassingly parallel map in principle;
//! records are normalized independently, with no cross-record reads.
//! This implementation walks rows sequentially, which already
//! preserves the required output ordering.

use chrono::NaiveDate;
use tracing::{debug, info};

use warga_model::{CellValue, Dataset, Record};

use crate::normalization::age::derive_age_fields;
use crate::normalization::dusun::{normalize_dusun, DUSUN_REPLACEMENTS};
use crate::normalization::household::normalize_household_id;
use crate::normalization::marital::{normalize_status_kawin, MARITAL_REPLACEMENTS};
use crate::normalization::sex::normalize_sex;
use crate::rules::Replacement;

/// Source columns the transformer derives from.
pub const COL_DUSUN: &str = "dusun";
pub const COL_STATUS_KAWIN: &str = "status_kawin";
pub const COL_SEX: &str = "sex";
pub const COL_TANGGAL_LAHIR: &str = "tanggallahir";
pub const COL_NO_KK: &str = "no_kk";

/// Derived columns, appended in this order after the originals.
pub const COL_DUSUN_CLEAN: &str = "dusun_clean";
pub const COL_STATUS_KAWIN_CLEAN: &str = "status_kawin_clean";
pub const COL_SEX_CLEAN: &str = "sex_clean";
pub const COL_UMUR: &str = "umur";
pub const COL_KELOMPOK_UMUR: &str = "kelompok_umur";

/// Configuration for one transform run.
///
/// The replacement tables default to the built-in constants but are
/// plain data, so tests can inject their own without touching any
/// global state. The reference date is always explicit; the core
/// never reads a wall clock.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    pub reference_date: NaiveDate,
    pub dusun_replacements: Vec<Replacement>,
    pub marital_replacements: Vec<Replacement>,
}

impl TransformConfig {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            dusun_replacements: DUSUN_REPLACEMENTS.to_vec(),
            marital_replacements: MARITAL_REPLACEMENTS.to_vec(),
        }
    }
}

/// Outcome counters for one transform run.
///
/// `skipped_columns` records schema-level skips (the whole source
/// column was absent), which is a different condition from a
/// per-record missing value and is reported as such.
#[derive(Debug, Clone, Default)]
pub struct TransformReport {
    pub rows: usize,
    pub input_columns: usize,
    pub output_columns: usize,
    pub skipped_columns: Vec<String>,
    pub unparseable_dates: usize,
    pub invalid_household_ids: usize,
}

/// Applies the full normalization pipeline to a dataset.
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Transforms a raw dataset into its canonical form.
    ///
    /// The output has exactly the same rows in the same order, with
    /// `tanggallahir`/`no_kk` refined in place and the derived
    /// columns appended. Each derivation runs only if its source
    /// column exists in the schema; this guard is evaluated once per
    /// run, never per record.
    pub fn transform(&self, input: &Dataset) -> (Dataset, TransformReport) {
        let dusun_idx = input.column_index(COL_DUSUN);
        let status_idx = input.column_index(COL_STATUS_KAWIN);
        let sex_idx = input.column_index(COL_SEX);
        let birth_idx = input.column_index(COL_TANGGAL_LAHIR);
        let kk_idx = input.column_index(COL_NO_KK);

        let mut report = TransformReport {
            rows: input.row_count(),
            input_columns: input.column_count(),
            ..TransformReport::default()
        };
        for (idx, column) in [
            (dusun_idx, COL_DUSUN),
            (status_idx, COL_STATUS_KAWIN),
            (sex_idx, COL_SEX),
            (birth_idx, COL_TANGGAL_LAHIR),
            (kk_idx, COL_NO_KK),
        ] {
            if idx.is_none() {
                debug!(column, "source column absent, skipping derivation");
                report.skipped_columns.push(column.to_string());
            }
        }

        let mut columns = input.columns.clone();
        if dusun_idx.is_some() {
            columns.push(COL_DUSUN_CLEAN.to_string());
        }
        if status_idx.is_some() {
            columns.push(COL_STATUS_KAWIN_CLEAN.to_string());
        }
        if sex_idx.is_some() {
            columns.push(COL_SEX_CLEAN.to_string());
        }
        if birth_idx.is_some() {
            columns.push(COL_UMUR.to_string());
            columns.push(COL_KELOMPOK_UMUR.to_string());
        }

        let mut output = Dataset::new(columns);
        for row in &input.rows {
            let mut cells = row.cells.clone();

            // Refine tanggallahir in place: ISO rendering on success,
            // missing when unparseable. The derived age fields are
            // appended at the end of the row below.
            let age = birth_idx.map(|idx| {
                let raw = row.cells[idx].as_text();
                let fields = derive_age_fields(raw, self.config.reference_date);
                if raw.is_some() && fields.birth_date.is_none() {
                    report.unparseable_dates += 1;
                }
                cells[idx] = match fields.birth_date {
                    Some(date) => CellValue::Text(date.format("%Y-%m-%d").to_string()),
                    None => CellValue::Missing,
                };
                fields
            });

            if let Some(idx) = kk_idx {
                self.refine_household(&mut cells[idx], &mut report);
            }

            // Derived columns, in the output contract order.
            if let Some(idx) = dusun_idx {
                cells.push(CellValue::Text(normalize_dusun(
                    row.cells[idx].as_text(),
                    &self.config.dusun_replacements,
                )));
            }
            if let Some(idx) = status_idx {
                let status =
                    normalize_status_kawin(row.cells[idx].as_text(), &self.config.marital_replacements);
                cells.push(CellValue::Text(status.as_str().to_string()));
            }
            if let Some(idx) = sex_idx {
                cells.push(match normalize_sex(row.cells[idx].as_text()) {
                    Some(code) => CellValue::Text(code),
                    None => CellValue::Missing,
                });
            }
            if let Some(fields) = age {
                cells.push(match fields.umur {
                    Some(umur) => CellValue::Text(umur.to_string()),
                    None => CellValue::Missing,
                });
                cells.push(CellValue::Text(fields.kelompok_umur.as_str().to_string()));
            }

            // Schema width is columns.len() by construction.
            let _ = output.push_row(Record::new(cells));
        }

        report.output_columns = output.column_count();
        info!(
            rows = report.rows,
            input_columns = report.input_columns,
            output_columns = report.output_columns,
            skipped = report.skipped_columns.len(),
            "transformed dataset"
        );
        (output, report)
    }

    fn refine_household(&self, cell: &mut CellValue, report: &mut TransformReport) {
        let raw = cell.as_text().map(str::to_string);
        match normalize_household_id(raw.as_deref()) {
            Ok(Some(id)) => *cell = CellValue::Text(id),
            Ok(None) => *cell = CellValue::Missing,
            Err(error) => {
                debug!(%error, "invalid household id, leaving missing");
                report.invalid_household_ids += 1;
                *cell = CellValue::Missing;
            }
        }
    }
}
