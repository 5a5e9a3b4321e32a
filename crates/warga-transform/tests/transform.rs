//! Orchestrator-level tests: row preservation, schema guards, and
//! the derived column contract.

use chrono::NaiveDate;
use proptest::prelude::*;

use warga_model::{CellValue, Dataset, Record};
use warga_transform::normalization::marital::MARITAL_REPLACEMENTS;
use warga_transform::{normalize_status_kawin, TransformConfig, Transformer};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn transformer() -> Transformer {
    Transformer::new(TransformConfig::new(reference()))
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn full_dataset() -> Dataset {
    let mut dataset = Dataset::new(
        ["nik", "nama", "dusun", "status_kawin", "sex", "tanggallahir", "no_kk", "rt"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    dataset
        .push_row(Record::new(vec![
            text("0001"),
            text("SITI"),
            text("dasn geres utara"),
            text("belumkawin"),
            text("PEREMPUAN"),
            text("2000-01-15"),
            text("1234567890.0"),
            text("01"),
        ]))
        .unwrap();
    dataset
        .push_row(Record::new(vec![
            text("0002"),
            text("BUDI"),
            CellValue::Missing,
            text("KAWIN KAWIN"),
            text("LAKI-LAKI"),
            text("garbage"),
            CellValue::Missing,
            text("02"),
        ]))
        .unwrap();
    dataset
}

#[test]
fn derived_columns_appended_in_contract_order() {
    let (output, _) = transformer().transform(&full_dataset());
    let expected: Vec<&str> = vec![
        "nik",
        "nama",
        "dusun",
        "status_kawin",
        "sex",
        "tanggallahir",
        "no_kk",
        "rt",
        "dusun_clean",
        "status_kawin_clean",
        "sex_clean",
        "umur",
        "kelompok_umur",
    ];
    assert_eq!(output.columns, expected);
}

#[test]
fn rows_preserved_in_count_and_order() {
    let (output, report) = transformer().transform(&full_dataset());
    assert_eq!(output.row_count(), 2);
    assert_eq!(report.rows, 2);
    // The pass-through nik column identifies each row.
    assert_eq!(output.cell(&output.rows[0], "nik").unwrap().as_text(), Some("0001"));
    assert_eq!(output.cell(&output.rows[1], "nik").unwrap().as_text(), Some("0002"));
}

#[test]
fn derivations_and_refinements_per_row() {
    let (output, report) = transformer().transform(&full_dataset());
    let first = &output.rows[0];
    assert_eq!(
        output.cell(first, "dusun_clean").unwrap().as_text(),
        Some("DASAN GERES UTARA")
    );
    assert_eq!(
        output.cell(first, "status_kawin_clean").unwrap().as_text(),
        Some("BELUM KAWIN")
    );
    assert_eq!(output.cell(first, "sex_clean").unwrap().as_text(), Some("P"));
    assert_eq!(
        output.cell(first, "tanggallahir").unwrap().as_text(),
        Some("2000-01-15")
    );
    assert_eq!(output.cell(first, "umur").unwrap().as_text(), Some("24"));
    assert_eq!(
        output.cell(first, "kelompok_umur").unwrap().as_text(),
        Some("18-25")
    );
    assert_eq!(
        output.cell(first, "no_kk").unwrap().as_text(),
        Some("1234567890")
    );

    let second = &output.rows[1];
    assert_eq!(
        output.cell(second, "dusun_clean").unwrap().as_text(),
        Some("TIDAK DIKETAHUI")
    );
    assert_eq!(
        output.cell(second, "status_kawin_clean").unwrap().as_text(),
        Some("KAWIN")
    );
    assert!(output.cell(second, "tanggallahir").unwrap().is_missing());
    assert!(output.cell(second, "umur").unwrap().is_missing());
    assert_eq!(
        output.cell(second, "kelompok_umur").unwrap().as_text(),
        Some("Tidak diketahui")
    );
    assert!(output.cell(second, "no_kk").unwrap().is_missing());

    assert_eq!(report.unparseable_dates, 1);
    assert_eq!(report.invalid_household_ids, 0);
}

#[test]
fn schema_absence_skips_derivation_for_whole_run() {
    let mut dataset = Dataset::new(vec!["nama".to_string(), "dusun".to_string()]);
    dataset
        .push_row(Record::new(vec![text("SITI"), text("CEMARE")]))
        .unwrap();

    let (output, report) = transformer().transform(&dataset);
    assert_eq!(output.columns, vec!["nama", "dusun", "dusun_clean"]);
    assert!(!output.has_column("status_kawin_clean"));
    assert!(!output.has_column("umur"));
    assert!(report.skipped_columns.contains(&"status_kawin".to_string()));
    assert!(report.skipped_columns.contains(&"sex".to_string()));
    assert!(report.skipped_columns.contains(&"tanggallahir".to_string()));
    assert!(report.skipped_columns.contains(&"no_kk".to_string()));
    assert_eq!(output.row_count(), 1);
}

#[test]
fn rerun_on_same_raw_input_is_identical() {
    let t = transformer();
    let input = full_dataset();
    let (first, _) = t.transform(&input);
    let (second, _) = t.transform(&input);
    assert_eq!(first, second);
    // The input snapshot itself is untouched.
    assert_eq!(input, full_dataset());
}

#[test]
fn invalid_household_id_is_counted_not_fatal() {
    let mut dataset = Dataset::new(vec!["no_kk".to_string()]);
    dataset.push_row(Record::new(vec![text("KK-001")])).unwrap();
    dataset.push_row(Record::new(vec![text("42")])).unwrap();

    let (output, report) = transformer().transform(&dataset);
    assert_eq!(report.invalid_household_ids, 1);
    assert!(output.cell(&output.rows[0], "no_kk").unwrap().is_missing());
    assert_eq!(output.cell(&output.rows[1], "no_kk").unwrap().as_text(), Some("42"));
}

proptest! {
    /// Normalization is idempotent: re-normalizing any output label
    /// yields the same label.
    #[test]
    fn status_kawin_idempotent(raw in ".{0,40}") {
        let once = normalize_status_kawin(Some(&raw), MARITAL_REPLACEMENTS);
        let twice = normalize_status_kawin(Some(once.as_str()), MARITAL_REPLACEMENTS);
        prop_assert_eq!(once, twice);
    }

    /// Any value containing BELUM classifies as BELUM KAWIN whatever
    /// else it contains.
    #[test]
    fn belum_always_wins(suffix in "[A-Z ]{0,20}") {
        let raw = format!("BELUM {suffix} KAWIN");
        let status = normalize_status_kawin(Some(&raw), MARITAL_REPLACEMENTS);
        prop_assert_eq!(status, warga_model::MaritalStatus::BelumKawin);
    }
}
