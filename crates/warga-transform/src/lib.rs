#![deny(unsafe_code)]

//! Normalization and derivation core for civil-registry records.
//!
//! Every function here is a pure mapping from one record's raw fields
//! to canonical values: typo repair via ordered replacement tables,
//! marital-status classification via a first-match-wins ladder, age
//! derivation against an explicit reference date, and household-id
//! canonicalization. The [`Transformer`] applies them to a whole
//! dataset, preserving row count and order exactly.

pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod rules;

pub use error::TransformError;
pub use normalization::age::{classify_age, derive_age_fields, parse_birth_date, AgeFields};
pub use normalization::dusun::normalize_dusun;
pub use normalization::household::normalize_household_id;
pub use normalization::marital::normalize_status_kawin;
pub use normalization::sex::normalize_sex;
pub use pipeline::{TransformConfig, TransformReport, Transformer};
pub use rules::{apply_replacements, classify, ClassifyRule, Pattern, Replacement};
