//! Field normalizers and derivers for registry records.
//!
//! - **dusun**: neighborhood name repair (open set)
//! - **marital**: two-stage marital-status normalization
//! - **sex**: sex code mapping
//! - **age**: birthdate parsing, age and bracket derivation
//! - **household**: household-id canonicalization

pub mod age;
pub mod dusun;
pub mod household;
pub mod marital;
pub mod sex;
