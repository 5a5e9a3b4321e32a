#![deny(unsafe_code)]

//! Library surface of the registry-cleaning CLI.
//!
//! Exposed so integration tests can drive the pipeline without
//! spawning the binary.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;

pub use pipeline::{run_clean, CleanOptions, CleanResult};
