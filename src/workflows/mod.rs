pub mod enrichment;
pub mod import;
pub mod questions;
