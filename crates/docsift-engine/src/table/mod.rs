//! # Table Extraction
//!
//! Table-bearing sections go through two steps once a candidate table is in
//! hand:
//!
//! - **`classify`**: is this the table the section describes? Header-label
//!   match count against a per-section minimum, with an optional veto
//! - **`columns`**: which physical column holds which field, and the data
//!   rows read through that mapping
//!
//! Both steps detect the same leading row-number column, so the offset the
//! classifier reports is the one the column map uses.

pub mod classify;
pub mod columns;

pub use classify::{TableMatch, TableVerdict, classify_table, detect_offset, is_matching_table};
pub use columns::{ColumnMap, build_column_map, extract_rows};
