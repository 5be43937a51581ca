//! JSON file persistence shared by the stats and settings stores.
//!
//! # Design Decisions
//! - Whole-file read and rewrite; files are small
//! - A missing file is created with the default value on first read
//! - Pretty-printed output so files stay hand-editable

pub mod json;
