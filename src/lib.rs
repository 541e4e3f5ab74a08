#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! migcon: a terminal form for composing semicolon-delimited migration records.
//!
//! The [`model`] module holds the choice lists and the record composer,
//! [`storage`] loads choice sources and exports the ledger, and [`tui`]
//! drives the interactive form.

pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod tui;
