//! cellgrep - search Excel workbooks cell by cell
//!
//! cellgrep opens a desktop window where you pick `.xlsx`/`.xls` files,
//! type a search term, and get every matching cell listed as
//! (file, sheet, row, column, value). Matching supports case sensitivity,
//! whole-word boundaries, and restriction to named columns; files are
//! scanned in parallel and a broken file never spoils the rest of the
//! batch.

pub mod domain;
pub mod gui;
pub mod pattern;
pub mod scanner;
pub mod search;

pub use domain::*;
