//! Core domain types for cellgrep

mod record;
mod request;

pub use record::MatchRecord;
pub use request::{parse_column_list, SearchRequest};
