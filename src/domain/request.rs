use std::path::PathBuf;

/// One user-initiated search, captured from the form at the moment the user
/// hits Search. Immutable for its lifetime; a new request is built per search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Workbooks to scan.
    pub files: Vec<PathBuf>,
    /// Search term exactly as typed (not trimmed).
    pub term: String,
    /// When false, both the term and every cell are lowercased before matching.
    pub case_sensitive: bool,
    /// When true, the term is escaped and bounded by `\b` anchors.
    pub whole_word: bool,
    /// Column names to restrict the scan to. `None` scans every declared
    /// column; `Some` scans the named columns in the listed order, skipping
    /// names a sheet does not declare.
    pub columns: Option<Vec<String>>,
}

impl SearchRequest {
    /// Plain request over everything: all columns, case-insensitive, substring.
    pub fn new(files: Vec<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            files,
            term: term.into(),
            case_sensitive: false,
            whole_word: false,
            columns: None,
        }
    }
}

/// Split a comma-separated column list into usable names: whitespace trimmed,
/// empty entries dropped, duplicates dropped (first occurrence wins, order
/// preserved).
pub fn parse_column_list(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for part in input.split(',') {
        let name = part.trim();
        if name.is_empty() {
            continue;
        }
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_list_trims_whitespace() {
        assert_eq!(
            parse_column_list(" Name , Age,City "),
            vec!["Name", "Age", "City"]
        );
    }

    #[test]
    fn test_parse_column_list_drops_empty_entries() {
        assert_eq!(parse_column_list("Name,,Age,"), vec!["Name", "Age"]);
        assert!(parse_column_list("").is_empty());
        assert!(parse_column_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_column_list_deduplicates_preserving_order() {
        assert_eq!(parse_column_list("B,A,B,A"), vec!["B", "A"]);
    }
}
