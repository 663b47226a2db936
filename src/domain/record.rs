/// A single matching cell, as shown in the results table.
///
/// (file, sheet, row, column) identifies the cell; `value` is the original
/// cell text before any case normalization, so the user sees exact content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Workbook file name, without its directory.
    pub file: String,
    /// Sheet the cell lives in.
    pub sheet: String,
    /// 1-based row as a spreadsheet displays it, counting the header row
    /// (the first data row is row 2).
    pub row: u32,
    /// Header text of the matching column.
    pub column: String,
    /// Original cell text.
    pub value: String,
}

impl MatchRecord {
    pub fn new(
        file: impl Into<String>,
        sheet: impl Into<String>,
        row: u32,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            sheet: sheet.into(),
            row,
            column: column.into(),
            value: value.into(),
        }
    }
}
