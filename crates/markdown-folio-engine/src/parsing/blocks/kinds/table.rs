/// Pipe table block type.
///
/// Rows start and end with `|`. A second row whose every cell contains
/// `---` marks the first row as a header.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const SEPARATOR: &'static str = "---";

    /// Returns true if a trimmed line is a table row.
    pub fn is_row(line: &str) -> bool {
        line.len() >= 2 && line.starts_with(Self::PIPE) && line.ends_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, outer pipes removed.
    pub fn cells(row: &str) -> Vec<&str> {
        let inner = row
            .strip_prefix(Self::PIPE)
            .and_then(|r| r.strip_suffix(Self::PIPE))
            .unwrap_or(row);
        inner.split(Self::PIPE).map(str::trim).collect()
    }

    /// Returns true if every cell of a row is an alignment separator.
    pub fn is_separator(cells: &[&str]) -> bool {
        !cells.is_empty() && cells.iter().all(|c| c.contains(Self::SEPARATOR))
    }
}
