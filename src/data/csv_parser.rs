//! Character-level CSV reader for hand-edited account exports.
//!
//! Deliberately total: malformed input degrades to a best-effort grid
//! instead of an error, so a half-edited spreadsheet still loads.

/// Scanner mode. A lone `"` toggles between the two; `""` inside a
/// quoted field emits a literal quote.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ParseState {
    Unquoted,
    Quoted,
}

/// A rectangular-ish grid of string fields. Rows may be shorter than the
/// header row; consumers treat missing trailing fields as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parse comma-separated text into a grid, popping the first row off as
/// the header row.
///
/// Field separator is `,`, quoting is `"` with `""` escaping, line endings
/// are `\n` or `\r\n`, and a trailing row without a final newline is kept.
/// An unterminated quote consumes the rest of the input as a single field.
pub fn parse_csv(text: &str) -> CsvGrid {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = ParseState::Unquoted;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            ParseState::Quoted => {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        state = ParseState::Unquoted;
                    }
                } else {
                    field.push(c);
                }
            }
            ParseState::Unquoted => match c {
                '"' => state = ParseState::Quoted,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => field.push(c),
            },
        }
    }

    // Flush a trailing row that has no final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    let headers = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };

    CsvGrid { headers, rows }
}
