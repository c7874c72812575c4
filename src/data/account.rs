//! Account records and header-alias column detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::csv_parser::CsvGrid;

// Accepted header spellings per logical column, matched after trimming
// and lower-casing. Exports from the legacy tool use the Japanese forms.
const ID_HEADERS: &[&str] = &["id", "no", "番号"];
const NAME_HEADERS: &[&str] = &["name", "氏名", "名前"];
const EMAIL_HEADERS: &[&str] = &["email", "mail", "メール", "メールアドレス"];
const AGE_HEADERS: &[&str] = &["age", "年齢"];
const ADDRESS_HEADERS: &[&str] = &["address", "住所"];
const GENDER_HEADERS: &[&str] = &["gender", "性別"];

/// One account row after type coercion and default-filling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub address: String,
    pub gender: String,
}

impl Account {
    /// Build an account from one data row. `ordinal` is the 0-based row
    /// position; it feeds the id fallback when the id column is absent or
    /// does not parse.
    fn from_row(row: &[String], columns: &ColumnMap, ordinal: usize) -> Self {
        let text = |col: Option<usize>| -> String {
            col.and_then(|idx| row.get(idx)).cloned().unwrap_or_default()
        };
        let integer = |col: Option<usize>, fallback: i64| -> i64 {
            col.and_then(|idx| row.get(idx))
                .and_then(|field| field.trim().parse::<i64>().ok())
                .unwrap_or(fallback)
        };

        Account {
            id: integer(columns.id, ordinal as i64 + 1),
            name: text(columns.name),
            email: text(columns.email),
            age: integer(columns.age, 0),
            address: text(columns.address),
            gender: text(columns.gender),
        }
    }
}

/// Column positions resolved once from the header row. `None` means no
/// header matched that column's aliases; affected fields take defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub email: Option<usize>,
    pub age: Option<usize>,
    pub address: Option<usize>,
    pub gender: Option<usize>,
}

impl ColumnMap {
    /// Resolve header positions. The first header (in header order)
    /// matching any alias of a column wins, so duplicated headers resolve
    /// to the leftmost occurrence.
    pub fn detect(headers: &[String]) -> Self {
        let find = |aliases: &[&str]| -> Option<usize> {
            headers.iter().position(|header| {
                let normalized = header.trim().to_lowercase();
                aliases.contains(&normalized.as_str())
            })
        };

        let columns = Self {
            id: find(ID_HEADERS),
            name: find(NAME_HEADERS),
            email: find(EMAIL_HEADERS),
            age: find(AGE_HEADERS),
            address: find(ADDRESS_HEADERS),
            gender: find(GENDER_HEADERS),
        };

        debug!(
            "Resolved header columns: id={:?} name={:?} email={:?} age={:?} address={:?} gender={:?}",
            columns.id, columns.name, columns.email, columns.age, columns.address, columns.gender
        );

        columns
    }
}

/// Map every data row of a grid into an account. Total over any grid:
/// short rows, missing columns, and unparsable numbers all fall back to
/// defaults instead of failing the load.
pub fn build_accounts(grid: &CsvGrid) -> Vec<Account> {
    let columns = ColumnMap::detect(&grid.headers);
    grid.rows
        .iter()
        .enumerate()
        .map(|(ordinal, row)| Account::from_row(row, &columns, ordinal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv_parser::parse_csv;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_english_headers() {
        let map = ColumnMap::detect(&headers(&["id", "name", "email", "age", "address", "gender"]));
        assert_eq!(map.id, Some(0));
        assert_eq!(map.name, Some(1));
        assert_eq!(map.email, Some(2));
        assert_eq!(map.age, Some(3));
        assert_eq!(map.address, Some(4));
        assert_eq!(map.gender, Some(5));
    }

    #[test]
    fn test_detect_japanese_headers() {
        let map = ColumnMap::detect(&headers(&["番号", "氏名", "メールアドレス", "年齢", "住所", "性別"]));
        assert_eq!(map.id, Some(0));
        assert_eq!(map.name, Some(1));
        assert_eq!(map.email, Some(2));
        assert_eq!(map.age, Some(3));
        assert_eq!(map.address, Some(4));
        assert_eq!(map.gender, Some(5));
    }

    #[test]
    fn test_detect_is_case_insensitive_and_trims() {
        let map = ColumnMap::detect(&headers(&[" ID ", "Name", "MAIL"]));
        assert_eq!(map.id, Some(0));
        assert_eq!(map.name, Some(1));
        assert_eq!(map.email, Some(2));
    }

    #[test]
    fn test_detect_unknown_headers_are_absent() {
        let map = ColumnMap::detect(&headers(&["foo", "bar"]));
        assert_eq!(map, ColumnMap::default());
    }

    #[test]
    fn test_detect_leftmost_wins_on_duplicates() {
        let map = ColumnMap::detect(&headers(&["name", "氏名"]));
        assert_eq!(map.name, Some(0));
    }

    #[test]
    fn test_reordered_columns() {
        let grid = parse_csv("email,id,name\na@x.jp,7,Alice\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 7);
        assert_eq!(accounts[0].name, "Alice");
        assert_eq!(accounts[0].email, "a@x.jp");
    }

    #[test]
    fn test_unparsable_age_defaults_to_zero() {
        let grid = parse_csv("番号,氏名,年齢\n7,田中,abc\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 7);
        assert_eq!(accounts[0].name, "田中");
        assert_eq!(accounts[0].age, 0);
    }

    #[test]
    fn test_missing_id_column_uses_ordinal() {
        let grid = parse_csv("name\nAlice\nBob\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 1);
        assert_eq!(accounts[1].id, 2);
    }

    #[test]
    fn test_unparsable_id_uses_ordinal() {
        let grid = parse_csv("id,name\nx,Alice\n9,Bob\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 1);
        assert_eq!(accounts[1].id, 9);
    }

    #[test]
    fn test_short_row_fields_default() {
        let grid = parse_csv("id,name,email,age\n5\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 5);
        assert_eq!(accounts[0].name, "");
        assert_eq!(accounts[0].email, "");
        assert_eq!(accounts[0].age, 0);
    }

    #[test]
    fn test_absent_columns_leave_defaults() {
        let grid = parse_csv("name\nAlice\n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].email, "");
        assert_eq!(accounts[0].address, "");
        assert_eq!(accounts[0].gender, "");
        assert_eq!(accounts[0].age, 0);
    }

    #[test]
    fn test_integer_field_with_whitespace_parses() {
        let grid = parse_csv("id,age\n 7 , 31 \n");
        let accounts = build_accounts(&grid);
        assert_eq!(accounts[0].id, 7);
        assert_eq!(accounts[0].age, 31);
    }
}
