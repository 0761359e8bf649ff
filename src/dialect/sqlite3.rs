use super::Dialect;
use crate::value::Arg;
use crate::value::ColumnType;

#[derive(Clone, Copy, Debug, Default)]
pub struct Sqlite3;

impl Dialect for Sqlite3 {
    fn name(&self) -> &'static str {
        "sqlite3"
    }

    fn data_type_of(&self, column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Boolean => "bool",
            // AUTOINCREMENT only works on a column declared exactly INTEGER
            ColumnType::Integer | ColumnType::BigInt => "integer",
            ColumnType::Float => "real",
            ColumnType::Text => "text",
            ColumnType::Blob => "blob",
            ColumnType::Timestamp => "datetime",
        }
    }

    fn auto_increment_tag(&self) -> &'static str {
        "PRIMARY KEY AUTOINCREMENT"
    }

    fn table_exist_sql(&self, table: &str) -> (String, Vec<Arg>) {
        ("SELECT name FROM sqlite_master WHERE type='table' and name = ?".to_string(), vec![Arg::from(table)])
    }
}
