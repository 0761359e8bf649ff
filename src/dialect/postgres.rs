use super::Dialect;
use super::PlaceholderStyle;
use crate::value::Arg;
use crate::value::ColumnType;

#[derive(Clone, Copy, Debug, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn data_type_of(&self, column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Boolean => "bool",
            ColumnType::Integer => "int",
            ColumnType::BigInt => "bigint",
            ColumnType::Float => "float",
            ColumnType::Text => "varchar",
            ColumnType::Blob => "bytea",
            ColumnType::Timestamp => "timestamp",
        }
    }

    fn auto_increment_tag(&self) -> &'static str {
        "GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY"
    }

    fn table_exist_sql(&self, table: &str) -> (String, Vec<Arg>) {
        (
            "SELECT tablename FROM pg_tables WHERE schemaname='public' and tablename=$1".to_string(),
            vec![Arg::from(table)],
        )
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Dollar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_types() {
        assert_eq!(Postgres.data_type_of(ColumnType::Integer), "int");
        assert_eq!(Postgres.data_type_of(ColumnType::BigInt), "bigint");
        assert_eq!(Postgres.data_type_of(ColumnType::Text), "varchar");
        assert_eq!(Postgres.data_type_of(ColumnType::Blob), "bytea");
    }

    #[test]
    fn test_table_exist_sql_is_already_numbered() {
        let (sql, args) = Postgres.table_exist_sql("users");
        assert!(!sql.contains('?'));
        assert_eq!(crate::clause::rewrite::renumber(&sql), sql);
        assert_eq!(args.len(), 1);
    }
}
