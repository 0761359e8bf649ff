//! Table metadata derived from a [`Model`] and a [`Dialect`]

use std::any::TypeId;
use std::collections::HashMap;

use crate::Model;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::session::Session;
use crate::value::Value;

/// One column of a table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Rust field name
    pub name:     &'static str,
    /// Column name
    pub column:   &'static str,
    /// Dialect type name
    pub sql_type: &'static str,
    /// Column constraints, e.g. `NOT NULL UNIQUE`
    pub tag:      String,
}

type TableHook = fn(&mut Session) -> Result<()>;

/// Table-level hooks of the parsed model, captured so the session can run
/// them without knowing the model type.
#[derive(Clone, Copy)]
pub(crate) struct TableHooks {
    pub(crate) before_query:  TableHook,
    pub(crate) before_update: TableHook,
    pub(crate) after_update:  TableHook,
    pub(crate) before_delete: TableHook,
    pub(crate) after_delete:  TableHook,
}

impl std::fmt::Debug for TableHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableHooks").finish_non_exhaustive()
    }
}

/// A parsed table
///
/// ```ignore
/// let schema = Schema::parse::<User>(&Sqlite3);
/// assert_eq!(schema.name, "user");
/// conn.execute(&schema.create_table_sql(true), ()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Schema {
    model:              TypeId,
    pub name:           &'static str,
    pub fields:         Vec<Field>,
    pub field_names:    Vec<&'static str>,
    pub insert_columns: Vec<&'static str>,
    primary_keys:       Vec<&'static str>,
    inline_primary_key: bool,
    field_map:          HashMap<&'static str, usize>,
    pub(crate) hooks:   TableHooks,
}

impl Schema {
    pub fn parse<M: Model>(dialect: &dyn Dialect) -> Self {
        let columns = M::columns();
        let primary_keys: Vec<&'static str> = columns.iter().filter(|c| c.primary_key).map(|c| c.name).collect();
        let inline_primary_key = primary_keys.len() == 1;

        let mut fields = Vec::with_capacity(columns.len());
        let mut field_map = HashMap::with_capacity(columns.len());

        for (idx, col) in columns.iter().enumerate() {
            let mut tag = Vec::new();

            if col.primary_key && inline_primary_key {
                tag.push(if col.auto_increment { dialect.auto_increment_tag() } else { "PRIMARY KEY" });
            }
            if !col.nullable && !col.primary_key {
                tag.push("NOT NULL");
            }
            if col.unique && !col.primary_key {
                tag.push("UNIQUE");
            }
            let mut tag = tag.join(" ");
            if let Some(default) = col.default {
                if !tag.is_empty() {
                    tag.push(' ');
                }
                tag.push_str("DEFAULT ");
                tag.push_str(default);
            }

            fields.push(Field { name: col.field, column: col.name, sql_type: dialect.data_type_of(col.column_type), tag });
            field_map.insert(col.field, idx);
        }

        tracing::trace!(table = M::table_name(), dialect = dialect.name(), "parsed schema");

        Self {
            model: TypeId::of::<M>(),
            name: M::table_name(),
            field_names: M::column_names(),
            insert_columns: M::insert_columns(),
            fields,
            primary_keys,
            inline_primary_key,
            field_map,
            hooks: TableHooks {
                before_query:  M::before_query,
                before_update: M::before_update,
                after_update:  M::after_update,
                before_delete: M::before_delete,
                after_delete:  M::after_delete,
            },
        }
    }

    pub fn is_model<M: Model>(&self) -> bool {
        self.model == TypeId::of::<M>()
    }

    /// Looks a field up by its Rust name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.field_map.get(name).map(|&idx| &self.fields[idx])
    }

    /// Insert values of `record`, lined up with [`Schema::insert_columns`]
    ///
    /// Columns the record does not provide are sent as `NULL`, extra values are dropped.
    pub fn record_values<M: Model>(&self, record: &M) -> Vec<Value> {
        let mut values = record.insert_values();
        values.resize(self.insert_columns.len(), Value::Null);
        values
    }

    pub fn create_table_sql(&self, if_not_exists: bool) -> String {
        let exists_clause = if if_not_exists { "IF NOT EXISTS " } else { "" };

        let mut defs: Vec<String> = self
            .fields
            .iter()
            .map(|f| match f.tag.as_str() {
                "" => format!("{} {}", f.column, f.sql_type),
                tag => format!("{} {} {}", f.column, f.sql_type, tag),
            })
            .collect();

        if !self.primary_keys.is_empty() && !self.inline_primary_key {
            defs.push(format!("PRIMARY KEY ({})", self.primary_keys.join(", ")));
        }

        format!("CREATE TABLE {}{} ({})", exists_clause, self.name, defs.join(", "))
    }

    pub fn drop_table_sql(&self, if_exists: bool) -> String {
        let exists_clause = if if_exists { "IF EXISTS " } else { "" };
        format!("DROP TABLE {}{}", exists_clause, self.name)
    }
}
