use super::Session;
use crate::Model;
use crate::clause::ClauseArgs;
use crate::clause::ClauseKind;
use crate::error::Error;
use crate::error::Result;
use crate::value::FromValue;
use crate::value::IntoValue;
use crate::value::Value;

const FIND_CLAUSES: &[ClauseKind] = &[
    ClauseKind::Select,
    ClauseKind::Table,
    ClauseKind::Where,
    ClauseKind::OrderBy,
    ClauseKind::Limit,
    ClauseKind::Offset,
];

impl Session {
    /// Inserts `records` with one multi-row statement and returns them as stored
    ///
    /// Rows come back through `RETURNING`, so generated keys and column
    /// defaults are filled in.
    #[tracing::instrument(skip_all)]
    pub async fn insert<M: Model>(&mut self, mut records: Vec<M>) -> Result<Vec<M>> {
        self.model::<M>();
        for record in records.iter_mut() {
            if let Err(err) = record.before_insert() {
                self.clear();
                return Err(err);
            }
        }

        let schema = self.require_table()?;
        let (table, columns, returning) = (schema.name, schema.insert_columns.clone(), schema.field_names.clone());
        let rows: Vec<Vec<Value>> = records.iter().map(|record| schema.record_values(record)).collect();

        self.clause.push(ClauseArgs::Insert {
            table:  table.to_string(),
            fields: columns.into_iter().map(str::to_string).collect(),
        });
        self.clause.push(ClauseArgs::Values {
            returning: returning.into_iter().map(str::to_string).collect(),
            rows,
        });

        let fragment = self.build(&[ClauseKind::Insert, ClauseKind::Values])?;
        self.raw(&fragment.sql, fragment.args);

        let mut stored = self.decode_rows::<M>().await?;
        for record in stored.iter_mut() {
            record.after_insert()?;
        }
        tracing::info!("inserted {} rows into {}", stored.len(), table);

        Ok(stored)
    }

    /// Inserts a single record
    pub async fn create<M: Model>(&mut self, record: M) -> Result<M> {
        self.insert(vec![record]).await?.into_iter().next().ok_or(Error::RecordNotFound)
    }

    /// Loads every record matching the pending clauses
    ///
    /// Rows are decoded by position, so a custom `select` must keep the
    /// model's column order.
    #[tracing::instrument(skip_all)]
    pub async fn find<M: Model>(&mut self) -> Result<Vec<M>> {
        self.model::<M>();
        let schema = self.require_table()?;
        let (table, fields, hooks) = (schema.name, schema.field_names.clone(), schema.hooks);

        self.run_hook(hooks.before_query)?;
        if !self.clause.contains(ClauseKind::Select) {
            self.clause.push(ClauseArgs::select(fields));
        }
        if !self.clause.contains(ClauseKind::Table) {
            self.clause.push(ClauseArgs::table(table));
        }

        let fragment = self.build(FIND_CLAUSES)?;
        self.raw(&fragment.sql, fragment.args);

        let mut records = self.decode_rows::<M>().await?;
        for record in records.iter_mut() {
            record.after_query()?;
        }
        Ok(records)
    }

    /// First record matching the pending clauses
    pub async fn first<M: Model>(&mut self) -> Result<M> {
        self.limit(1);
        self.find::<M>().await?.into_iter().next().ok_or(Error::RecordNotFound)
    }

    /// Updates columns of the current model's table, returning the affected row count
    ///
    /// ```ignore
    /// session.model::<User>().where_("name = ?", args!["Tom"]).update([("age", 30)]).await?;
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn update<K, V>(&mut self, sets: impl IntoIterator<Item = (K, V)>) -> Result<u64>
    where
        K: Into<String>,
        V: IntoValue,
    {
        let schema = self.require_table()?;
        let (table, hooks) = (schema.name, schema.hooks);
        let sets: Vec<(String, Value)> = sets.into_iter().map(|(k, v)| (k.into(), v.into_value())).collect();

        self.run_hook(hooks.before_update)?;
        self.clause.push(ClauseArgs::Update { table: table.to_string(), sets });

        let fragment = self.build(&[ClauseKind::Update, ClauseKind::Where])?;
        self.raw(&fragment.sql, fragment.args);
        let affected = self.exec().await?;
        tracing::info!("updated {} rows in {}", affected, table);

        self.run_hook(hooks.after_update)?;
        Ok(affected)
    }

    /// Deletes the rows matching the pending `WHERE`; without one, every row goes
    #[tracing::instrument(skip_all)]
    pub async fn delete(&mut self) -> Result<u64> {
        let schema = self.require_table()?;
        let (table, hooks) = (schema.name, schema.hooks);

        self.run_hook(hooks.before_delete)?;
        self.clause.push(ClauseArgs::Delete { table: table.to_string() });

        let fragment = self.build(&[ClauseKind::Delete, ClauseKind::Where])?;
        self.raw(&fragment.sql, fragment.args);
        let affected = self.exec().await?;
        tracing::info!("deleted {} rows from {}", affected, table);

        self.run_hook(hooks.after_delete)?;
        Ok(affected)
    }

    #[tracing::instrument(skip_all)]
    pub async fn count(&mut self) -> Result<i64> {
        let table = self.require_table()?.name;
        self.clause.push(ClauseArgs::Count { table: table.to_string() });

        let fragment = self.build(&[ClauseKind::Count, ClauseKind::Where])?;
        self.raw(&fragment.sql, fragment.args);

        match self.query_row().await? {
            Some(row) => i64::from_value(row.get_value(0)?),
            None => Ok(0),
        }
    }

    async fn decode_rows<M: Model>(&mut self) -> Result<Vec<M>> {
        let mut rows = self.query_rows().await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(M::from_row(&row)?);
        }
        Ok(records)
    }
}
