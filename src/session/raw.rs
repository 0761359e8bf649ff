use super::Session;
use crate::clause::rewrite;
use crate::dialect::PlaceholderStyle;
use crate::error::Error;
use crate::error::Result;
use crate::value::Arg;
use crate::value::Value;

impl Session {
    /// Appends SQL text and its arguments to the buffered statement
    pub fn raw(&mut self, sql: &str, values: Vec<Arg>) -> &mut Self {
        self.sql.push_str(sql);
        self.sql.push(' ');
        self.sql_vars.extend(values);
        self
    }

    /// Takes the buffered statement and rewrites it for the driver
    ///
    /// `IN ?` sequences are expanded first, then placeholders are renumbered
    /// when the dialect wants `$n`. The session is reset whatever the outcome.
    pub fn prepare(&mut self) -> Result<(String, Vec<Value>)> {
        let sql = std::mem::take(&mut self.sql);
        let vars = std::mem::take(&mut self.sql_vars);
        self.clause.clear();

        let (sql, args) = rewrite::expand_in(&sql, vars)?;
        let values =
            args.into_iter().enumerate().map(|(idx, arg)| arg.into_scalar(idx)).collect::<Result<Vec<Value>>>()?;

        tracing::info!("{}", rewrite::render(&sql, &values));

        let sql = match self.dialect().placeholder_style() {
            PlaceholderStyle::Question => sql,
            PlaceholderStyle::Dollar => rewrite::renumber(&sql),
        };
        tracing::trace!("SQL: {}", sql);
        tracing::trace!("Params: {:?}", values);

        Ok((sql, values))
    }

    /// Executes the buffered statement, returning the number of affected rows
    pub async fn exec(&mut self) -> Result<u64> {
        let (sql, values) = self.prepare()?;
        self.conn.execute(&sql, values).await.map_err(log_driver_error)
    }

    pub async fn query_rows(&mut self) -> Result<turso::Rows> {
        let (sql, values) = self.prepare()?;
        self.conn.query(&sql, values).await.map_err(log_driver_error)
    }

    pub async fn query_row(&mut self) -> Result<Option<turso::Row>> {
        let mut rows = self.query_rows().await?;
        Ok(rows.next().await?)
    }
}

fn log_driver_error(err: turso::Error) -> Error {
    tracing::error!("{}", err);
    Error::Database(err)
}
