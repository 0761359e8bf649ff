use super::Session;
use crate::error::Error;
use crate::error::Result;

impl Session {
    /// Starts a transaction on this session's connection
    ///
    /// Statements run by the session until [`Session::commit`] or
    /// [`Session::rollback`] belong to it. Pending clauses are untouched.
    pub async fn begin(&mut self) -> Result<()> {
        self.run_control("BEGIN").await?;
        tracing::info!("transaction begin");
        Ok(())
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.run_control("COMMIT").await?;
        tracing::info!("transaction commit");
        Ok(())
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.run_control("ROLLBACK").await?;
        tracing::info!("transaction rollback");
        Ok(())
    }

    async fn run_control(&mut self, sql: &str) -> Result<()> {
        self.conn.execute(sql, ()).await.map_err(|err| {
            tracing::error!("{} failed: {}", sql, err);
            Error::Database(err)
        })?;
        Ok(())
    }
}
