use super::Session;
use crate::Model;
use crate::error::Error;
use crate::error::Result;
use crate::schema::Schema;
use crate::value::FromValue;

impl Session {
    /// Points the session at `M`'s table. Parsing is skipped when `M` is already current.
    pub fn model<M: Model>(&mut self) -> &mut Self {
        let current = self.ref_table.as_ref().is_some_and(|schema| schema.is_model::<M>());
        if !current {
            self.ref_table = Some(Schema::parse::<M>(self.dialect()));
        }
        self
    }

    pub fn ref_table(&self) -> Result<&Schema> {
        self.ref_table.as_ref().ok_or(Error::ModelNotSet)
    }

    pub async fn create_table(&mut self) -> Result<()> {
        let sql = self.require_table()?.create_table_sql(false);
        self.raw(&sql, Vec::new()).exec().await?;
        Ok(())
    }

    /// Drops the current model's table if it exists
    pub async fn drop_table(&mut self) -> Result<()> {
        let sql = self.require_table()?.drop_table_sql(true);
        self.raw(&sql, Vec::new()).exec().await?;
        Ok(())
    }

    pub async fn has_table(&mut self) -> Result<bool> {
        let name = self.require_table()?.name;
        let (sql, args) = self.dialect().table_exist_sql(name);

        let found = match self.raw(&sql, args).query_row().await? {
            Some(row) => String::from_value(row.get_value(0)?)? == name,
            None => false,
        };
        Ok(found)
    }
}
