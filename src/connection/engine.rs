use std::future::Future;
use std::pin::Pin;

use super::Connection;
use super::opts::EngineOpts;
use crate::error::Result;
use crate::session::Session;

/// Future returned by the closure handed to [`Engine::transaction`]
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a>>;

/// An opened database; hands out connections and sessions
#[derive(Clone)]
pub struct Engine {
    db:   turso::Database,
    opts: EngineOpts,
}

impl Engine {
    pub(super) fn new(db: turso::Database, opts: EngineOpts) -> Self {
        Self { db, opts }
    }

    pub fn connect(&self) -> Result<Connection> {
        let conn = self.db.connect()?;
        Ok(Connection::new(conn, self.opts.clone()))
    }

    /// A fresh session on a new connection
    pub fn new_session(&self) -> Result<Session> {
        Ok(Session::new(self.connect()?))
    }

    /// Runs `f` inside a transaction on a fresh session
    ///
    /// Commits when `f` returns `Ok`, rolls back when it returns `Err`. The
    /// closure's error is returned even if the rollback itself fails.
    ///
    /// ```ignore
    /// let moved = engine
    ///     .transaction(|session| {
    ///         Box::pin(async move {
    ///             session.model::<User>().where_("id = ?", args![1]).delete().await?;
    ///             session.create(User { id: 0, name: "Tom".into(), age: 18 }).await
    ///         })
    ///     })
    ///     .await?;
    /// ```
    pub async fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'a> FnOnce(&'a mut Session) -> TxFuture<'a, T>,
    {
        let mut session = self.new_session()?;
        session.begin().await?;

        match f(&mut session).await {
            Ok(value) => {
                session.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = session.rollback().await {
                    tracing::error!("rollback after failed transaction: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Releases the database handle. Connections already handed out keep it alive until dropped.
    pub fn close(self) {
        let path = self.opts.path.clone();
        drop(self.db);
        tracing::info!(path = %path, "close database success");
    }

    pub(super) async fn ping(&self) -> Result<()> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT 1", ()).await?;
        rows.next().await?;
        Ok(())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").field("opts", &self.opts).finish_non_exhaustive()
    }
}
