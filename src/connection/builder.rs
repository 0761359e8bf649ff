use super::engine::Engine;
use super::opts::EngineOpts;
use crate::dialect::get_dialect;
use crate::error::Error;
use crate::error::Result;

/// Configures and opens an [`Engine`]
///
/// ```ignore
/// let engine = Builder::new_local(":memory:").dialect("sqlite3").build().await?;
/// let mut session = engine.new_session()?;
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    pub(super) path:        String,
    pub(super) dialect:     String,
    pub(super) enable_mvcc: bool,
}

impl Builder {
    pub fn new_local(path: &str) -> Self {
        Self { path: path.to_string(), dialect: "sqlite3".to_string(), enable_mvcc: false }
    }

    /// Dialect used to render statements, looked up with [`get_dialect`]
    ///
    /// The database is always turso; a non-SQLite dialect only affects the
    /// rendered SQL, e.g. to inspect `$n` statements through [`Session::prepare`](crate::Session::prepare).
    pub fn dialect(mut self, name: &str) -> Self {
        self.dialect = name.to_string();
        self
    }

    pub fn with_mvcc(mut self, enable: bool) -> Self {
        self.enable_mvcc = enable;
        self
    }

    /// Opens the database and checks it answers a trivial query
    pub async fn build(self) -> Result<Engine> {
        let dialect = get_dialect(&self.dialect).ok_or_else(|| {
            tracing::error!(dialect = %self.dialect, "dialect not found");
            Error::DialectNotFound(self.dialect.clone())
        })?;
        let opts = EngineOpts::new(&self, dialect);

        let db = turso::Builder::new_local(&self.path).with_mvcc(self.enable_mvcc).build().await.map_err(|e| {
            tracing::error!(path = %self.path, "failed to open database: {}", e);
            e
        })?;

        let engine = Engine::new(db, opts);
        engine.ping().await?;
        tracing::info!(path = %self.path, dialect = dialect.name(), "connect database success");

        Ok(engine)
    }
}
