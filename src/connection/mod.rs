pub(crate) mod builder;
pub(crate) mod engine;
pub(crate) mod opts;

pub mod prelude {
    pub use super::Connection;
    pub use super::builder::Builder;
    pub use super::engine::Engine;
    pub use super::engine::TxFuture;
}

pub(self) type ConnectionResult<T> = std::result::Result<T, turso::Error>;

/// A turso connection paired with the dialect its statements are written in
#[derive(Debug, Clone)]
pub struct Connection {
    inner: turso::Connection,
    opts:  opts::EngineOpts,
}

impl Connection {
    fn new(inner: turso::Connection, opts: opts::EngineOpts) -> Self {
        Self { inner, opts }
    }

    pub fn dialect(&self) -> &'static dyn crate::dialect::Dialect {
        self.opts.dialect
    }

    pub fn is_mvcc_enabled(&self) -> bool {
        self.opts.enable_mvcc
    }

    pub fn path(&self) -> &str {
        self.opts.path.as_str()
    }

    pub async fn query(&self, sql: &str, params: impl turso::IntoParams) -> ConnectionResult<turso::Rows> {
        self.inner.query(sql, params).await
    }

    pub async fn execute(&self, sql: &str, params: impl turso::IntoParams) -> ConnectionResult<u64> {
        self.inner.execute(sql, params).await
    }
}
