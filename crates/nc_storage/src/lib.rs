use std::path::Path;
use std::sync::Arc;

use nc_core::{ArticleStore, Error, Result};

pub mod backends;

pub use backends::{MemoryStore, SqliteStore};

/// Storage backend factory keyed by backend name. The sqlite backend opens
/// (or creates) the database at `db_path`; the memory backend ignores it.
pub async fn create_storage(backend: &str, db_path: &Path) -> Result<Arc<dyn ArticleStore>> {
    match backend {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "sqlite" => Ok(Arc::new(SqliteStore::new_with_path(db_path).await?)),
        other => Err(Error::Storage(format!("unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::{MemoryStore, SqliteStore};
    pub use super::create_storage;
}
