//! Visit counter backed by sled

use crate::db::traits::VisitCounter;
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::Path;

const TREE: &str = "counters";
const VISIT_KEY: &[u8] = b"visit_count";

/// Counter stored as a big-endian `u64` under `counters/visit_count`.
#[derive(Debug, Clone)]
pub struct SledVisitCounter {
    tree: sled::Tree,
}

impl SledVisitCounter {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path.as_ref())?;
        Self::from_db(&db)
    }

    /// In-memory database removed on drop.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(&db)
    }

    fn from_db(db: &sled::Db) -> Result<Self> {
        Ok(Self {
            tree: db.open_tree(TREE)?,
        })
    }

    /// Current count without incrementing.
    #[cfg(test)]
    fn current(&self) -> Result<u64> {
        Ok(self.tree.get(VISIT_KEY)?.as_deref().map_or(0, decode))
    }
}

#[async_trait]
impl VisitCounter for SledVisitCounter {
    async fn increment(&self) -> Result<u64> {
        let tree = self.tree.clone();
        let updated = tokio::task::spawn_blocking(move || {
            let value = tree.update_and_fetch(VISIT_KEY, |old| {
                let next = old.map_or(0, decode).saturating_add(1);
                Some(next.to_be_bytes().to_vec())
            })?;
            tree.flush()?;
            Ok::<_, sled::Error>(value)
        })
        .await
        .map_err(|e| Error::Internal(format!("Visit counter task failed: {e}")))??;

        Ok(updated.as_deref().map_or(0, decode))
    }
}

fn decode(bytes: &[u8]) -> u64 {
    bytes
        .try_into()
        .map(u64::from_be_bytes)
        .unwrap_or_default()
}
