//! LMDB storage backend using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store, so orders persist on the device
//! without any server. All operations are synchronous (memory-mapped I/O)
//! and are wrapped in `tokio::task::spawn_blocking` for async compatibility.
//! Every mutation runs in a single write transaction that is committed before
//! the call returns.
//!
//! # Databases (named LMDB sub-databases)
//!
//! - `orders`: zero-padded insertion sequence → JSON-encoded order. LMDB
//!   iterates keys in byte order, which makes `list` return insertion order.
//! - `orders_by_id`: order UUID string → sequence key in `orders`
//!
//! # Feature flag
//!
//! Enabled by the default `lmdb` feature. Requires the `heed` crate.

use crate::core::error::{StorageError, StorageResult};
use crate::core::order::{Order, OrderStatus};
use crate::core::service::OrderService;
use async_trait::async_trait;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Serialization helpers
// ---------------------------------------------------------------------------

fn lmdb_encode(order: &Order) -> StorageResult<Vec<u8>> {
    serde_json::to_vec(order).map_err(StorageError::Encode)
}

fn lmdb_decode(bytes: &[u8]) -> StorageResult<Order> {
    serde_json::from_slice(bytes).map_err(StorageError::Decode)
}

/// Fixed-width key so byte order equals numeric order.
fn sequence_key(sequence: u64) -> String {
    format!("{:020}", sequence)
}

/// Sequence number following the stored key `last`.
fn next_sequence(last: &str) -> StorageResult<u64> {
    last.parse::<u64>()
        .ok()
        .and_then(|seq| seq.checked_add(1))
        .ok_or_else(|| StorageError::CorruptKey {
            key: last.to_string(),
        })
}

// ---------------------------------------------------------------------------
// LmdbOrderService
// ---------------------------------------------------------------------------

/// LMDB-backed implementation of [`OrderService`].
///
/// The `Env` is wrapped in an `Arc` for cheap cloning across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shoppier::storage::LmdbOrderService;
///
/// let service = LmdbOrderService::open("/data/orders", DEFAULT_MAP_SIZE_MB)?;
/// let store = OrderStore::new(Arc::new(service));
/// ```
#[derive(Clone)]
pub struct LmdbOrderService {
    env: Arc<Env>,
    orders_db: Database<Str, Bytes>,
    by_id_db: Database<Str, Str>,
}

impl LmdbOrderService {
    /// Open (or create) an LMDB environment at `path` and initialise the
    /// order databases.
    pub fn open(path: impl AsRef<Path>, map_size_mb: usize) -> StorageResult<Self> {
        std::fs::create_dir_all(path.as_ref())?;

        // SAFETY: the environment is opened once per directory by this
        // process, and the files are not modified while mapped.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size_mb.max(1) * 1024 * 1024)
                .max_dbs(4)
                .max_readers(126)
                .open(path.as_ref())?
        };

        let mut wtxn = env.write_txn()?;
        let orders_db: Database<Str, Bytes> = env.create_database(&mut wtxn, Some("orders"))?;
        let by_id_db: Database<Str, Str> = env.create_database(&mut wtxn, Some("orders_by_id"))?;
        wtxn.commit()?;

        tracing::debug!(path = %path.as_ref().display(), "opened lmdb order store");

        Ok(Self {
            env: Arc::new(env),
            orders_db,
            by_id_db,
        })
    }
}

#[async_trait]
impl OrderService for LmdbOrderService {
    async fn insert(&self, order: Order) -> StorageResult<Order> {
        let service = self.clone();
        let bytes = lmdb_encode(&order)?;
        let id = order.id.to_string();

        tokio::task::spawn_blocking(move || {
            let mut wtxn = service.env.write_txn()?;
            if service.by_id_db.get(&wtxn, &id)?.is_some() {
                return Err(StorageError::DuplicateId { id: order.id });
            }
            // One past the last key, so deleted sequence numbers are never reused
            // while later orders still exist.
            let next = match service.orders_db.last(&wtxn)? {
                Some((last, _)) => next_sequence(last)?,
                None => 0,
            };
            let key = sequence_key(next);
            service.orders_db.put(&mut wtxn, &key, &bytes)?;
            service.by_id_db.put(&mut wtxn, &id, &key)?;
            wtxn.commit()?;
            Ok(order)
        })
        .await?
    }

    async fn get(&self, id: &Uuid) -> StorageResult<Option<Order>> {
        let service = self.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let rtxn = service.env.read_txn()?;
            let Some(key) = service.by_id_db.get(&rtxn, &id)? else {
                return Ok(None);
            };
            match service.orders_db.get(&rtxn, key)? {
                Some(bytes) => Ok(Some(lmdb_decode(bytes)?)),
                None => Ok(None),
            }
        })
        .await?
    }

    async fn list(&self) -> StorageResult<Vec<Order>> {
        let service = self.clone();

        tokio::task::spawn_blocking(move || {
            let rtxn = service.env.read_txn()?;
            let mut results = Vec::new();
            for item in service.orders_db.iter(&rtxn)? {
                let (_key, bytes) = item?;
                results.push(lmdb_decode(bytes)?);
            }
            Ok(results)
        })
        .await?
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: OrderStatus,
    ) -> StorageResult<Option<Order>> {
        let service = self.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let mut wtxn = service.env.write_txn()?;
            let Some(key) = service.by_id_db.get(&wtxn, &id)?.map(str::to_owned) else {
                return Ok(None);
            };
            let Some(bytes) = service.orders_db.get(&wtxn, &key)? else {
                return Ok(None);
            };
            let mut order = lmdb_decode(bytes)?;
            order.status = status;
            service.orders_db.put(&mut wtxn, &key, &lmdb_encode(&order)?)?;
            wtxn.commit()?;
            Ok(Some(order))
        })
        .await?
    }

    async fn remove(&self, id: &Uuid) -> StorageResult<bool> {
        let service = self.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let mut wtxn = service.env.write_txn()?;
            let Some(key) = service.by_id_db.get(&wtxn, &id)?.map(str::to_owned) else {
                return Ok(false);
            };
            service.orders_db.delete(&mut wtxn, &key)?;
            service.by_id_db.delete(&mut wtxn, &id)?;
            wtxn.commit()?;
            Ok(true)
        })
        .await?
    }

    async fn count(&self) -> StorageResult<usize> {
        let service = self.clone();

        tokio::task::spawn_blocking(move || {
            let rtxn = service.env.read_txn()?;
            Ok(service.orders_db.len(&rtxn)? as usize)
        })
        .await?
    }

    fn backend_name(&self) -> &'static str {
        "lmdb"
    }
}
