//! JSON document store
//!
//! Every record lives in the `documents` table as a JSON object keyed by
//! `(collection, id)`. The id is part of the key only: it is stripped from the
//! body on write and injected back on read.
//!
//! Writes that must land together go through a [`WriteBatch`], committed in a
//! single SQLite transaction.

use super::merge::deep_merge;
use super::{DbError, DbResult};
use serde_json::{Map, Value};
use shared::models::{Collection, PageContent, Record};
use shared::util::{new_document_id, now_millis};
use sqlx::{Sqlite, SqlitePool, Transaction};

const UPSERT_SQL: &str = r#"
    INSERT INTO documents (collection, id, data, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT (collection, id)
    DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
"#;

/// A single queued write
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Replace the whole document
    Set {
        collection: Collection,
        id: String,
        data: Value,
    },
    /// Deep-merge into the stored document (created if absent)
    Merge {
        collection: Collection,
        id: String,
        data: Value,
    },
    Delete { collection: Collection, id: String },
}

/// Ordered list of writes applied all-or-nothing by [`DocumentStore::commit`]
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a full write of `record` under its own id
    pub fn set<R: Record>(&mut self, record: &R) -> DbResult<()> {
        let data = to_document(R::COLLECTION, record.id(), record)?;
        self.ops.push(WriteOp::Set {
            collection: R::COLLECTION,
            id: record.id().to_string(),
            data,
        });
        Ok(())
    }

    pub fn merge(&mut self, collection: Collection, id: impl Into<String>, data: Value) {
        self.ops.push(WriteOp::Merge {
            collection,
            id: id.into(),
            data,
        });
    }

    pub fn delete(&mut self, collection: Collection, id: impl Into<String>) {
        self.ops.push(WriteOp::Delete {
            collection,
            id: id.into(),
        });
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Counts reported by a committed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub deleted: usize,
}

/// Serialize `record` into a stored document body (id removed)
fn to_document<T: serde::Serialize>(collection: Collection, id: &str, record: &T) -> DbResult<Value> {
    match serde_json::to_value(record)? {
        Value::Object(mut map) => {
            map.remove("id");
            Ok(Value::Object(map))
        }
        _ => Err(DbError::NotAnObject {
            collection: collection.to_string(),
            id: id.to_string(),
        }),
    }
}

/// Decode a stored body into `R`, injecting the key id
fn from_document<R: Record>(id: &str, data: &str) -> DbResult<R> {
    let corrupted = |source| DbError::Corrupted {
        collection: R::COLLECTION.to_string(),
        id: id.to_string(),
        source,
    };
    let mut map: Map<String, Value> = serde_json::from_str(data).map_err(corrupted)?;
    map.insert("id".to_string(), Value::String(id.to_string()));
    serde_json::from_value(Value::Object(map)).map_err(corrupted)
}

/// Typed access to the `documents` table
#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Raw stored body of one document
    pub async fn get_raw(&self, collection: Collection, id: &str) -> DbResult<Option<Value>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM documents WHERE collection = ? AND id = ?")
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(data,)| {
            serde_json::from_str(&data).map_err(|source| DbError::Corrupted {
                collection: collection.to_string(),
                id: id.to_string(),
                source,
            })
        })
        .transpose()
    }

    pub async fn get<R: Record>(&self, id: &str) -> DbResult<Option<R>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM documents WHERE collection = ? AND id = ?")
                .bind(R::COLLECTION.as_str())
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(data,)| from_document(id, &data)).transpose()
    }

    /// All records of `R`'s collection, oldest first
    pub async fn list<R: Record>(&self) -> DbResult<Vec<R>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT id, data FROM documents WHERE collection = ? ORDER BY created_at, rowid",
        )
        .bind(R::COLLECTION.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|(id, data)| from_document(id, data))
            .collect()
    }

    /// Content document of `C`'s page; `None` when never saved
    pub async fn content<C: PageContent>(&self) -> DbResult<Option<C>> {
        let page = C::PAGE.as_str();
        let Some(raw) = self.get_raw(Collection::Content, page).await? else {
            return Ok(None);
        };
        serde_json::from_value(raw)
            .map(Some)
            .map_err(|source| DbError::Corrupted {
                collection: Collection::Content.to_string(),
                id: page.to_string(),
                source,
            })
    }

    /// Store a new record under a freshly allocated id and return it
    pub async fn insert<R: Record>(&self, mut record: R) -> DbResult<R> {
        record.set_id(new_document_id());
        let mut batch = WriteBatch::new();
        batch.set(&record)?;
        self.commit(batch).await?;
        Ok(record)
    }

    pub async fn count(&self, collection: Collection) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Apply every op of `batch` in one transaction.
    ///
    /// Any failure rolls the whole batch back; nothing is partially visible.
    pub async fn commit(&self, batch: WriteBatch) -> DbResult<BatchSummary> {
        let mut summary = BatchSummary::default();
        if batch.is_empty() {
            return Ok(summary);
        }

        let now = now_millis();
        let mut tx = self.pool.begin().await?;

        for op in batch.ops {
            match op {
                WriteOp::Set {
                    collection,
                    id,
                    data,
                } => {
                    upsert(&mut tx, collection, &id, &data, now).await?;
                    summary.written += 1;
                }
                WriteOp::Merge {
                    collection,
                    id,
                    data,
                } => {
                    let existing: Option<(String,)> = sqlx::query_as(
                        "SELECT data FROM documents WHERE collection = ? AND id = ?",
                    )
                    .bind(collection.as_str())
                    .bind(&id)
                    .fetch_optional(&mut *tx)
                    .await?;

                    let mut merged = match existing {
                        Some((raw,)) => serde_json::from_str(&raw).map_err(|source| {
                            DbError::Corrupted {
                                collection: collection.to_string(),
                                id: id.clone(),
                                source,
                            }
                        })?,
                        None => Value::Object(Map::new()),
                    };
                    deep_merge(&mut merged, data);
                    if !merged.is_object() {
                        return Err(DbError::NotAnObject {
                            collection: collection.to_string(),
                            id,
                        });
                    }
                    upsert(&mut tx, collection, &id, &merged, now).await?;
                    summary.written += 1;
                }
                WriteOp::Delete { collection, id } => {
                    let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
                        .bind(collection.as_str())
                        .bind(&id)
                        .execute(&mut *tx)
                        .await?;
                    summary.deleted += result.rows_affected() as usize;
                }
            }
        }

        tx.commit().await?;
        Ok(summary)
    }
}

async fn upsert(
    tx: &mut Transaction<'_, Sqlite>,
    collection: Collection,
    id: &str,
    data: &Value,
    now: i64,
) -> DbResult<()> {
    sqlx::query(UPSERT_SQL)
        .bind(collection.as_str())
        .bind(id)
        .bind(data.to_string())
        .bind(now)
        .bind(now)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
