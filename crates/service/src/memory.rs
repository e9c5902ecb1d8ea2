//! In-memory repository used by tests and by `memory://` deployments.
//!
//! Ids come from a per-repository counter starting at 1. No foreign keys are
//! enforced.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use models::{
    errors::StorageError,
    lifecycle::Record,
};
use tokio::sync::RwLock;

use crate::repository::CrudRepository;

/// ```
/// use models::{lifecycle::now, state};
/// use service::{memory::MemoryRepository, repository::CrudRepository};
///
/// let repo = MemoryRepository::new();
/// let row = state::Model {
///     id: 0,
///     type_state: "Pending".into(),
///     description: None,
///     active: true,
///     create_date: Some(now()),
///     update_date: None,
///     delete_date: None,
/// };
/// let stored = tokio_test::block_on(repo.insert(row)).unwrap();
/// assert_eq!(stored.id, 1);
/// ```
pub struct MemoryRepository<M> {
    rows: RwLock<BTreeMap<i32, M>>,
    next_id: AtomicI32,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fault: Mutex<Option<StorageError>>,
}

impl<M> Default for MemoryRepository<M> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            fault: Mutex::new(None),
        }
    }
}

impl<M> MemoryRepository<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of read calls (`list`/`find`) served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write calls (`insert`/`update`/`delete`) served so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make the next write fail with `err`, e.g. to simulate a foreign-key
    /// violation.
    pub fn fail_next_write(&self, err: StorageError) {
        if let Ok(mut slot) = self.fault.lock() {
            *slot = Some(err);
        }
    }

    fn begin_write(&self) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        match self.fault.lock() {
            Ok(mut slot) => match slot.take() {
                Some(err) => Err(err),
                None => Ok(()),
            },
            Err(_) => Err(StorageError::Unavailable("memory repository lock poisoned".into())),
        }
    }
}

#[async_trait]
impl<M: Record> CrudRepository<M> for MemoryRepository<M> {
    async fn list(&self) -> Result<Vec<M>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<M>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, mut model: M) -> Result<M, StorageError> {
        self.begin_write()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        model.set_id(id);
        self.rows.write().await.insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: M) -> Result<M, StorageError> {
        self.begin_write()?;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&model.id()) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(StorageError::Query(format!("no row with id {}", model.id()))),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        self.begin_write()?;
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{lifecycle::now, state};

    fn row(name: &str) -> state::Model {
        state::Model {
            id: 0,
            type_state: name.into(),
            description: None,
            active: true,
            create_date: Some(now()),
            update_date: None,
            delete_date: None,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_and_lists_in_order() {
        let repo = MemoryRepository::new();
        let a = repo.insert(row("A")).await.unwrap();
        let b = repo.insert(row("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|r| r.type_state).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn update_of_missing_row_fails() {
        let repo: MemoryRepository<state::Model> = MemoryRepository::new();
        let mut ghost = row("ghost");
        ghost.id = 42;
        assert!(repo.update(ghost).await.is_err());
    }

    #[tokio::test]
    async fn injected_fault_hits_exactly_one_write() {
        let repo = MemoryRepository::new();
        let a = repo.insert(row("A")).await.unwrap();
        repo.fail_next_write(StorageError::Conflict("fk_center_regional".into()));
        let err = repo.delete(a.id).await.unwrap_err();
        assert!(err.is_conflict());
        assert!(repo.delete(a.id).await.unwrap());
        assert_eq!(repo.writes(), 3);
    }
}
