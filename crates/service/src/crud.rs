//! Generic business service shared by every entity.
//!
//! Validation, mapping and soft-delete bookkeeping live here once; per-entity
//! differences come from the [`Resource`] impl.

use std::sync::Arc;

use models::lifecycle::{now, Audited, Identifiable, SoftDeletable};
use tracing::{error, info, instrument, warn};

use crate::errors::ServiceError;
use crate::metrics;
use crate::repository::CrudRepository;
use crate::resource::{Patch, Resource};

pub struct CrudService<R: Resource> {
    repo: Arc<dyn CrudRepository<R::Model>>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone() }
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(repo: Arc<dyn CrudRepository<R::Model>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get_all(&self) -> Result<Vec<R>, ServiceError> {
        let res = self.repo.list().await.map_err(ServiceError::from);
        let res = res.map(|rows| rows.into_iter().map(R::from_model).collect());
        settle::<R, _>("get_all", res)
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn get_by_id(&self, id: i32) -> Result<R, ServiceError> {
        let res = self.load(id).await.map(R::from_model);
        settle::<R, _>("get_by_id", res)
    }

    #[instrument(skip(self, dto), fields(entity = R::NAME))]
    pub async fn create(&self, dto: R) -> Result<R, ServiceError> {
        let res = self.create_inner(dto).await;
        if let Ok(created) = &res {
            info!(entity = R::NAME, id = created.id(), "created");
        }
        settle::<R, _>("create", res)
    }

    async fn create_inner(&self, dto: R) -> Result<R, ServiceError> {
        dto.validate()?;
        let at = now();
        let mut model = dto.to_model();
        model.set_id(0);
        model.set_create_date(Some(at));
        model.set_update_date(None);
        // start from the active state so the invariant is applied either way
        model.set_active(true);
        model.set_delete_date(None);
        model.apply_active(dto.active(), at);
        let stored = self.repo.insert(model).await?;
        Ok(R::from_model(stored))
    }

    #[instrument(skip(self, dto), fields(entity = R::NAME))]
    pub async fn update(&self, id: i32, dto: R) -> Result<R, ServiceError> {
        let res = self.update_inner(id, dto).await;
        if res.is_ok() {
            info!(entity = R::NAME, id, "updated");
        }
        settle::<R, _>("update", res)
    }

    async fn update_inner(&self, id: i32, dto: R) -> Result<R, ServiceError> {
        check_id::<R>(id)?;
        if dto.id() != id {
            return Err(ServiceError::validation(format!(
                "route id {} does not match body id {}",
                id,
                dto.id()
            )));
        }
        dto.validate()?;
        let mut model = self.load(id).await?;
        let at = now();
        dto.overwrite(&mut model);
        model.apply_active(dto.active(), at);
        model.set_update_date(Some(at));
        let stored = self.repo.update(model).await?;
        Ok(R::from_model(stored))
    }

    #[instrument(skip(self, patch), fields(entity = R::NAME))]
    pub async fn patch(&self, id: i32, patch: R::Patch) -> Result<R, ServiceError> {
        let res = self.patch_inner(id, patch).await;
        settle::<R, _>("patch", res)
    }

    async fn patch_inner(&self, id: i32, patch: R::Patch) -> Result<R, ServiceError> {
        check_id::<R>(id)?;
        if let Some(body_id) = patch.id() {
            if body_id != id {
                return Err(ServiceError::validation(format!(
                    "route id {id} does not match body id {body_id}"
                )));
            }
        }
        patch.validate()?;
        let mut model = self.load(id).await?;
        let at = now();
        let mut changed = patch.merge_into(&mut model);
        if let Some(active) = patch.active() {
            changed |= model.apply_active(active, at);
        }
        if !changed {
            info!(entity = R::NAME, id, "patch changed nothing");
            return Ok(R::from_model(model));
        }
        model.set_update_date(Some(at));
        let stored = self.repo.update(model).await?;
        info!(entity = R::NAME, id, "patched");
        Ok(R::from_model(stored))
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = self.delete_inner(id).await;
        if res.is_ok() {
            info!(entity = R::NAME, id, "deleted");
        }
        settle::<R, _>("delete", res)
    }

    async fn delete_inner(&self, id: i32) -> Result<(), ServiceError> {
        self.load(id).await?;
        if !self.repo.delete(id).await? {
            // removed between the lookup and the delete
            return Err(ServiceError::not_found(R::NAME, id));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(entity = R::NAME))]
    pub async fn soft_delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = self.soft_delete_inner(id).await;
        settle::<R, _>("soft_delete", res)
    }

    async fn soft_delete_inner(&self, id: i32) -> Result<(), ServiceError> {
        let mut model = self.load(id).await?;
        if !model.apply_active(false, now()) {
            info!(entity = R::NAME, id, "already inactive");
            return Ok(());
        }
        self.repo.update(model).await?;
        info!(entity = R::NAME, id, "soft deleted");
        Ok(())
    }

    /// Stored row for `id`, after the positive-id check.
    pub(crate) async fn load(&self, id: i32) -> Result<R::Model, ServiceError> {
        check_id::<R>(id)?;
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(R::NAME, id))
    }
}

fn check_id<R: Resource>(id: i32) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::validation(format!("{} id must be a positive integer, got {}", R::NAME, id)));
    }
    Ok(())
}

/// Log a failed operation at the level its kind deserves and count the outcome.
pub(crate) fn settle<R: Resource, T>(operation: &'static str, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match &res {
        Ok(_) => metrics::record(R::NAME, operation, "ok"),
        Err(err) => {
            match err {
                ServiceError::Validation(_) | ServiceError::NotFound(_) => {
                    warn!(entity = R::NAME, operation, error = %err, "rejected")
                }
                ServiceError::Storage(_) => error!(entity = R::NAME, operation, error = %err, "storage failure"),
            }
            metrics::record(R::NAME, operation, err.kind());
        }
    }
    res
}
