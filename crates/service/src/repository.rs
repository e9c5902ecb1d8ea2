use std::marker::PhantomData;

use async_trait::async_trait;
use models::{errors::StorageError, lifecycle::Record};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

/// Persistence abstraction for one record type.
#[async_trait]
pub trait CrudRepository<M: Record>: Send + Sync {
    /// All rows in ascending id order.
    async fn list(&self) -> Result<Vec<M>, StorageError>;
    async fn find(&self, id: i32) -> Result<Option<M>, StorageError>;
    /// Store a new row; the id on `model` is ignored and assigned by storage.
    async fn insert(&self, model: M) -> Result<M, StorageError>;
    /// Overwrite every column of an existing row.
    async fn update(&self, model: M) -> Result<M, StorageError>;
    /// Returns false when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, StorageError>;
}

/// SeaORM-backed repository, generic over the entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> CrudRepository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn list(&self) -> Result<Vec<E::Model>, StorageError> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        Ok(select.all(&self.db).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<E::Model>, StorageError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, model: E::Model) -> Result<E::Model, StorageError> {
        let mut am = model.into_active_model().reset_all();
        // auto-increment key
        for key in E::PrimaryKey::iter() {
            am.not_set(key.into_column());
        }
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: E::Model) -> Result<E::Model, StorageError> {
        let am = model.into_active_model().reset_all();
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
