use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, NotSet, Set};

use super::setup_test_db;
use crate::errors::StorageError;
use crate::lifecycle::now;
use crate::{center, regional};

async fn insert_regional(db: &sea_orm::DatabaseConnection, name: &str) -> Result<regional::Model> {
    let am = regional::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        code_regional: Set(11),
        address: Set("Calle 1".into()),
        description: Set(None),
        active: Set(true),
        create_date: Set(Some(now())),
        update_date: Set(None),
        delete_date: Set(None),
    };
    Ok(am.insert(db).await?)
}

/// Regional -> center round trip through the generated ids.
#[tokio::test]
async fn test_center_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let reg = insert_regional(&db, "Antioquia").await?;
    assert!(reg.id > 0);

    let code = (chrono::Utc::now().timestamp_subsec_nanos() % 1_000_000) as i32 + 1;
    let c = center::ActiveModel {
        id: NotSet,
        name: Set("North".into()),
        code_center: Set(code),
        regional_id: Set(reg.id),
        address: Set(None),
        active: Set(true),
        create_date: Set(Some(now())),
        update_date: Set(None),
        delete_date: Set(None),
    }
    .insert(&db)
    .await?;

    let found = center::Entity::find_by_id(c.id).one(&db).await?.expect("center stored");
    assert_eq!(found.name, "North");
    assert_eq!(found.regional_id, reg.id);

    found.delete(&db).await?;
    regional::Entity::delete_by_id(reg.id).exec(&db).await?;
    Ok(())
}

/// Deleting a referenced regional is refused and classified as a conflict.
#[tokio::test]
async fn test_restrict_delete_is_conflict() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let reg = insert_regional(&db, "Caldas").await?;
    let code = (chrono::Utc::now().timestamp_subsec_nanos() % 1_000_000) as i32 + 1;
    let c = center::ActiveModel {
        id: NotSet,
        name: Set("South".into()),
        code_center: Set(code),
        regional_id: Set(reg.id),
        address: Set(Some("Av 2".into())),
        active: Set(true),
        create_date: Set(Some(now())),
        update_date: Set(None),
        delete_date: Set(None),
    }
    .insert(&db)
    .await?;

    let err = regional::Entity::delete_by_id(reg.id).exec(&db).await.expect_err("fk restrict");
    assert!(StorageError::from(err).is_conflict());

    center::Entity::delete_by_id(c.id).exec(&db).await?;
    regional::Entity::delete_by_id(reg.id).exec(&db).await?;
    Ok(())
}
