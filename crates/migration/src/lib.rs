//! Migrator registering table groups in foreign-key dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

mod m20240301_000001_create_security;
mod m20240301_000002_create_parameters;
mod m20240301_000003_create_training;
mod m20240301_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_security::Migration),
            Box::new(m20240301_000002_create_parameters::Migration),
            Box::new(m20240301_000003_create_training::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000004_add_indexes::Migration),
        ]
    }
}

/// Columns shared by every table: surrogate key plus soft-delete bookkeeping.
#[derive(DeriveIden)]
pub(crate) enum Audit {
    Id,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

/// Start a `CREATE TABLE` with the audit columns already in place.
pub(crate) fn audited<T>(table: T) -> TableCreateStatement
where
    T: IntoTableRef,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(Audit::Id))
        .col(boolean(Audit::Active).default(true))
        .col(timestamp_with_time_zone_null(Audit::CreateDate))
        .col(timestamp_with_time_zone_null(Audit::UpdateDate))
        .col(timestamp_with_time_zone_null(Audit::DeleteDate))
        .to_owned()
}

/// Foreign key to another table's `id`. Deleting a referenced row is refused.
pub(crate) fn references<F, C, T>(name: &str, from: F, column: C, to: T) -> ForeignKeyCreateStatement
where
    F: IntoTableRef,
    C: IntoIden,
    T: IntoTableRef,
{
    ForeignKey::create()
        .name(name)
        .from(from, column)
        .to(to, Audit::Id)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}
