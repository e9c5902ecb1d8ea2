//! Catalogue tables: regional/center/sede hierarchy, programs, enterprises
//! and the process, modality and state parameters.
use sea_orm_migration::{prelude::*, schema::*};

use crate::{audited, references};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audited(Regional::Table)
                    .col(string(Regional::Name))
                    .col(integer(Regional::CodeRegional))
                    .col(string(Regional::Address))
                    .col(string_null(Regional::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Center::Table)
                    .col(string(Center::Name))
                    .col(integer(Center::CodeCenter))
                    .col(integer(Center::RegionalId))
                    .col(string_null(Center::Address))
                    .foreign_key(&mut references("fk_center_regional", Center::Table, Center::RegionalId, Regional::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Sede::Table)
                    .col(string(Sede::Name))
                    .col(integer(Sede::CodeSede))
                    .col(string(Sede::Address))
                    .col(integer(Sede::CenterId))
                    .col(string_null(Sede::PhoneSede))
                    .col(string_null(Sede::EmailContact))
                    .foreign_key(&mut references("fk_sede_center", Sede::Table, Sede::CenterId, Center::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Program::Table)
                    .col(integer(Program::CodeProgram))
                    .col(string(Program::Name))
                    .col(string(Program::TypeProgram))
                    .col(string_null(Program::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Enterprise::Table)
                    .col(string(Enterprise::NameEnterprise))
                    .col(string_len(Enterprise::NitEnterprise, 32))
                    .col(string_null(Enterprise::PhoneEnterprise))
                    .col(string_null(Enterprise::Locate))
                    .col(string_null(Enterprise::EmailEnterprise))
                    .col(string_null(Enterprise::Observation))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Process::Table)
                    .col(string(Process::TypeProcess))
                    .col(string(Process::StartAprendiz))
                    .col(string_null(Process::Observation))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(TypeModality::Table)
                    .col(string(TypeModality::Name))
                    .col(string_null(TypeModality::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(State::Table)
                    .col(string(State::TypeState))
                    .col(string_null(State::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(State::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TypeModality::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Process::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Enterprise::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Program::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Sede::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Center::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Regional::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Regional { Table, Name, CodeRegional, Address, Description }

#[derive(DeriveIden)]
pub(crate) enum Center { Table, Name, CodeCenter, RegionalId, Address }

#[derive(DeriveIden)]
pub(crate) enum Sede { Table, Name, CodeSede, Address, CenterId, PhoneSede, EmailContact }

#[derive(DeriveIden)]
pub(crate) enum Program { Table, CodeProgram, Name, TypeProgram, Description }

#[derive(DeriveIden)]
pub(crate) enum Enterprise {
    Table,
    NameEnterprise,
    NitEnterprise,
    PhoneEnterprise,
    Locate,
    EmailEnterprise,
    Observation,
}

#[derive(DeriveIden)]
pub(crate) enum Process { Table, TypeProcess, StartAprendiz, Observation }

#[derive(DeriveIden)]
pub(crate) enum TypeModality { Table, Name, Description }

#[derive(DeriveIden)]
pub(crate) enum State { Table, TypeState, Description }
