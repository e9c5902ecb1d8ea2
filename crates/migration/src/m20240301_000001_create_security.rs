//! People, accounts and the role/form/module permission tables.
use sea_orm_migration::{prelude::*, schema::*};

use crate::{audited, references};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audited(Person::Table)
                    .col(string(Person::FirstName))
                    .col(string_null(Person::SecondName))
                    .col(string(Person::FirstLastName))
                    .col(string_null(Person::SecondLastName))
                    .col(string_null(Person::PhoneNumber))
                    .col(string(Person::Email))
                    .col(string_len(Person::TypeIdentification, 32))
                    .col(string_len(Person::NumberIdentification, 32))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(UserAccount::Table)
                    .col(string_len(UserAccount::Username, 128))
                    .col(string(UserAccount::Email))
                    .col(integer(UserAccount::PersonId))
                    .foreign_key(&mut references("fk_user_account_person", UserAccount::Table, UserAccount::PersonId, Person::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Rol::Table)
                    .col(string(Rol::TypeRol))
                    .col(string(Rol::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(UserRol::Table)
                    .col(integer(UserRol::UserId))
                    .col(integer(UserRol::RolId))
                    .foreign_key(&mut references("fk_user_rol_user", UserRol::Table, UserRol::UserId, UserAccount::Table))
                    .foreign_key(&mut references("fk_user_rol_rol", UserRol::Table, UserRol::RolId, Rol::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Form::Table)
                    .col(string(Form::Name))
                    .col(string(Form::Description))
                    .col(string(Form::Path))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Module::Table)
                    .col(string(Module::Name))
                    .col(string(Module::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(FormModule::Table)
                    .col(integer(FormModule::FormId))
                    .col(integer(FormModule::ModuleId))
                    .foreign_key(&mut references("fk_form_module_form", FormModule::Table, FormModule::FormId, Form::Table))
                    .foreign_key(&mut references("fk_form_module_module", FormModule::Table, FormModule::ModuleId, Module::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(RolForm::Table)
                    .col(integer(RolForm::RolId))
                    .col(integer(RolForm::FormId))
                    .col(string_len(RolForm::Permission, 64))
                    .foreign_key(&mut references("fk_rol_form_rol", RolForm::Table, RolForm::RolId, Rol::Table))
                    .foreign_key(&mut references("fk_rol_form_form", RolForm::Table, RolForm::FormId, Form::Table))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RolForm::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FormModule::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Module::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Form::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(UserRol::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Rol::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(UserAccount::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Person {
    Table,
    FirstName,
    SecondName,
    FirstLastName,
    SecondLastName,
    PhoneNumber,
    Email,
    TypeIdentification,
    NumberIdentification,
}

#[derive(DeriveIden)]
pub(crate) enum UserAccount { Table, Username, Email, PersonId }

#[derive(DeriveIden)]
pub(crate) enum Rol { Table, TypeRol, Description }

#[derive(DeriveIden)]
pub(crate) enum UserRol { Table, UserId, RolId }

#[derive(DeriveIden)]
pub(crate) enum Form { Table, Name, Description, Path }

#[derive(DeriveIden)]
pub(crate) enum Module { Table, Name, Description }

#[derive(DeriveIden)]
pub(crate) enum FormModule { Table, FormId, ModuleId }

#[derive(DeriveIden)]
pub(crate) enum RolForm { Table, RolId, FormId, Permission }
