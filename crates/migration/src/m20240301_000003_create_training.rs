//! Apprentices, instructors and the tables linking them to programs and to
//! the practical-stage follow-up process.
use sea_orm_migration::{prelude::*, schema::*};

use crate::{audited, references};
use crate::m20240301_000001_create_security::{Person, UserAccount};
use crate::m20240301_000002_create_parameters::{Enterprise, Process, Program, State, TypeModality};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                audited(Aprendiz::Table)
                    .col(integer(Aprendiz::UserId))
                    .col(string_null(Aprendiz::PreviousProgram))
                    .foreign_key(&mut references("fk_aprendiz_user", Aprendiz::Table, Aprendiz::UserId, UserAccount::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(Instructor::Table)
                    .col(integer(Instructor::PersonId))
                    .col(string(Instructor::ContractType))
                    .col(string_null(Instructor::KnowledgeArea))
                    .foreign_key(&mut references("fk_instructor_person", Instructor::Table, Instructor::PersonId, Person::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(AprendizProgram::Table)
                    .col(integer(AprendizProgram::AprendizId))
                    .col(integer(AprendizProgram::ProgramId))
                    .foreign_key(&mut references("fk_aprendiz_program_aprendiz", AprendizProgram::Table, AprendizProgram::AprendizId, Aprendiz::Table))
                    .foreign_key(&mut references("fk_aprendiz_program_program", AprendizProgram::Table, AprendizProgram::ProgramId, Program::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(InstructorProgram::Table)
                    .col(integer(InstructorProgram::InstructorId))
                    .col(integer(InstructorProgram::ProgramId))
                    .foreign_key(&mut references("fk_instructor_program_instructor", InstructorProgram::Table, InstructorProgram::InstructorId, Instructor::Table))
                    .foreign_key(&mut references("fk_instructor_program_program", InstructorProgram::Table, InstructorProgram::ProgramId, Program::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                audited(AprendizProcessInstructor::Table)
                    .col(integer(AprendizProcessInstructor::AprendizId))
                    .col(integer(AprendizProcessInstructor::InstructorId))
                    .col(integer(AprendizProcessInstructor::ProcessId))
                    .col(integer(AprendizProcessInstructor::EnterpriseId))
                    .col(integer(AprendizProcessInstructor::TypeModalityId))
                    .col(integer(AprendizProcessInstructor::StateId))
                    .foreign_key(&mut references("fk_api_aprendiz", AprendizProcessInstructor::Table, AprendizProcessInstructor::AprendizId, Aprendiz::Table))
                    .foreign_key(&mut references("fk_api_instructor", AprendizProcessInstructor::Table, AprendizProcessInstructor::InstructorId, Instructor::Table))
                    .foreign_key(&mut references("fk_api_process", AprendizProcessInstructor::Table, AprendizProcessInstructor::ProcessId, Process::Table))
                    .foreign_key(&mut references("fk_api_enterprise", AprendizProcessInstructor::Table, AprendizProcessInstructor::EnterpriseId, Enterprise::Table))
                    .foreign_key(&mut references("fk_api_type_modality", AprendizProcessInstructor::Table, AprendizProcessInstructor::TypeModalityId, TypeModality::Table))
                    .foreign_key(&mut references("fk_api_state", AprendizProcessInstructor::Table, AprendizProcessInstructor::StateId, State::Table))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AprendizProcessInstructor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(InstructorProgram::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AprendizProgram::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Instructor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Aprendiz::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Aprendiz { Table, UserId, PreviousProgram }

#[derive(DeriveIden)]
pub(crate) enum Instructor { Table, PersonId, ContractType, KnowledgeArea }

#[derive(DeriveIden)]
pub(crate) enum AprendizProgram { Table, AprendizId, ProgramId }

#[derive(DeriveIden)]
pub(crate) enum InstructorProgram { Table, InstructorId, ProgramId }

#[derive(DeriveIden)]
pub(crate) enum AprendizProcessInstructor {
    Table,
    AprendizId,
    InstructorId,
    ProcessId,
    EnterpriseId,
    TypeModalityId,
    StateId,
}
