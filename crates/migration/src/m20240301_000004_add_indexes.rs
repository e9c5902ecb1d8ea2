use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index, table, column) for every foreign-key column.
const FK_INDEXES: &[(&str, &str, &str)] = &[
    ("idx_user_account_person", "user_account", "person_id"),
    ("idx_user_rol_user", "user_rol", "user_id"),
    ("idx_user_rol_rol", "user_rol", "rol_id"),
    ("idx_form_module_form", "form_module", "form_id"),
    ("idx_form_module_module", "form_module", "module_id"),
    ("idx_rol_form_rol", "rol_form", "rol_id"),
    ("idx_rol_form_form", "rol_form", "form_id"),
    ("idx_center_regional", "center", "regional_id"),
    ("idx_sede_center", "sede", "center_id"),
    ("idx_aprendiz_user", "aprendiz", "user_id"),
    ("idx_instructor_person", "instructor", "person_id"),
    ("idx_aprendiz_program_aprendiz", "aprendiz_program", "aprendiz_id"),
    ("idx_aprendiz_program_program", "aprendiz_program", "program_id"),
    ("idx_instructor_program_instructor", "instructor_program", "instructor_id"),
    ("idx_instructor_program_program", "instructor_program", "program_id"),
    ("idx_api_aprendiz", "aprendiz_process_instructor", "aprendiz_id"),
    ("idx_api_instructor", "aprendiz_process_instructor", "instructor_id"),
    ("idx_api_process", "aprendiz_process_instructor", "process_id"),
    ("idx_api_enterprise", "aprendiz_process_instructor", "enterprise_id"),
    ("idx_api_type_modality", "aprendiz_process_instructor", "type_modality_id"),
    ("idx_api_state", "aprendiz_process_instructor", "state_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in FK_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in FK_INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}
