//! Wiring of one [`CrudService`] per entity, plus the lookups that span two
//! entities.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::instrument;

use crate::crud::{settle, CrudService};
use crate::errors::ServiceError;
use crate::memory::MemoryRepository;
use crate::repository::SeaOrmRepository;
use crate::resource::Resource;
use crate::resources::{
    aprendiz::AprendizDto, aprendiz_process_instructor::AprendizProcessInstructorDto,
    aprendiz_program::AprendizProgramDto, center::CenterDto, enterprise::EnterpriseDto,
    form::FormDto, form_module::FormModuleDto, instructor::InstructorDto,
    instructor_program::InstructorProgramDto, module::ModuleDto, person::PersonDto,
    process::ProcessDto, program::ProgramDto, regional::RegionalDto, rol::RolDto,
    rol_form::RolFormDto, sede::SedeDto, state::StateDto, type_modality::TypeModalityDto,
    user::UserDto, user_rol::UserRolDto,
};

/// Every entity service the HTTP layer exposes.
#[derive(Clone)]
pub struct Services {
    pub person: CrudService<PersonDto>,
    pub user: CrudService<UserDto>,
    pub rol: CrudService<RolDto>,
    pub user_rol: CrudService<UserRolDto>,
    pub form: CrudService<FormDto>,
    pub module: CrudService<ModuleDto>,
    pub form_module: CrudService<FormModuleDto>,
    pub rol_form: CrudService<RolFormDto>,
    pub regional: CrudService<RegionalDto>,
    pub center: CrudService<CenterDto>,
    pub sede: CrudService<SedeDto>,
    pub program: CrudService<ProgramDto>,
    pub aprendiz: CrudService<AprendizDto>,
    pub instructor: CrudService<InstructorDto>,
    pub enterprise: CrudService<EnterpriseDto>,
    pub process: CrudService<ProcessDto>,
    pub type_modality: CrudService<TypeModalityDto>,
    pub state: CrudService<StateDto>,
    pub aprendiz_program: CrudService<AprendizProgramDto>,
    pub instructor_program: CrudService<InstructorProgramDto>,
    pub aprendiz_process_instructor: CrudService<AprendizProcessInstructorDto>,
}

impl Services {
    /// Services backed by PostgreSQL through SeaORM.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            person: CrudService::new(Arc::new(SeaOrmRepository::<models::person::Entity>::new(db.clone()))),
            user: CrudService::new(Arc::new(SeaOrmRepository::<models::user::Entity>::new(db.clone()))),
            rol: CrudService::new(Arc::new(SeaOrmRepository::<models::rol::Entity>::new(db.clone()))),
            user_rol: CrudService::new(Arc::new(SeaOrmRepository::<models::user_rol::Entity>::new(db.clone()))),
            form: CrudService::new(Arc::new(SeaOrmRepository::<models::form::Entity>::new(db.clone()))),
            module: CrudService::new(Arc::new(SeaOrmRepository::<models::module::Entity>::new(db.clone()))),
            form_module: CrudService::new(Arc::new(SeaOrmRepository::<models::form_module::Entity>::new(db.clone()))),
            rol_form: CrudService::new(Arc::new(SeaOrmRepository::<models::rol_form::Entity>::new(db.clone()))),
            regional: CrudService::new(Arc::new(SeaOrmRepository::<models::regional::Entity>::new(db.clone()))),
            center: CrudService::new(Arc::new(SeaOrmRepository::<models::center::Entity>::new(db.clone()))),
            sede: CrudService::new(Arc::new(SeaOrmRepository::<models::sede::Entity>::new(db.clone()))),
            program: CrudService::new(Arc::new(SeaOrmRepository::<models::program::Entity>::new(db.clone()))),
            aprendiz: CrudService::new(Arc::new(SeaOrmRepository::<models::aprendiz::Entity>::new(db.clone()))),
            instructor: CrudService::new(Arc::new(SeaOrmRepository::<models::instructor::Entity>::new(db.clone()))),
            enterprise: CrudService::new(Arc::new(SeaOrmRepository::<models::enterprise::Entity>::new(db.clone()))),
            process: CrudService::new(Arc::new(SeaOrmRepository::<models::process::Entity>::new(db.clone()))),
            type_modality: CrudService::new(Arc::new(SeaOrmRepository::<models::type_modality::Entity>::new(db.clone()))),
            state: CrudService::new(Arc::new(SeaOrmRepository::<models::state::Entity>::new(db.clone()))),
            aprendiz_program: CrudService::new(Arc::new(SeaOrmRepository::<models::aprendiz_program::Entity>::new(db.clone()))),
            instructor_program: CrudService::new(Arc::new(SeaOrmRepository::<models::instructor_program::Entity>::new(db.clone()))),
            aprendiz_process_instructor: CrudService::new(Arc::new(SeaOrmRepository::<models::aprendiz_process_instructor::Entity>::new(db.clone()))),
        }
    }

    /// Services backed by empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            person: CrudService::new(Arc::new(MemoryRepository::<models::person::Model>::new())),
            user: CrudService::new(Arc::new(MemoryRepository::<models::user::Model>::new())),
            rol: CrudService::new(Arc::new(MemoryRepository::<models::rol::Model>::new())),
            user_rol: CrudService::new(Arc::new(MemoryRepository::<models::user_rol::Model>::new())),
            form: CrudService::new(Arc::new(MemoryRepository::<models::form::Model>::new())),
            module: CrudService::new(Arc::new(MemoryRepository::<models::module::Model>::new())),
            form_module: CrudService::new(Arc::new(MemoryRepository::<models::form_module::Model>::new())),
            rol_form: CrudService::new(Arc::new(MemoryRepository::<models::rol_form::Model>::new())),
            regional: CrudService::new(Arc::new(MemoryRepository::<models::regional::Model>::new())),
            center: CrudService::new(Arc::new(MemoryRepository::<models::center::Model>::new())),
            sede: CrudService::new(Arc::new(MemoryRepository::<models::sede::Model>::new())),
            program: CrudService::new(Arc::new(MemoryRepository::<models::program::Model>::new())),
            aprendiz: CrudService::new(Arc::new(MemoryRepository::<models::aprendiz::Model>::new())),
            instructor: CrudService::new(Arc::new(MemoryRepository::<models::instructor::Model>::new())),
            enterprise: CrudService::new(Arc::new(MemoryRepository::<models::enterprise::Model>::new())),
            process: CrudService::new(Arc::new(MemoryRepository::<models::process::Model>::new())),
            type_modality: CrudService::new(Arc::new(MemoryRepository::<models::type_modality::Model>::new())),
            state: CrudService::new(Arc::new(MemoryRepository::<models::state::Model>::new())),
            aprendiz_program: CrudService::new(Arc::new(MemoryRepository::<models::aprendiz_program::Model>::new())),
            instructor_program: CrudService::new(Arc::new(MemoryRepository::<models::instructor_program::Model>::new())),
            aprendiz_process_instructor: CrudService::new(Arc::new(MemoryRepository::<models::aprendiz_process_instructor::Model>::new())),
        }
    }

    /// An instructor together with the person it references.
    #[instrument(skip(self))]
    pub async fn instructor_detail(&self, id: i32) -> Result<InstructorDetail, ServiceError> {
        let res = self.load_instructor_detail(id).await;
        settle::<InstructorDto, _>("detail", res)
    }

    async fn load_instructor_detail(&self, id: i32) -> Result<InstructorDetail, ServiceError> {
        let instructor = self.instructor.load(id).await?;
        let person = self.person.load(instructor.person_id).await?;
        Ok(InstructorDetail { instructor: InstructorDto::from_model(instructor), person: PersonDto::from_model(person) })
    }

    /// An apprentice together with its user account.
    #[instrument(skip(self))]
    pub async fn aprendiz_detail(&self, id: i32) -> Result<AprendizDetail, ServiceError> {
        let res = self.load_aprendiz_detail(id).await;
        settle::<AprendizDto, _>("detail", res)
    }

    async fn load_aprendiz_detail(&self, id: i32) -> Result<AprendizDetail, ServiceError> {
        let aprendiz = self.aprendiz.load(id).await?;
        let user = self.user.load(aprendiz.user_id).await?;
        Ok(AprendizDetail { aprendiz: AprendizDto::from_model(aprendiz), user: UserDto::from_model(user) })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDetail {
    pub instructor: InstructorDto,
    pub person: PersonDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AprendizDetail {
    pub aprendiz: AprendizDto,
    pub user: UserDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::AuditDates;
    use crate::resources::aprendiz::AprendizPatch;

    fn ana() -> PersonDto {
        PersonDto {
            id: 0,
            first_name: "Ana".into(),
            second_name: None,
            first_last_name: "Gómez".into(),
            second_last_name: None,
            phone_number: Some("3001234567".into()),
            email: "ana@example.com".into(),
            type_identification: "CC".into(),
            number_identification: "1020304050".into(),
            active: true,
            audit: AuditDates::default(),
        }
    }

    #[tokio::test]
    async fn instructor_detail_joins_person() {
        let services = Services::in_memory();
        let person = services.person.create(ana()).await.unwrap();
        let instructor = services
            .instructor
            .create(InstructorDto {
                id: 0,
                person_id: person.id,
                contract_type: "Planta".into(),
                knowledge_area: Some("Software".into()),
                active: true,
                audit: AuditDates::default(),
            })
            .await
            .unwrap();

        let detail = services.instructor_detail(instructor.id).await.unwrap();
        assert_eq!(detail.instructor, instructor);
        assert_eq!(detail.person, person);
    }

    #[tokio::test]
    async fn instructor_detail_missing_sides_are_not_found() {
        let services = Services::in_memory();
        assert!(matches!(services.instructor_detail(1).await, Err(ServiceError::NotFound(_))));

        // the memory store does not enforce the foreign key
        let orphan = services
            .instructor
            .create(InstructorDto {
                id: 0,
                person_id: 77,
                contract_type: "Contrato".into(),
                knowledge_area: None,
                active: true,
                audit: AuditDates::default(),
            })
            .await
            .unwrap();
        assert!(matches!(services.instructor_detail(orphan.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(services.instructor_detail(0).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn aprendiz_detail_joins_user() {
        let services = Services::in_memory();
        let person = services.person.create(ana()).await.unwrap();
        let user = services
            .user
            .create(UserDto {
                id: 0,
                username: "ana.gomez".into(),
                email: "ana@example.com".into(),
                person_id: person.id,
                active: true,
                audit: AuditDates::default(),
            })
            .await
            .unwrap();
        let aprendiz = services
            .aprendiz
            .create(AprendizDto {
                id: 0,
                user_id: user.id,
                previous_program: None,
                active: true,
                audit: AuditDates::default(),
            })
            .await
            .unwrap();

        let patched = services
            .aprendiz
            .patch(aprendiz.id, AprendizPatch { previous_program: Some(Some("ADSI".into())), ..Default::default() })
            .await
            .unwrap();

        let detail = services.aprendiz_detail(aprendiz.id).await.unwrap();
        assert_eq!(detail.aprendiz, patched);
        assert_eq!(detail.user.username, "ana.gomez");

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["aprendiz"]["previousProgram"], "ADSI");
        assert_eq!(json["user"]["personId"], person.id);
    }
}
