//! Assignment of an apprentice to an instructor for a process at an enterprise.
use models::aprendiz_process_instructor;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_positive, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprendizProcessInstructorDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub aprendiz_id: i32,
    #[serde(default)]
    pub instructor_id: i32,
    #[serde(default)]
    pub process_id: i32,
    #[serde(default)]
    pub enterprise_id: i32,
    #[serde(default)]
    pub type_modality_id: i32,
    #[serde(default)]
    pub state_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AprendizProcessInstructorPatch {
    pub id: Option<i32>,
    pub aprendiz_id: Option<i32>,
    pub instructor_id: Option<i32>,
    pub process_id: Option<i32>,
    pub enterprise_id: Option<i32>,
    pub type_modality_id: Option<i32>,
    pub state_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for AprendizProcessInstructorDto {
    type Model = aprendiz_process_instructor::Model;
    type Patch = AprendizProcessInstructorPatch;

    const NAME: &'static str = "AprendizProcessInstructor";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: aprendiz_process_instructor::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            aprendiz_id: m.aprendiz_id,
            instructor_id: m.instructor_id,
            process_id: m.process_id,
            enterprise_id: m.enterprise_id,
            type_modality_id: m.type_modality_id,
            state_id: m.state_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> aprendiz_process_instructor::Model {
        aprendiz_process_instructor::Model {
            id: self.id,
            aprendiz_id: self.aprendiz_id,
            instructor_id: self.instructor_id,
            process_id: self.process_id,
            enterprise_id: self.enterprise_id,
            type_modality_id: self.type_modality_id,
            state_id: self.state_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut aprendiz_process_instructor::Model) {
        m.aprendiz_id = self.aprendiz_id;
        m.instructor_id = self.instructor_id;
        m.process_id = self.process_id;
        m.enterprise_id = self.enterprise_id;
        m.type_modality_id = self.type_modality_id;
        m.state_id = self.state_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "aprendizId", self.aprendiz_id)?;
        require_positive(Self::NAME, "instructorId", self.instructor_id)?;
        require_positive(Self::NAME, "processId", self.process_id)?;
        require_positive(Self::NAME, "enterpriseId", self.enterprise_id)?;
        require_positive(Self::NAME, "typeModalityId", self.type_modality_id)?;
        require_positive(Self::NAME, "stateId", self.state_id)?;
        Ok(())
    }
}

impl Patch<aprendiz_process_instructor::Model> for AprendizProcessInstructorPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.aprendiz_id {
            require_positive(AprendizProcessInstructorDto::NAME, "aprendizId", v)?;
        }
        if let Some(v) = self.instructor_id {
            require_positive(AprendizProcessInstructorDto::NAME, "instructorId", v)?;
        }
        if let Some(v) = self.process_id {
            require_positive(AprendizProcessInstructorDto::NAME, "processId", v)?;
        }
        if let Some(v) = self.enterprise_id {
            require_positive(AprendizProcessInstructorDto::NAME, "enterpriseId", v)?;
        }
        if let Some(v) = self.type_modality_id {
            require_positive(AprendizProcessInstructorDto::NAME, "typeModalityId", v)?;
        }
        if let Some(v) = self.state_id {
            require_positive(AprendizProcessInstructorDto::NAME, "stateId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut aprendiz_process_instructor::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.aprendiz_id, &self.aprendiz_id);
        changed |= merge(&mut m.instructor_id, &self.instructor_id);
        changed |= merge(&mut m.process_id, &self.process_id);
        changed |= merge(&mut m.enterprise_id, &self.enterprise_id);
        changed |= merge(&mut m.type_modality_id, &self.type_modality_id);
        changed |= merge(&mut m.state_id, &self.state_id);
        changed
    }
}
