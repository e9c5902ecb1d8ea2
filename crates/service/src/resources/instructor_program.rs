use models::instructor_program;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_positive, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorProgramDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub instructor_id: i32,
    #[serde(default)]
    pub program_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorProgramPatch {
    pub id: Option<i32>,
    pub instructor_id: Option<i32>,
    pub program_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for InstructorProgramDto {
    type Model = instructor_program::Model;
    type Patch = InstructorProgramPatch;

    const NAME: &'static str = "InstructorProgram";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: instructor_program::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            instructor_id: m.instructor_id,
            program_id: m.program_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> instructor_program::Model {
        instructor_program::Model {
            id: self.id,
            instructor_id: self.instructor_id,
            program_id: self.program_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut instructor_program::Model) {
        m.instructor_id = self.instructor_id;
        m.program_id = self.program_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "instructorId", self.instructor_id)?;
        require_positive(Self::NAME, "programId", self.program_id)?;
        Ok(())
    }
}

impl Patch<instructor_program::Model> for InstructorProgramPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.instructor_id {
            require_positive(InstructorProgramDto::NAME, "instructorId", v)?;
        }
        if let Some(v) = self.program_id {
            require_positive(InstructorProgramDto::NAME, "programId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut instructor_program::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.instructor_id, &self.instructor_id);
        changed |= merge(&mut m.program_id, &self.program_id);
        changed
    }
}
