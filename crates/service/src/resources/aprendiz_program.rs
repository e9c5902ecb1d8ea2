use models::aprendiz_program;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_positive, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprendizProgramDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub aprendiz_id: i32,
    #[serde(default)]
    pub program_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AprendizProgramPatch {
    pub id: Option<i32>,
    pub aprendiz_id: Option<i32>,
    pub program_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for AprendizProgramDto {
    type Model = aprendiz_program::Model;
    type Patch = AprendizProgramPatch;

    const NAME: &'static str = "AprendizProgram";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: aprendiz_program::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            aprendiz_id: m.aprendiz_id,
            program_id: m.program_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> aprendiz_program::Model {
        aprendiz_program::Model {
            id: self.id,
            aprendiz_id: self.aprendiz_id,
            program_id: self.program_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut aprendiz_program::Model) {
        m.aprendiz_id = self.aprendiz_id;
        m.program_id = self.program_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "aprendizId", self.aprendiz_id)?;
        require_positive(Self::NAME, "programId", self.program_id)?;
        Ok(())
    }
}

impl Patch<aprendiz_program::Model> for AprendizProgramPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.aprendiz_id {
            require_positive(AprendizProgramDto::NAME, "aprendizId", v)?;
        }
        if let Some(v) = self.program_id {
            require_positive(AprendizProgramDto::NAME, "programId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut aprendiz_program::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.aprendiz_id, &self.aprendiz_id);
        changed |= merge(&mut m.program_id, &self.program_id);
        changed
    }
}
