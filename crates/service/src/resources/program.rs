use models::program;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_positive, require_text, AuditDates,
    Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub code_program: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_program: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramPatch {
    pub id: Option<i32>,
    pub code_program: Option<i32>,
    pub name: Option<String>,
    pub type_program: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for ProgramDto {
    type Model = program::Model;
    type Patch = ProgramPatch;

    const NAME: &'static str = "Program";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: program::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            code_program: m.code_program,
            name: m.name,
            type_program: m.type_program,
            description: m.description,
            active: m.active,
        }
    }

    fn to_model(&self) -> program::Model {
        program::Model {
            id: self.id,
            code_program: self.code_program,
            name: self.name.clone(),
            type_program: self.type_program.clone(),
            description: self.description.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut program::Model) {
        m.code_program = self.code_program;
        m.name = self.name.clone();
        m.type_program = self.type_program.clone();
        m.description = self.description.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "codeProgram", self.code_program)?;
        require_text(Self::NAME, "name", &self.name)?;
        require_text(Self::NAME, "typeProgram", &self.type_program)?;
        Ok(())
    }
}

impl Patch<program::Model> for ProgramPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.code_program {
            require_positive(ProgramDto::NAME, "codeProgram", v)?;
        }
        if let Some(v) = &self.name {
            require_text(ProgramDto::NAME, "name", v)?;
        }
        if let Some(v) = &self.type_program {
            require_text(ProgramDto::NAME, "typeProgram", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut program::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.code_program, &self.code_program);
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.type_program, &self.type_program);
        changed |= merge_nullable(&mut m.description, &self.description);
        changed
    }
}
