use models::process;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_text, AuditDates, Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub type_process: String,
    #[serde(default)]
    pub start_aprendiz: String,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessPatch {
    pub id: Option<i32>,
    pub type_process: Option<String>,
    pub start_aprendiz: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub observation: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for ProcessDto {
    type Model = process::Model;
    type Patch = ProcessPatch;

    const NAME: &'static str = "Process";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: process::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            type_process: m.type_process,
            start_aprendiz: m.start_aprendiz,
            observation: m.observation,
            active: m.active,
        }
    }

    fn to_model(&self) -> process::Model {
        process::Model {
            id: self.id,
            type_process: self.type_process.clone(),
            start_aprendiz: self.start_aprendiz.clone(),
            observation: self.observation.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut process::Model) {
        m.type_process = self.type_process.clone();
        m.start_aprendiz = self.start_aprendiz.clone();
        m.observation = self.observation.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "typeProcess", &self.type_process)?;
        require_text(Self::NAME, "startAprendiz", &self.start_aprendiz)?;
        Ok(())
    }
}

impl Patch<process::Model> for ProcessPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.type_process {
            require_text(ProcessDto::NAME, "typeProcess", v)?;
        }
        if let Some(v) = &self.start_aprendiz {
            require_text(ProcessDto::NAME, "startAprendiz", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut process::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.type_process, &self.type_process);
        changed |= merge(&mut m.start_aprendiz, &self.start_aprendiz);
        changed |= merge_nullable(&mut m.observation, &self.observation);
        changed
    }
}
