use models::aprendiz;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_positive, AuditDates, Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprendizDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub user_id: i32,
    #[serde(default)]
    pub previous_program: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AprendizPatch {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    #[serde(deserialize_with = "nullable")]
    pub previous_program: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for AprendizDto {
    type Model = aprendiz::Model;
    type Patch = AprendizPatch;

    const NAME: &'static str = "Aprendiz";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: aprendiz::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            user_id: m.user_id,
            previous_program: m.previous_program,
            active: m.active,
        }
    }

    fn to_model(&self) -> aprendiz::Model {
        aprendiz::Model {
            id: self.id,
            user_id: self.user_id,
            previous_program: self.previous_program.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut aprendiz::Model) {
        m.user_id = self.user_id;
        m.previous_program = self.previous_program.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "userId", self.user_id)?;
        Ok(())
    }
}

impl Patch<aprendiz::Model> for AprendizPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.user_id {
            require_positive(AprendizDto::NAME, "userId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut aprendiz::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.user_id, &self.user_id);
        changed |= merge_nullable(&mut m.previous_program, &self.previous_program);
        changed
    }
}
