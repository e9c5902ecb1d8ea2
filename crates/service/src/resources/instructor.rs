use models::instructor;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_positive, require_text, AuditDates,
    Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub person_id: i32,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub knowledge_area: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

/// Partial update for [`InstructorDto`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorPatch {
    pub id: Option<i32>,
    pub person_id: Option<i32>,
    pub contract_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub knowledge_area: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for InstructorDto {
    type Model = instructor::Model;
    type Patch = InstructorPatch;

    const NAME: &'static str = "Instructor";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: instructor::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            person_id: m.person_id,
            contract_type: m.contract_type,
            knowledge_area: m.knowledge_area,
            active: m.active,
        }
    }

    fn to_model(&self) -> instructor::Model {
        instructor::Model {
            id: self.id,
            person_id: self.person_id,
            contract_type: self.contract_type.clone(),
            knowledge_area: self.knowledge_area.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut instructor::Model) {
        m.person_id = self.person_id;
        m.contract_type = self.contract_type.clone();
        m.knowledge_area = self.knowledge_area.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "personId", self.person_id)?;
        require_text(Self::NAME, "contractType", &self.contract_type)?;
        Ok(())
    }
}

impl Patch<instructor::Model> for InstructorPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.person_id {
            require_positive(InstructorDto::NAME, "personId", v)?;
        }
        if let Some(v) = &self.contract_type {
            require_text(InstructorDto::NAME, "contractType", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut instructor::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.person_id, &self.person_id);
        changed |= merge(&mut m.contract_type, &self.contract_type);
        changed |= merge_nullable(&mut m.knowledge_area, &self.knowledge_area);
        changed
    }
}
