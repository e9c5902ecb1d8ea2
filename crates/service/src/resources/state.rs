use models::state;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_text, AuditDates, Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub type_state: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatePatch {
    pub id: Option<i32>,
    pub type_state: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for StateDto {
    type Model = state::Model;
    type Patch = StatePatch;

    const NAME: &'static str = "State";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: state::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            type_state: m.type_state,
            description: m.description,
            active: m.active,
        }
    }

    fn to_model(&self) -> state::Model {
        state::Model {
            id: self.id,
            type_state: self.type_state.clone(),
            description: self.description.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut state::Model) {
        m.type_state = self.type_state.clone();
        m.description = self.description.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "typeState", &self.type_state)?;
        Ok(())
    }
}

impl Patch<state::Model> for StatePatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.type_state {
            require_text(StateDto::NAME, "typeState", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut state::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.type_state, &self.type_state);
        changed |= merge_nullable(&mut m.description, &self.description);
        changed
    }
}
