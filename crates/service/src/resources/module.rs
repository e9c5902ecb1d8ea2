use models::module;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_text, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModulePatch {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Resource for ModuleDto {
    type Model = module::Model;
    type Patch = ModulePatch;

    const NAME: &'static str = "Module";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: module::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name: m.name,
            description: m.description,
            active: m.active,
        }
    }

    fn to_model(&self) -> module::Model {
        module::Model {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut module::Model) {
        m.name = self.name.clone();
        m.description = self.description.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "name", &self.name)?;
        require_text(Self::NAME, "description", &self.description)?;
        Ok(())
    }
}

impl Patch<module::Model> for ModulePatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name {
            require_text(ModuleDto::NAME, "name", v)?;
        }
        if let Some(v) = &self.description {
            require_text(ModuleDto::NAME, "description", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut module::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.description, &self.description);
        changed
    }
}
