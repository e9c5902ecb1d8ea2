use models::form_module;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_positive, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModuleDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub form_id: i32,
    #[serde(default)]
    pub module_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormModulePatch {
    pub id: Option<i32>,
    pub form_id: Option<i32>,
    pub module_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for FormModuleDto {
    type Model = form_module::Model;
    type Patch = FormModulePatch;

    const NAME: &'static str = "FormModule";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: form_module::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            form_id: m.form_id,
            module_id: m.module_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> form_module::Model {
        form_module::Model {
            id: self.id,
            form_id: self.form_id,
            module_id: self.module_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut form_module::Model) {
        m.form_id = self.form_id;
        m.module_id = self.module_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "formId", self.form_id)?;
        require_positive(Self::NAME, "moduleId", self.module_id)?;
        Ok(())
    }
}

impl Patch<form_module::Model> for FormModulePatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.form_id {
            require_positive(FormModuleDto::NAME, "formId", v)?;
        }
        if let Some(v) = self.module_id {
            require_positive(FormModuleDto::NAME, "moduleId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut form_module::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.form_id, &self.form_id);
        changed |= merge(&mut m.module_id, &self.module_id);
        changed
    }
}
