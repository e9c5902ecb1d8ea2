//! Permission a role holds over a form.
use models::rol_form;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, require_positive, require_text, AuditDates, Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolFormDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub rol_id: i32,
    #[serde(default)]
    pub form_id: i32,
    #[serde(default)]
    pub permission: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolFormPatch {
    pub id: Option<i32>,
    pub rol_id: Option<i32>,
    pub form_id: Option<i32>,
    pub permission: Option<String>,
    pub active: Option<bool>,
}

impl Resource for RolFormDto {
    type Model = rol_form::Model;
    type Patch = RolFormPatch;

    const NAME: &'static str = "RolForm";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: rol_form::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            rol_id: m.rol_id,
            form_id: m.form_id,
            permission: m.permission,
            active: m.active,
        }
    }

    fn to_model(&self) -> rol_form::Model {
        rol_form::Model {
            id: self.id,
            rol_id: self.rol_id,
            form_id: self.form_id,
            permission: self.permission.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut rol_form::Model) {
        m.rol_id = self.rol_id;
        m.form_id = self.form_id;
        m.permission = self.permission.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "rolId", self.rol_id)?;
        require_positive(Self::NAME, "formId", self.form_id)?;
        require_text(Self::NAME, "permission", &self.permission)?;
        Ok(())
    }
}

impl Patch<rol_form::Model> for RolFormPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.rol_id {
            require_positive(RolFormDto::NAME, "rolId", v)?;
        }
        if let Some(v) = self.form_id {
            require_positive(RolFormDto::NAME, "formId", v)?;
        }
        if let Some(v) = &self.permission {
            require_text(RolFormDto::NAME, "permission", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut rol_form::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.rol_id, &self.rol_id);
        changed |= merge(&mut m.form_id, &self.form_id);
        changed |= merge(&mut m.permission, &self.permission);
        changed
    }
}
