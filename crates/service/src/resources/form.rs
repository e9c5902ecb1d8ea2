use models::form;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_text, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormPatch {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub path: Option<String>,
    pub active: Option<bool>,
}

impl Resource for FormDto {
    type Model = form::Model;
    type Patch = FormPatch;

    const NAME: &'static str = "Form";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: form::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name: m.name,
            description: m.description,
            path: m.path,
            active: m.active,
        }
    }

    fn to_model(&self) -> form::Model {
        form::Model {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            path: self.path.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut form::Model) {
        m.name = self.name.clone();
        m.description = self.description.clone();
        m.path = self.path.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "name", &self.name)?;
        require_text(Self::NAME, "description", &self.description)?;
        require_text(Self::NAME, "path", &self.path)?;
        Ok(())
    }
}

impl Patch<form::Model> for FormPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name {
            require_text(FormDto::NAME, "name", v)?;
        }
        if let Some(v) = &self.description {
            require_text(FormDto::NAME, "description", v)?;
        }
        if let Some(v) = &self.path {
            require_text(FormDto::NAME, "path", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut form::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.description, &self.description);
        changed |= merge(&mut m.path, &self.path);
        changed
    }
}
