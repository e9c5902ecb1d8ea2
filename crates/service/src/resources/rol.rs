use models::rol;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_text, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub type_rol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolPatch {
    pub id: Option<i32>,
    pub type_rol: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Resource for RolDto {
    type Model = rol::Model;
    type Patch = RolPatch;

    const NAME: &'static str = "Rol";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: rol::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            type_rol: m.type_rol,
            description: m.description,
            active: m.active,
        }
    }

    fn to_model(&self) -> rol::Model {
        rol::Model {
            id: self.id,
            type_rol: self.type_rol.clone(),
            description: self.description.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut rol::Model) {
        m.type_rol = self.type_rol.clone();
        m.description = self.description.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "typeRol", &self.type_rol)?;
        require_text(Self::NAME, "description", &self.description)?;
        Ok(())
    }
}

impl Patch<rol::Model> for RolPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.type_rol {
            require_text(RolDto::NAME, "typeRol", v)?;
        }
        if let Some(v) = &self.description {
            require_text(RolDto::NAME, "description", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut rol::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.type_rol, &self.type_rol);
        changed |= merge(&mut m.description, &self.description);
        changed
    }
}
