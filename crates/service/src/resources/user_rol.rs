use models::user_rol;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{default_active, merge, require_positive, AuditDates, Patch, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub user_id: i32,
    #[serde(default)]
    pub rol_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRolPatch {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub rol_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for UserRolDto {
    type Model = user_rol::Model;
    type Patch = UserRolPatch;

    const NAME: &'static str = "UserRol";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: user_rol::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            user_id: m.user_id,
            rol_id: m.rol_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> user_rol::Model {
        user_rol::Model {
            id: self.id,
            user_id: self.user_id,
            rol_id: self.rol_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut user_rol::Model) {
        m.user_id = self.user_id;
        m.rol_id = self.rol_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_positive(Self::NAME, "userId", self.user_id)?;
        require_positive(Self::NAME, "rolId", self.rol_id)?;
        Ok(())
    }
}

impl Patch<user_rol::Model> for UserRolPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = self.user_id {
            require_positive(UserRolDto::NAME, "userId", v)?;
        }
        if let Some(v) = self.rol_id {
            require_positive(UserRolDto::NAME, "rolId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut user_rol::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.user_id, &self.user_id);
        changed |= merge(&mut m.rol_id, &self.rol_id);
        changed
    }
}
