//! Training center belonging to a regional.
use models::center;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_positive, require_text, AuditDates,
    Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code_center: i32,
    #[serde(default)]
    pub regional_id: i32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

/// Partial update for [`CenterDto`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CenterPatch {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub code_center: Option<i32>,
    pub regional_id: Option<i32>,
    #[serde(deserialize_with = "nullable")]
    pub address: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for CenterDto {
    type Model = center::Model;
    type Patch = CenterPatch;

    const NAME: &'static str = "Center";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: center::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name: m.name,
            code_center: m.code_center,
            regional_id: m.regional_id,
            address: m.address,
            active: m.active,
        }
    }

    fn to_model(&self) -> center::Model {
        center::Model {
            id: self.id,
            name: self.name.clone(),
            code_center: self.code_center,
            regional_id: self.regional_id,
            address: self.address.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut center::Model) {
        m.name = self.name.clone();
        m.code_center = self.code_center;
        m.regional_id = self.regional_id;
        m.address = self.address.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "name", &self.name)?;
        require_positive(Self::NAME, "codeCenter", self.code_center)?;
        require_positive(Self::NAME, "regionalId", self.regional_id)?;
        Ok(())
    }
}

impl Patch<center::Model> for CenterPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name {
            require_text(CenterDto::NAME, "name", v)?;
        }
        if let Some(v) = self.code_center {
            require_positive(CenterDto::NAME, "codeCenter", v)?;
        }
        if let Some(v) = self.regional_id {
            require_positive(CenterDto::NAME, "regionalId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut center::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.code_center, &self.code_center);
        changed |= merge(&mut m.regional_id, &self.regional_id);
        changed |= merge_nullable(&mut m.address, &self.address);
        changed
    }
}
