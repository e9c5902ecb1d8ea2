use models::regional;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_positive, require_text, AuditDates,
    Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code_regional: i32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalPatch {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub code_regional: Option<i32>,
    pub address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for RegionalDto {
    type Model = regional::Model;
    type Patch = RegionalPatch;

    const NAME: &'static str = "Regional";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: regional::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name: m.name,
            code_regional: m.code_regional,
            address: m.address,
            description: m.description,
            active: m.active,
        }
    }

    fn to_model(&self) -> regional::Model {
        regional::Model {
            id: self.id,
            name: self.name.clone(),
            code_regional: self.code_regional,
            address: self.address.clone(),
            description: self.description.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut regional::Model) {
        m.name = self.name.clone();
        m.code_regional = self.code_regional;
        m.address = self.address.clone();
        m.description = self.description.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "name", &self.name)?;
        require_positive(Self::NAME, "codeRegional", self.code_regional)?;
        require_text(Self::NAME, "address", &self.address)?;
        Ok(())
    }
}

impl Patch<regional::Model> for RegionalPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name {
            require_text(RegionalDto::NAME, "name", v)?;
        }
        if let Some(v) = self.code_regional {
            require_positive(RegionalDto::NAME, "codeRegional", v)?;
        }
        if let Some(v) = &self.address {
            require_text(RegionalDto::NAME, "address", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut regional::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.code_regional, &self.code_regional);
        changed |= merge(&mut m.address, &self.address);
        changed |= merge_nullable(&mut m.description, &self.description);
        changed
    }
}
