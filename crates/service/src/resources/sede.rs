//! Physical site of a center.
use models::sede;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, optional_email, require_positive, require_text,
    AuditDates, Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SedeDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code_sede: i32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub center_id: i32,
    #[serde(default)]
    pub phone_sede: Option<String>,
    #[serde(default)]
    pub email_contact: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SedePatch {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub code_sede: Option<i32>,
    pub address: Option<String>,
    pub center_id: Option<i32>,
    #[serde(deserialize_with = "nullable")]
    pub phone_sede: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub email_contact: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for SedeDto {
    type Model = sede::Model;
    type Patch = SedePatch;

    const NAME: &'static str = "Sede";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: sede::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name: m.name,
            code_sede: m.code_sede,
            address: m.address,
            center_id: m.center_id,
            phone_sede: m.phone_sede,
            email_contact: m.email_contact,
            active: m.active,
        }
    }

    fn to_model(&self) -> sede::Model {
        sede::Model {
            id: self.id,
            name: self.name.clone(),
            code_sede: self.code_sede,
            address: self.address.clone(),
            center_id: self.center_id,
            phone_sede: self.phone_sede.clone(),
            email_contact: self.email_contact.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut sede::Model) {
        m.name = self.name.clone();
        m.code_sede = self.code_sede;
        m.address = self.address.clone();
        m.center_id = self.center_id;
        m.phone_sede = self.phone_sede.clone();
        m.email_contact = self.email_contact.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "name", &self.name)?;
        require_positive(Self::NAME, "codeSede", self.code_sede)?;
        require_text(Self::NAME, "address", &self.address)?;
        require_positive(Self::NAME, "centerId", self.center_id)?;
        optional_email(Self::NAME, "emailContact", self.email_contact.as_deref())?;
        Ok(())
    }
}

impl Patch<sede::Model> for SedePatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name {
            require_text(SedeDto::NAME, "name", v)?;
        }
        if let Some(v) = self.code_sede {
            require_positive(SedeDto::NAME, "codeSede", v)?;
        }
        if let Some(v) = &self.address {
            require_text(SedeDto::NAME, "address", v)?;
        }
        if let Some(v) = self.center_id {
            require_positive(SedeDto::NAME, "centerId", v)?;
        }
        if let Some(v) = &self.email_contact {
            optional_email(SedeDto::NAME, "emailContact", v.as_deref())?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut sede::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name, &self.name);
        changed |= merge(&mut m.code_sede, &self.code_sede);
        changed |= merge(&mut m.address, &self.address);
        changed |= merge(&mut m.center_id, &self.center_id);
        changed |= merge_nullable(&mut m.phone_sede, &self.phone_sede);
        changed |= merge_nullable(&mut m.email_contact, &self.email_contact);
        changed
    }
}
