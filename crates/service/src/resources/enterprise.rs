use models::enterprise;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, optional_email, require_text, AuditDates,
    Patch, Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name_enterprise: String,
    #[serde(default)]
    pub nit_enterprise: String,
    #[serde(default)]
    pub phone_enterprise: Option<String>,
    #[serde(default)]
    pub locate: Option<String>,
    #[serde(default)]
    pub email_enterprise: Option<String>,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnterprisePatch {
    pub id: Option<i32>,
    pub name_enterprise: Option<String>,
    pub nit_enterprise: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub phone_enterprise: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub locate: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub email_enterprise: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub observation: Option<Option<String>>,
    pub active: Option<bool>,
}

impl Resource for EnterpriseDto {
    type Model = enterprise::Model;
    type Patch = EnterprisePatch;

    const NAME: &'static str = "Enterprise";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: enterprise::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            name_enterprise: m.name_enterprise,
            nit_enterprise: m.nit_enterprise,
            phone_enterprise: m.phone_enterprise,
            locate: m.locate,
            email_enterprise: m.email_enterprise,
            observation: m.observation,
            active: m.active,
        }
    }

    fn to_model(&self) -> enterprise::Model {
        enterprise::Model {
            id: self.id,
            name_enterprise: self.name_enterprise.clone(),
            nit_enterprise: self.nit_enterprise.clone(),
            phone_enterprise: self.phone_enterprise.clone(),
            locate: self.locate.clone(),
            email_enterprise: self.email_enterprise.clone(),
            observation: self.observation.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut enterprise::Model) {
        m.name_enterprise = self.name_enterprise.clone();
        m.nit_enterprise = self.nit_enterprise.clone();
        m.phone_enterprise = self.phone_enterprise.clone();
        m.locate = self.locate.clone();
        m.email_enterprise = self.email_enterprise.clone();
        m.observation = self.observation.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "nameEnterprise", &self.name_enterprise)?;
        require_text(Self::NAME, "nitEnterprise", &self.nit_enterprise)?;
        optional_email(Self::NAME, "emailEnterprise", self.email_enterprise.as_deref())?;
        Ok(())
    }
}

impl Patch<enterprise::Model> for EnterprisePatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name_enterprise {
            require_text(EnterpriseDto::NAME, "nameEnterprise", v)?;
        }
        if let Some(v) = &self.nit_enterprise {
            require_text(EnterpriseDto::NAME, "nitEnterprise", v)?;
        }
        if let Some(v) = &self.email_enterprise {
            optional_email(EnterpriseDto::NAME, "emailEnterprise", v.as_deref())?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut enterprise::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.name_enterprise, &self.name_enterprise);
        changed |= merge(&mut m.nit_enterprise, &self.nit_enterprise);
        changed |= merge_nullable(&mut m.phone_enterprise, &self.phone_enterprise);
        changed |= merge_nullable(&mut m.locate, &self.locate);
        changed |= merge_nullable(&mut m.email_enterprise, &self.email_enterprise);
        changed |= merge_nullable(&mut m.observation, &self.observation);
        changed
    }
}
