//! Natural person referenced by users and instructors.
use models::person;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, merge_nullable, nullable, require_email, require_text, AuditDates, Patch,
    Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub first_last_name: String,
    #[serde(default)]
    pub second_last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub type_identification: String,
    #[serde(default)]
    pub number_identification: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

/// Partial update for [`PersonDto`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonPatch {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub second_name: Option<Option<String>>,
    pub first_last_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub second_last_name: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub phone_number: Option<Option<String>>,
    pub email: Option<String>,
    pub type_identification: Option<String>,
    pub number_identification: Option<String>,
    pub active: Option<bool>,
}

impl Resource for PersonDto {
    type Model = person::Model;
    type Patch = PersonPatch;

    const NAME: &'static str = "Person";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: person::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            first_name: m.first_name,
            second_name: m.second_name,
            first_last_name: m.first_last_name,
            second_last_name: m.second_last_name,
            phone_number: m.phone_number,
            email: m.email,
            type_identification: m.type_identification,
            number_identification: m.number_identification,
            active: m.active,
        }
    }

    fn to_model(&self) -> person::Model {
        person::Model {
            id: self.id,
            first_name: self.first_name.clone(),
            second_name: self.second_name.clone(),
            first_last_name: self.first_last_name.clone(),
            second_last_name: self.second_last_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            type_identification: self.type_identification.clone(),
            number_identification: self.number_identification.clone(),
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut person::Model) {
        m.first_name = self.first_name.clone();
        m.second_name = self.second_name.clone();
        m.first_last_name = self.first_last_name.clone();
        m.second_last_name = self.second_last_name.clone();
        m.phone_number = self.phone_number.clone();
        m.email = self.email.clone();
        m.type_identification = self.type_identification.clone();
        m.number_identification = self.number_identification.clone();
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "firstName", &self.first_name)?;
        require_text(Self::NAME, "firstLastName", &self.first_last_name)?;
        require_email(Self::NAME, "email", &self.email)?;
        require_text(Self::NAME, "typeIdentification", &self.type_identification)?;
        require_text(Self::NAME, "numberIdentification", &self.number_identification)?;
        Ok(())
    }
}

impl Patch<person::Model> for PersonPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.first_name {
            require_text(PersonDto::NAME, "firstName", v)?;
        }
        if let Some(v) = &self.first_last_name {
            require_text(PersonDto::NAME, "firstLastName", v)?;
        }
        if let Some(v) = &self.email {
            require_email(PersonDto::NAME, "email", v)?;
        }
        if let Some(v) = &self.type_identification {
            require_text(PersonDto::NAME, "typeIdentification", v)?;
        }
        if let Some(v) = &self.number_identification {
            require_text(PersonDto::NAME, "numberIdentification", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut person::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.first_name, &self.first_name);
        changed |= merge_nullable(&mut m.second_name, &self.second_name);
        changed |= merge(&mut m.first_last_name, &self.first_last_name);
        changed |= merge_nullable(&mut m.second_last_name, &self.second_last_name);
        changed |= merge_nullable(&mut m.phone_number, &self.phone_number);
        changed |= merge(&mut m.email, &self.email);
        changed |= merge(&mut m.type_identification, &self.type_identification);
        changed |= merge(&mut m.number_identification, &self.number_identification);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_with_audit_fields() {
        let dto: PersonDto = serde_json::from_value(serde_json::json!({
            "firstName": "Ana",
            "firstLastName": "Gómez",
            "email": "ana@example.com",
            "typeIdentification": "CC",
            "numberIdentification": "1020304050"
        }))
        .unwrap();
        assert!(dto.active);
        assert_eq!(dto.second_name, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["numberIdentification"], "1020304050");
        assert!(json["deleteDate"].is_null());
        assert!(json.get("createDate").is_some());
    }

    #[test]
    fn absent_required_field_fails_validation() {
        let dto: PersonDto = serde_json::from_value(serde_json::json!({
            "firstName": "Ana",
            "email": "ana@example.com"
        }))
        .unwrap();
        let err = dto.validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("firstLastName")));
    }

    #[test]
    fn patch_rejects_bad_email_only_when_supplied() {
        assert!(PersonPatch::default().validate().is_ok());
        let bad = PersonPatch { email: Some("not-an-email".into()), ..Default::default() };
        assert!(bad.validate().is_err());
    }
}
