//! Per-entity glue for the generic service: how a stored row maps to its
//! transfer object, how a transfer object is validated, and how a partial
//! update is merged.

use models::lifecycle::{Audited, Record, SoftDeletable, Timestamp};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// A transfer object exposed over HTTP for one entity.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Model: Record;
    type Patch: Patch<Self::Model> + DeserializeOwned + Default + Send + Sync + 'static;

    /// Entity name used in messages, logs and metric labels.
    const NAME: &'static str;

    fn id(&self) -> i32;
    fn active(&self) -> bool;

    fn from_model(model: Self::Model) -> Self;
    /// A new row carrying this object's domain fields. Id and audit columns
    /// are left for the service to fill in.
    fn to_model(&self) -> Self::Model;
    /// Copy every domain field onto `model`, leaving id, `active` and audit
    /// columns alone.
    fn overwrite(&self, model: &mut Self::Model);
    fn validate(&self) -> Result<(), ServiceError>;
}

/// Partial update where every field is optional.
pub trait Patch<M>: Send + Sync {
    fn id(&self) -> Option<i32>;
    fn active(&self) -> Option<bool>;
    /// Validate the fields that were supplied.
    fn validate(&self) -> Result<(), ServiceError>;
    /// Overwrite each supplied field that differs from `model`. Returns
    /// whether any domain field changed. `active` is handled by the caller.
    fn merge_into(&self, model: &mut M) -> bool;
}

/// Audit columns shared by every transfer object. Read-only: values sent by
/// clients are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditDates {
    pub create_date: Option<Timestamp>,
    pub update_date: Option<Timestamp>,
    pub delete_date: Option<Timestamp>,
}

impl AuditDates {
    pub fn of<M: Audited + SoftDeletable>(model: &M) -> Self {
        Self {
            create_date: model.create_date(),
            update_date: model.update_date(),
            delete_date: model.delete_date(),
        }
    }
}

pub fn default_active() -> bool {
    true
}

pub fn require_text(entity: &str, field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{entity}.{field} is required")));
    }
    Ok(())
}

pub fn require_email(entity: &str, field: &str, value: &str) -> Result<(), ServiceError> {
    require_text(entity, field, value)?;
    if !looks_like_email(value) {
        return Err(ServiceError::validation(format!("{entity}.{field} is not a valid email")));
    }
    Ok(())
}

/// Null or blank passes; anything else must look like an address.
pub fn optional_email(entity: &str, field: &str, value: Option<&str>) -> Result<(), ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() && !looks_like_email(v) => {
            Err(ServiceError::validation(format!("{entity}.{field} is not a valid email")))
        }
        _ => Ok(()),
    }
}

pub fn require_positive(entity: &str, field: &str, value: i32) -> Result<(), ServiceError> {
    if value <= 0 {
        return Err(ServiceError::validation(format!("{entity}.{field} must be a positive integer")));
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Overwrite `slot` when `value` is supplied and differs.
pub fn merge<T: PartialEq + Clone>(slot: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if slot != v => {
            *slot = v.clone();
            true
        }
        _ => false,
    }
}

/// Like [`merge`] for nullable columns, where `Some(None)` clears the value.
pub fn merge_nullable<T: PartialEq + Clone>(slot: &mut Option<T>, value: &Option<Option<T>>) -> bool {
    merge(slot, value)
}

/// Keeps an explicit JSON `null` distinct from an absent field: absent stays
/// `None` through `#[serde(default)]`, `null` becomes `Some(None)`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Noted {
        #[serde(default, deserialize_with = "nullable")]
        note: Option<Option<String>>,
    }

    #[test]
    fn nullable_distinguishes_absent_from_null() {
        let absent: Noted = serde_json::from_str("{}").unwrap();
        let null: Noted = serde_json::from_str(r#"{"note":null}"#).unwrap();
        let set: Noted = serde_json::from_str(r#"{"note":"x"}"#).unwrap();
        assert_eq!(absent.note, None);
        assert_eq!(null.note, Some(None));
        assert_eq!(set.note, Some(Some("x".to_string())));
    }

    #[test]
    fn merge_only_reports_real_changes() {
        let mut name = "North".to_string();
        assert!(!merge(&mut name, &None));
        assert!(!merge(&mut name, &Some("North".to_string())));
        assert!(merge(&mut name, &Some("South".to_string())));
        assert_eq!(name, "South");

        let mut address = Some("Cra 1".to_string());
        assert!(merge_nullable(&mut address, &Some(None)));
        assert_eq!(address, None);
        assert!(!merge_nullable(&mut address, &Some(None)));
    }

    #[test]
    fn field_rules() {
        assert!(require_text("Center", "name", "  ").is_err());
        assert!(require_text("Center", "name", "North").is_ok());
        assert!(require_positive("Center", "regionalId", 0).is_err());
        assert!(require_email("Person", "email", "ana@example.com").is_ok());
        assert!(require_email("Person", "email", "ana.example.com").is_err());
        assert!(optional_email("Sede", "emailContact", None).is_ok());
        assert!(optional_email("Sede", "emailContact", Some("")).is_ok());
        assert!(optional_email("Sede", "emailContact", Some("nope")).is_err());
    }
}
