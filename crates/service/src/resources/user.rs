//! Login account tied to a person. Stored in `user_account`.
use models::user;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::resource::{
    default_active, merge, require_email, require_positive, require_text, AuditDates, Patch,
    Resource,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub person_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub audit: AuditDates,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub person_id: Option<i32>,
    pub active: Option<bool>,
}

impl Resource for UserDto {
    type Model = user::Model;
    type Patch = UserPatch;

    const NAME: &'static str = "User";

    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }

    fn from_model(m: user::Model) -> Self {
        Self {
            audit: AuditDates::of(&m),
            id: m.id,
            username: m.username,
            email: m.email,
            person_id: m.person_id,
            active: m.active,
        }
    }

    fn to_model(&self) -> user::Model {
        user::Model {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            person_id: self.person_id,
            active: self.active,
            create_date: None,
            update_date: None,
            delete_date: None,
        }
    }

    fn overwrite(&self, m: &mut user::Model) {
        m.username = self.username.clone();
        m.email = self.email.clone();
        m.person_id = self.person_id;
    }

    fn validate(&self) -> Result<(), ServiceError> {
        require_text(Self::NAME, "username", &self.username)?;
        require_email(Self::NAME, "email", &self.email)?;
        require_positive(Self::NAME, "personId", self.person_id)?;
        Ok(())
    }
}

impl Patch<user::Model> for UserPatch {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.username {
            require_text(UserDto::NAME, "username", v)?;
        }
        if let Some(v) = &self.email {
            require_email(UserDto::NAME, "email", v)?;
        }
        if let Some(v) = self.person_id {
            require_positive(UserDto::NAME, "personId", v)?;
        }
        Ok(())
    }

    fn merge_into(&self, m: &mut user::Model) -> bool {
        let mut changed = false;
        changed |= merge(&mut m.username, &self.username);
        changed |= merge(&mut m.email, &self.email);
        changed |= merge(&mut m.person_id, &self.person_id);
        changed
    }
}
