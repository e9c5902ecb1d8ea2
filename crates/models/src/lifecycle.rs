//! Capability traits shared by every record: identity, soft deletion and
//! audit timestamps. The generic service and repositories only see records
//! through these traits.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

pub type Timestamp = DateTimeWithTimeZone;

pub fn now() -> Timestamp {
    Utc::now().into()
}

pub trait Identifiable {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

pub trait SoftDeletable {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn delete_date(&self) -> Option<Timestamp>;
    fn set_delete_date(&mut self, at: Option<Timestamp>);

    /// Move to `active`, keeping `delete_date` consistent with it.
    /// Returns false when the record already had that state.
    fn apply_active(&mut self, active: bool, at: Timestamp) -> bool {
        if self.is_active() == active {
            return false;
        }
        self.set_active(active);
        self.set_delete_date(if active { None } else { Some(at) });
        true
    }
}

pub trait Audited {
    fn create_date(&self) -> Option<Timestamp>;
    fn set_create_date(&mut self, at: Option<Timestamp>);
    fn update_date(&self) -> Option<Timestamp>;
    fn set_update_date(&mut self, at: Option<Timestamp>);
}

/// Everything the generic CRUD layer needs from a stored row.
pub trait Record: Identifiable + SoftDeletable + Audited + Clone + Send + Sync + 'static {}

impl<T> Record for T where T: Identifiable + SoftDeletable + Audited + Clone + Send + Sync + 'static {}

/// Implements the lifecycle traits for an entity `Model` carrying the
/// standard `id`, `active`, `create_date`, `update_date` and `delete_date`
/// columns.
#[macro_export]
macro_rules! impl_lifecycle {
    ($model:ty) => {
        impl $crate::lifecycle::Identifiable for $model {
            fn id(&self) -> i32 { self.id }
            fn set_id(&mut self, id: i32) { self.id = id; }
        }

        impl $crate::lifecycle::SoftDeletable for $model {
            fn is_active(&self) -> bool { self.active }
            fn set_active(&mut self, active: bool) { self.active = active; }
            fn delete_date(&self) -> Option<$crate::lifecycle::Timestamp> { self.delete_date }
            fn set_delete_date(&mut self, at: Option<$crate::lifecycle::Timestamp>) { self.delete_date = at; }
        }

        impl $crate::lifecycle::Audited for $model {
            fn create_date(&self) -> Option<$crate::lifecycle::Timestamp> { self.create_date }
            fn set_create_date(&mut self, at: Option<$crate::lifecycle::Timestamp>) { self.create_date = at; }
            fn update_date(&self) -> Option<$crate::lifecycle::Timestamp> { self.update_date }
            fn set_update_date(&mut self, at: Option<$crate::lifecycle::Timestamp>) { self.update_date = at; }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state;

    fn sample() -> state::Model {
        state::Model {
            id: 1,
            type_state: "Pending".into(),
            description: None,
            active: true,
            create_date: Some(now()),
            update_date: None,
            delete_date: None,
        }
    }

    #[test]
    fn deactivation_stamps_delete_date() {
        let mut m = sample();
        let at = now();
        assert!(m.apply_active(false, at));
        assert!(!m.is_active());
        assert_eq!(m.delete_date(), Some(at));
    }

    #[test]
    fn reactivation_clears_delete_date() {
        let mut m = sample();
        m.apply_active(false, now());
        assert!(m.apply_active(true, now()));
        assert!(m.is_active());
        assert!(m.delete_date().is_none());
    }

    #[test]
    fn same_state_is_a_no_op() {
        let mut m = sample();
        let first = now();
        m.apply_active(false, first);
        assert!(!m.apply_active(false, now()));
        assert_eq!(m.delete_date(), Some(first));
    }
}
