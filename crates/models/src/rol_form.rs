use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rol_form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission: String,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Rol, Form }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Rol => Entity::belongs_to(super::rol::Entity)
                .from(Column::RolId)
                .to(super::rol::Column::Id)
                .into(),
            Relation::Form => Entity::belongs_to(super::form::Entity)
                .from(Column::FormId)
                .to(super::form::Column::Id)
                .into(),
        }
    }
}

impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef { Relation::Rol.def() }
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef { Relation::Form.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
