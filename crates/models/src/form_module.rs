use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Form, Module }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Form => Entity::belongs_to(super::form::Entity)
                .from(Column::FormId)
                .to(super::form::Column::Id)
                .into(),
            Relation::Module => Entity::belongs_to(super::module::Entity)
                .from(Column::ModuleId)
                .to(super::module::Column::Id)
                .into(),
        }
    }
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef { Relation::Form.def() }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef { Relation::Module.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
