use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_id: i32,
    pub contract_type: String,
    pub knowledge_area: Option<String>,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Person }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Person => Entity::belongs_to(super::person::Entity)
                .from(Column::PersonId)
                .to(super::person::Column::Id)
                .into(),
        }
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef { Relation::Person.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
