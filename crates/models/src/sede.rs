use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sede")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code_sede: i32,
    pub address: String,
    pub center_id: i32,
    pub phone_sede: Option<String>,
    pub email_contact: Option<String>,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Center }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Center => Entity::belongs_to(super::center::Entity)
                .from(Column::CenterId)
                .to(super::center::Column::Id)
                .into(),
        }
    }
}

impl Related<super::center::Entity> for Entity {
    fn to() -> RelationDef { Relation::Center.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
