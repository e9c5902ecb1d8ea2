//! Training center, child of a regional.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "center")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code_center: i32,
    pub regional_id: i32,
    pub address: Option<String>,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Regional }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Regional => Entity::belongs_to(super::regional::Entity)
                .from(Column::RegionalId)
                .to(super::regional::Column::Id)
                .into(),
        }
    }
}

impl Related<super::regional::Entity> for Entity {
    fn to() -> RelationDef { Relation::Regional.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
