use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aprendiz_program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aprendiz_id: i32,
    pub program_id: i32,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Aprendiz, Program }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Aprendiz => Entity::belongs_to(super::aprendiz::Entity)
                .from(Column::AprendizId)
                .to(super::aprendiz::Column::Id)
                .into(),
            Relation::Program => Entity::belongs_to(super::program::Entity)
                .from(Column::ProgramId)
                .to(super::program::Column::Id)
                .into(),
        }
    }
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef { Relation::Aprendiz.def() }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef { Relation::Program.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
