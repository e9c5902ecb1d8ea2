//! Practical-stage follow-up: ties an apprentice to the instructor, process,
//! enterprise, modality and state of that stage.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aprendiz_process_instructor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aprendiz_id: i32,
    pub instructor_id: i32,
    pub process_id: i32,
    pub enterprise_id: i32,
    pub type_modality_id: i32,
    pub state_id: i32,
    pub active: bool,
    pub create_date: Option<DateTimeWithTimeZone>,
    pub update_date: Option<DateTimeWithTimeZone>,
    pub delete_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Aprendiz,
    Instructor,
    Process,
    Enterprise,
    TypeModality,
    State,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Aprendiz => Entity::belongs_to(super::aprendiz::Entity)
                .from(Column::AprendizId)
                .to(super::aprendiz::Column::Id)
                .into(),
            Relation::Instructor => Entity::belongs_to(super::instructor::Entity)
                .from(Column::InstructorId)
                .to(super::instructor::Column::Id)
                .into(),
            Relation::Process => Entity::belongs_to(super::process::Entity)
                .from(Column::ProcessId)
                .to(super::process::Column::Id)
                .into(),
            Relation::Enterprise => Entity::belongs_to(super::enterprise::Entity)
                .from(Column::EnterpriseId)
                .to(super::enterprise::Column::Id)
                .into(),
            Relation::TypeModality => Entity::belongs_to(super::type_modality::Entity)
                .from(Column::TypeModalityId)
                .to(super::type_modality::Column::Id)
                .into(),
            Relation::State => Entity::belongs_to(super::state::Entity)
                .from(Column::StateId)
                .to(super::state::Column::Id)
                .into(),
        }
    }
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef { Relation::Aprendiz.def() }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Instructor.def() }
}

impl Related<super::process::Entity> for Entity {
    fn to() -> RelationDef { Relation::Process.def() }
}

impl Related<super::enterprise::Entity> for Entity {
    fn to() -> RelationDef { Relation::Enterprise.def() }
}

impl Related<super::type_modality::Entity> for Entity {
    fn to() -> RelationDef { Relation::TypeModality.def() }
}

impl Related<super::state::Entity> for Entity {
    fn to() -> RelationDef { Relation::State.def() }
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_lifecycle!(Model);
