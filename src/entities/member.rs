use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    /// Non-negative by convention; the column itself is unconstrained.
    pub age: i32,
    pub team_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_delete = "SetNull"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Fresh row with no team; the id is assigned by the database on insert.
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(username.into()),
            age: ActiveValue::Set(age),
            team_id: ActiveValue::NotSet,
        }
    }

    /// Fresh row already assigned to a team.
    pub fn in_team(username: impl Into<String>, age: i32, team_id: i64) -> Self {
        Self {
            team_id: ActiveValue::Set(Some(team_id)),
            ..Self::new(username, age)
        }
    }
}
