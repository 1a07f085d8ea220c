//! Read-only projections over member rows.

use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::entities::member;

/// Flat read-only shape for query output: the member's identity plus the
/// name of the team it belongs to.
///
/// Built either directly by a joined select (`FromQueryResult`) or by mapping
/// an already-fetched member, in which case no team is attached.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct MemberDto {
    pub id: i64,
    pub username: String,
    pub team_name: Option<String>,
}

impl From<member::Model> for MemberDto {
    fn from(model: member::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            team_name: None,
        }
    }
}

impl From<&member::Model> for MemberDto {
    fn from(model: &member::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            team_name: None,
        }
    }
}
