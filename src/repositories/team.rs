//! Team repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, TryIntoModel};

use crate::entities::{member, team};

/// Repository for team-related database operations.
pub struct TeamRepository;

impl TeamRepository {
    /// Insert the row when its key is unset, update it otherwise; either way
    /// the returned model carries the database-assigned id.
    pub async fn save<C>(conn: &C, team: team::ActiveModel) -> Result<team::Model>
    where
        C: ConnectionTrait,
    {
        Ok(team.save(conn).await?.try_into_model()?)
    }

    /// Get a single team by id.
    pub async fn find_by_id<C>(conn: &C, id: i64) -> Result<Option<team::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all teams in storage order.
    pub async fn find_all<C>(conn: &C) -> Result<Vec<team::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find().all(conn).await?)
    }

    /// Count all teams.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find().count(conn).await?)
    }

    /// Update an existing team.
    pub async fn update<C>(conn: &C, team: team::ActiveModel) -> Result<team::Model>
    where
        C: ConnectionTrait,
    {
        Ok(team.update(conn).await?)
    }

    /// Delete a team; its members keep their rows with the reference cleared.
    pub async fn delete<C>(conn: &C, team: team::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ModelTrait;
        team.delete(conn).await?;
        Ok(())
    }

    /// Load the members of a team.
    pub async fn load_members<C>(conn: &C, team: &team::Model) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ModelTrait;
        Ok(team.find_related(member::Entity).all(conn).await?)
    }
}
