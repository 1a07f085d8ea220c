//! Member repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, TryIntoModel,
};

use crate::entities::{member, team};
use crate::pagination::{fetch_page, fetch_slice, Page, PageRequest, Slice};
use crate::projections::MemberDto;
use crate::query::MemberQuery;

use super::ReadOnly;

/// Repository for member-related database operations.
pub struct MemberRepository;

impl MemberRepository {
    /// Insert the row when its key is unset, update it otherwise; either way
    /// the returned model carries the database-assigned id.
    pub async fn save<C>(conn: &C, member: member::ActiveModel) -> Result<member::Model>
    where
        C: ConnectionTrait,
    {
        Ok(member.save(conn).await?.try_into_model()?)
    }

    /// Get a single member by id.
    pub async fn find_by_id<C>(conn: &C, id: i64) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all members in storage order.
    pub async fn find_all<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find().all(conn).await?)
    }

    /// Count all members.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find().count(conn).await?)
    }

    /// Update an existing member.
    pub async fn update<C>(conn: &C, member: member::ActiveModel) -> Result<member::Model>
    where
        C: ConnectionTrait,
    {
        Ok(member.update(conn).await?)
    }

    /// Delete a member.
    pub async fn delete<C>(conn: &C, member: member::Model) -> Result<()>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ModelTrait;
        member.delete(conn).await?;
        Ok(())
    }

    /// Members with the given username.
    pub async fn find_by_username<C>(conn: &C, username: &str) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(MemberQuery::new().username(username).select().all(conn).await?)
    }

    /// Single member with the given username, if any.
    pub async fn find_one_by_username<C>(conn: &C, username: &str) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(MemberQuery::new().username(username).select().one(conn).await?)
    }

    /// Members with the given username whose age is strictly above `min_age`.
    pub async fn find_by_username_older_than<C>(
        conn: &C,
        username: &str,
        min_age: i32,
    ) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(MemberQuery::new()
            .username(username)
            .age_greater_than(min_age)
            .select()
            .all(conn)
            .await?)
    }

    /// Members whose username appears in `names`.
    pub async fn find_by_usernames<C, I, S>(conn: &C, names: I) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(MemberQuery::new().username_in(names).select().all(conn).await?)
    }

    /// The first `n` members in storage order.
    pub async fn find_top<C>(conn: &C, n: u64) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(MemberQuery::new().limit(n).select().all(conn).await?)
    }

    /// Members matching both username and age exactly.
    pub async fn find_by_username_and_age<C>(
        conn: &C,
        username: &str,
        age: i32,
    ) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(MemberQuery::new()
            .username(username)
            .age(age)
            .select()
            .all(conn)
            .await?)
    }

    /// Every stored username, in storage order.
    pub async fn find_all_usernames<C>(conn: &C) -> Result<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .select_only()
            .column(member::Column::Username)
            .into_tuple()
            .all(conn)
            .await?)
    }

    /// Project every member that belongs to a team, joined with its team name.
    pub async fn find_member_dtos<C>(conn: &C) -> Result<Vec<MemberDto>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .select_only()
            .column(member::Column::Id)
            .column(member::Column::Username)
            .column_as(team::Column::Name, "team_name")
            .join(JoinType::InnerJoin, member::Relation::Team.def())
            .into_model::<MemberDto>()
            .all(conn)
            .await?)
    }

    /// One page of members with the given age, with total-count metadata.
    pub async fn find_by_age_paged<C>(
        conn: &C,
        age: i32,
        request: &PageRequest<member::Column>,
    ) -> Result<Page<member::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(conn, MemberQuery::new().age(age).select(), request).await
    }

    /// One slice of members with the given age; `has_next` comes from a
    /// lookahead row and no total is computed.
    pub async fn find_by_age_sliced<C>(
        conn: &C,
        age: i32,
        request: &PageRequest<member::Column>,
    ) -> Result<Slice<member::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_slice(conn, MemberQuery::new().age(age).select(), request).await
    }

    /// Add one year to every member at or above `min_age` in a single UPDATE,
    /// without materializing the rows. Models fetched earlier are plain
    /// copies and go stale; re-fetch anything kept around.
    pub async fn bulk_increment_age<C>(conn: &C, min_age: i32) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = member::Entity::update_many()
            .col_expr(member::Column::Age, Expr::col(member::Column::Age).add(1))
            .filter(member::Column::Age.gte(min_age))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Fetch holding an exclusive row lock until the surrounding transaction
    /// ends. SQLite serializes writers per transaction instead of locking
    /// rows; engines with `FOR UPDATE` get the clause emitted.
    pub async fn find_by_username_for_update<C>(
        conn: &C,
        username: &str,
    ) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::Username.eq(username))
            .lock_exclusive()
            .one(conn)
            .await?)
    }

    /// Fetch for display only: the row comes back behind [`ReadOnly`], which
    /// has no path back to an `ActiveModel`.
    pub async fn find_read_only_by_username<C>(
        conn: &C,
        username: &str,
    ) -> Result<Option<ReadOnly<member::Model>>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::Username.eq(username))
            .one(conn)
            .await?
            .map(ReadOnly::new))
    }

    /// Load the team a member belongs to, if any.
    pub async fn load_team<C>(conn: &C, member: &member::Model) -> Result<Option<team::Model>>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ModelTrait;
        Ok(member.find_related(team::Entity).one(conn).await?)
    }

    /// All members paired with their team in one query, avoiding a per-row
    /// team load.
    pub async fn find_all_with_team<C>(
        conn: &C,
    ) -> Result<Vec<(member::Model, Option<team::Model>)>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .find_also_related(team::Entity)
            .all(conn)
            .await?)
    }
}
