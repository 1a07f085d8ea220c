//! Hand-written SQL queries composed onto the member repository.
//!
//! Generated-style finders and raw statements meet on one type: with the
//! trait in scope, `MemberRepository::find_all_raw` sits next to the
//! builder-backed methods.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

use crate::entities::member;

use super::MemberRepository;

/// Escape hatch for queries written as literal SQL.
#[async_trait]
pub trait MemberRawQueries {
    /// All members via a hand-written statement, in id order.
    async fn find_all_raw<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait;
}

#[async_trait]
impl MemberRawQueries for MemberRepository {
    async fn find_all_raw<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        let statement = Statement::from_string(
            conn.get_database_backend(),
            "SELECT id, username, age, team_id FROM members ORDER BY id".to_owned(),
        );
        Ok(member::Model::find_by_statement(statement).all(conn).await?)
    }
}
