//! Repository layer for database operations.
//!
//! Repository structs encapsulate the queries for one entity each, following
//! the Data Mapper pattern recommended by SeaORM: entities stay pure data
//! models, repositories provide the reusable access methods. Every method is
//! generic over [`sea_orm::ConnectionTrait`], so the same call works on the
//! live connection or inside a transaction.

pub mod member;
pub mod member_raw;
pub mod team;

pub use member::MemberRepository;
pub use member_raw::MemberRawQueries;
pub use team::TeamRepository;

use std::ops::Deref;

/// A row fetched for display only.
///
/// The inner model is reachable by reference, never by value, so there is no
/// way to stage it back into an `ActiveModel`: accidental write-back is ruled
/// out at the type level. Callers that really need a mutable copy must clone
/// the inner model explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnly<M>(M);

impl<M> ReadOnly<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self(inner)
    }

    pub fn get(&self) -> &M {
        &self.0
    }
}

impl<M> Deref for ReadOnly<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.0
    }
}

impl<M> AsRef<M> for ReadOnly<M> {
    fn as_ref(&self) -> &M {
        &self.0
    }
}
