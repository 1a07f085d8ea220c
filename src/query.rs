//! Declarative member queries.
//!
//! Finder methods on the member repository cover the common lookups; anything
//! more specific is expressed as a [`MemberQuery`]: predicates accumulate in
//! call order and are AND-combined, ordering and a row cap are optional, and
//! the whole specification lowers to a SeaORM select.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::entities::member;

/// Declarative query specification for member rows.
#[derive(Debug, Clone, Default)]
pub struct MemberQuery {
    predicates: Vec<SimpleExpr>,
    order: Vec<(member::Column, Order)>,
    limit: Option<u64>,
}

impl MemberQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equality match on the username.
    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.predicates.push(member::Column::Username.eq(value.into()));
        self
    }

    /// Membership match against a set of usernames.
    pub fn username_in<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates
            .push(member::Column::Username.is_in(values.into_iter().map(Into::into)));
        self
    }

    /// Equality match on the age.
    pub fn age(mut self, value: i32) -> Self {
        self.predicates.push(member::Column::Age.eq(value));
        self
    }

    /// Strictly-greater-than match on the age.
    pub fn age_greater_than(mut self, value: i32) -> Self {
        self.predicates.push(member::Column::Age.gt(value));
        self
    }

    /// Append an ordering term; earlier terms take precedence.
    pub fn order_by(mut self, column: member::Column, order: Order) -> Self {
        self.order.push((column, order));
        self
    }

    /// Cap the result at `n` rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Lower the specification into an executable select.
    pub fn select(self) -> Select<member::Entity> {
        let mut select = member::Entity::find();
        for predicate in self.predicates {
            select = select.filter(predicate);
        }
        for (column, order) in self.order {
            select = select.order_by(column, order);
        }
        if let Some(n) = self.limit {
            select = select.limit(n);
        }
        select
    }
}
