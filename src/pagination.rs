//! Bounded result windows over entity selects.
//!
//! A [`PageRequest`] names a zero-based window plus an optional typed [`Sort`]
//! applied before windowing. [`fetch_page`] runs one COUNT and one windowed
//! fetch and returns a [`Page`] with total-count metadata; [`fetch_slice`]
//! skips the COUNT and reads one row beyond the window instead, so a
//! [`Slice`] knows whether more data exists but not how much.

use anyhow::Result;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryOrder,
    QuerySelect, Select,
};
use serde::Serialize;

/// Typed ordering specification: column/direction terms in precedence order.
#[derive(Debug, Clone)]
pub struct Sort<C> {
    terms: Vec<(C, Order)>,
}

impl<C: ColumnTrait> Sort<C> {
    /// Storage-defined order.
    pub fn none() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn asc(column: C) -> Self {
        Self::none().then_asc(column)
    }

    pub fn desc(column: C) -> Self {
        Self::none().then_desc(column)
    }

    pub fn then_asc(mut self, column: C) -> Self {
        self.terms.push((column, Order::Asc));
        self
    }

    pub fn then_desc(mut self, column: C) -> Self {
        self.terms.push((column, Order::Desc));
        self
    }

    pub fn is_sorted(&self) -> bool {
        !self.terms.is_empty()
    }
}

/// A request for one window of a result set.
#[derive(Debug, Clone)]
pub struct PageRequest<C> {
    page: u64,
    size: u64,
    sort: Sort<C>,
}

impl<C: ColumnTrait> PageRequest<C> {
    /// Window at `page` (zero-based) of `size` rows, storage order.
    ///
    /// A zero `size` is treated as one row per page.
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Sort::none(),
        }
    }

    /// Window with an explicit ordering applied before pagination.
    pub fn of_sorted(page: u64, size: u64, sort: Sort<C>) -> Self {
        Self {
            sort,
            ..Self::of(page, size)
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> &Sort<C> {
        &self.sort
    }

    fn apply_sort<E>(&self, mut select: Select<E>) -> Select<E>
    where
        E: EntityTrait<Column = C>,
    {
        for (column, order) in &self.sort.terms {
            select = select.order_by(*column, order.clone());
        }
        select
    }
}

/// A bounded result window with total-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    content: Vec<T>,
    number: u64,
    size: u64,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Assemble a page from already-windowed content.
    pub fn new(content: Vec<T>, number: u64, size: u64, total_elements: u64) -> Self {
        Self {
            content,
            number,
            size: size.max(1),
            total_elements,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based index of this window.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Requested rows per page; the last page may hold fewer.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert the content, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// A bounded result window without a total count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice<T> {
    content: Vec<T>,
    number: u64,
    size: u64,
    has_next: bool,
}

impl<T> Slice<T> {
    /// Assemble a slice from already-windowed content.
    pub fn new(content: Vec<T>, number: u64, size: u64, has_next: bool) -> Self {
        Self {
            content,
            number,
            size: size.max(1),
            has_next,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based index of this window.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Requested rows per page; the last slice may hold fewer.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert the content, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Slice<U> {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            has_next: self.has_next,
        }
    }
}

/// Run `select` as one COUNT plus one windowed fetch.
///
/// The select should carry filters only; ordering comes from the request and
/// the window is applied here.
pub async fn fetch_page<C, E>(
    conn: &C,
    select: Select<E>,
    request: &PageRequest<E::Column>,
) -> Result<Page<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    let select = request.apply_sort(select);
    let paginator = select.paginate(conn, request.size());
    let total_elements = paginator.num_items().await?;
    let content = paginator.fetch_page(request.page()).await?;
    Ok(Page::new(
        content,
        request.page(),
        request.size(),
        total_elements,
    ))
}

/// Run `select` windowed, reading one lookahead row instead of counting.
pub async fn fetch_slice<C, E>(
    conn: &C,
    select: Select<E>,
    request: &PageRequest<E::Column>,
) -> Result<Slice<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    let select = request.apply_sort(select);
    let mut rows = select
        .limit(request.size() + 1)
        .offset(request.page() * request.size())
        .all(conn)
        .await?;
    let has_next = rows.len() as u64 > request.size();
    rows.truncate(request.size() as usize);
    Ok(Slice::new(rows, request.page(), request.size(), has_next))
}
