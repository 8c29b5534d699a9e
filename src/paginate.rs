//! The pagination loop and its query descriptor.

use crate::error::{Error, Result};
use crate::query::Filter;
use crate::store::RecordStore;
use tracing::debug;

/// Describes one paginated walk over a record store: which records to match,
/// how to order them, and how many to fetch per page.
///
/// # Examples
///
/// ```
/// use billing_pagination::{Filter, FilterOperator, FilterValue, PageQuery};
///
/// let query = PageQuery::new(50)
///     .filter(Filter::new("active", FilterOperator::Eq, FilterValue::Bool(true)))
///     .order_by("shop");
/// assert_eq!(query.page_size(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct PageQuery {
	filters: Vec<Filter>,
	order_by: Vec<String>,
	page_size: usize,
}

impl PageQuery {
	/// Create a query that fetches `page_size` records per page.
	pub fn new(page_size: usize) -> Self {
		Self {
			filters: Vec::new(),
			order_by: Vec::new(),
			page_size,
		}
	}

	/// Add a filter. Filters combine with AND.
	pub fn filter(mut self, filter: Filter) -> Self {
		self.filters.push(filter);
		self
	}

	/// Add an ordering field. Prefix with `-` for descending.
	pub fn order_by(mut self, field: impl Into<String>) -> Self {
		self.order_by.push(field.into());
		self
	}

	/// The configured page size.
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// The configured filters.
	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	/// The configured ordering fields.
	pub fn order_by_fields(&self) -> &[String] {
		&self.order_by
	}
}

/// Walk `store` in pages of `query.page_size()` records, invoking `on_page`
/// with each non-empty page until the result set is exhausted.
///
/// Starting at offset 0, each iteration fetches up to one page of matching
/// records, delivers it to `on_page` if non-empty, and advances the offset by
/// the number of records fetched. Iteration stops as soon as a page comes
/// back strictly shorter than the requested size, so the callback runs
/// `ceil(k / p)` times for `k` matching records and never sees an empty page.
/// Pages are fetched strictly sequentially: the next query is not issued
/// until `on_page` has returned.
///
/// A failed query propagates immediately and halts pagination; `on_page` is
/// not invoked for the failed page. A page size of zero is rejected with
/// [`Error::InvalidPageSize`] before any query runs.
///
/// Records are delivered exactly once provided the ordering is stable across
/// queries; order by a unique column (such as the primary key) when that
/// matters, since the store is re-queried for every page.
pub async fn paginate<T, S, F>(store: &S, query: &PageQuery, mut on_page: F) -> Result<()>
where
	S: RecordStore<T>,
	F: FnMut(Vec<T>),
{
	let page_size = query.page_size();
	if page_size == 0 {
		return Err(Error::InvalidPageSize(page_size));
	}

	let mut offset = 0;
	loop {
		let page = store
			.fetch_page(query.filters(), query.order_by_fields(), page_size, offset)
			.await?;
		let fetched = page.len();
		debug!(offset, fetched, "fetched page");

		if fetched > 0 {
			on_page(page);
		}
		offset += fetched;
		if fetched < page_size {
			return Ok(());
		}
	}
}
