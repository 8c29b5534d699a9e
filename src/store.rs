//! Record store seam and the SQLite-backed implementation.

use crate::error::Result;
use crate::model::Model;
use crate::query::{Filter, FilterValue, build_order_by, build_where};
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use std::marker::PhantomData;
use tracing::debug;

/// Read access to a persisted collection of `T`, one page at a time.
///
/// This is the only operation [`paginate`](crate::paginate::paginate)
/// depends on, so alternative backends only need to supply filtered,
/// ordered, offset-limited reads.
#[async_trait]
pub trait RecordStore<T> {
	/// Fetch up to `limit` records matching `filters`, ordered by
	/// `order_by`, starting at `offset`.
	async fn fetch_page(
		&self,
		filters: &[Filter],
		order_by: &[String],
		limit: usize,
		offset: usize,
	) -> Result<Vec<T>>;
}

/// A [`RecordStore`] over an `sqlx` SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore<T> {
	pool: SqlitePool,
	_marker: PhantomData<fn() -> T>,
}

impl<T> SqliteStore<T>
where
	T: Model + Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>,
{
	/// Create a store over an existing connection pool.
	pub fn new(pool: SqlitePool) -> Self {
		Self {
			pool,
			_marker: PhantomData,
		}
	}

	/// The underlying connection pool.
	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}

	/// Count records matching `filters`.
	pub async fn count(&self, filters: &[Filter]) -> Result<u64> {
		let (where_sql, binds) = build_where::<T>(filters)?;
		let sql = format!("SELECT COUNT(*) FROM {}{}", T::table_name(), where_sql);
		debug!(sql = %sql, "counting records");

		let mut query = sqlx::query_scalar::<_, i64>(&sql);
		for value in &binds {
			query = match value {
				FilterValue::Text(s) => query.bind(s.clone()),
				FilterValue::Int(i) => query.bind(*i),
				FilterValue::Bool(b) => query.bind(*b),
			};
		}
		let count = query.fetch_one(&self.pool).await?;
		Ok(count as u64)
	}

	/// Delete all records matching `filters`, returning how many were
	/// removed. An empty filter list deletes every record in the table.
	pub async fn delete_matching(&self, filters: &[Filter]) -> Result<u64> {
		let (where_sql, binds) = build_where::<T>(filters)?;
		let sql = format!("DELETE FROM {}{}", T::table_name(), where_sql);
		debug!(sql = %sql, "deleting records");

		let mut query = sqlx::query(&sql);
		for value in &binds {
			query = match value {
				FilterValue::Text(s) => query.bind(s.clone()),
				FilterValue::Int(i) => query.bind(*i),
				FilterValue::Bool(b) => query.bind(*b),
			};
		}
		let result = query.execute(&self.pool).await?;
		Ok(result.rows_affected())
	}
}

#[async_trait]
impl<T> RecordStore<T> for SqliteStore<T>
where
	T: Model + Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>,
{
	async fn fetch_page(
		&self,
		filters: &[Filter],
		order_by: &[String],
		limit: usize,
		offset: usize,
	) -> Result<Vec<T>> {
		let (where_sql, binds) = build_where::<T>(filters)?;
		let order_sql = build_order_by::<T>(order_by)?;
		let sql = format!(
			"SELECT {} FROM {}{}{} LIMIT ? OFFSET ?",
			T::columns().join(", "),
			T::table_name(),
			where_sql,
			order_sql,
		);
		debug!(sql = %sql, limit, offset, "fetching page");

		let mut query = sqlx::query_as::<_, T>(&sql);
		for value in &binds {
			query = match value {
				FilterValue::Text(s) => query.bind(s.clone()),
				FilterValue::Int(i) => query.bind(*i),
				FilterValue::Bool(b) => query.bind(*b),
			};
		}
		let rows = query
			.bind(limit as i64)
			.bind(offset as i64)
			.fetch_all(&self.pool)
			.await?;
		Ok(rows)
	}
}
