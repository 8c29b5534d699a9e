//! Test-data factory for billing schedule records.
//!
//! Factory-Boy style: sensible defaults merged with caller overrides, a
//! process-wide sequence for unique shop domains, and `build` / `create` /
//! `create_batch` entry points.

use crate::error::Result;
use crate::model::{BillingSchedule, Model};
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicU64, Ordering};

static SHOP_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Builds [`BillingSchedule`] records with default fields, overridable per
/// call site.
///
/// Defaults: `active = true`, `hour = 10`, `timezone = "America/Toronto"`,
/// and a sequence-generated `shop` domain when none is supplied.
///
/// # Examples
///
/// ```
/// use billing_pagination::factory::BillingScheduleFactory;
///
/// let schedule = BillingScheduleFactory::new()
///     .shop("acme.example.com")
///     .active(false)
///     .build();
/// assert_eq!(schedule.hour, 10);
/// assert_eq!(schedule.timezone, "America/Toronto");
/// assert!(!schedule.active);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BillingScheduleFactory {
	shop: Option<String>,
	active: Option<bool>,
	hour: Option<i32>,
	timezone: Option<String>,
}

impl BillingScheduleFactory {
	/// Create a factory with all defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Override the shop domain.
	pub fn shop(mut self, shop: impl Into<String>) -> Self {
		self.shop = Some(shop.into());
		self
	}

	/// Override the active flag.
	pub fn active(mut self, active: bool) -> Self {
		self.active = Some(active);
		self
	}

	/// Override the billing hour.
	pub fn hour(mut self, hour: i32) -> Self {
		self.hour = Some(hour);
		self
	}

	/// Override the timezone.
	pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
		self.timezone = Some(timezone.into());
		self
	}

	/// Build an in-memory record without persisting it.
	///
	/// Each call without a shop override draws a fresh domain from the
	/// sequence, so repeated builds stay unique.
	pub fn build(&self) -> BillingSchedule {
		let shop = self.shop.clone().unwrap_or_else(|| {
			let n = SHOP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
			format!("shop-{n}.example.com")
		});
		BillingSchedule {
			id: None,
			shop,
			active: self.active.unwrap_or(true),
			hour: self.hour.unwrap_or(10),
			timezone: self
				.timezone
				.clone()
				.unwrap_or_else(|| "America/Toronto".to_string()),
		}
	}

	/// Build a record and persist it, returning the stored row with its
	/// assigned id.
	pub async fn create(&self, pool: &SqlitePool) -> Result<BillingSchedule> {
		let mut record = self.build();
		let sql = format!(
			"INSERT INTO {} (shop, active, hour, timezone) VALUES (?, ?, ?, ?)",
			BillingSchedule::table_name()
		);
		let result = sqlx::query(&sql)
			.bind(&record.shop)
			.bind(record.active)
			.bind(record.hour)
			.bind(&record.timezone)
			.execute(pool)
			.await?;
		record.id = Some(result.last_insert_rowid());
		Ok(record)
	}

	/// Persist `count` records, each with a fresh sequence-generated shop
	/// (unless one was overridden, which will trip the unique constraint
	/// after the first insert).
	pub async fn create_batch(&self, pool: &SqlitePool, count: usize) -> Result<Vec<BillingSchedule>> {
		let mut records = Vec::with_capacity(count);
		for _ in 0..count {
			records.push(self.create(pool).await?);
		}
		Ok(records)
	}
}
