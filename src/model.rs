//! Model metadata and the billing schedule entity.

use serde::{Deserialize, Serialize};

/// Table and column metadata for a persisted record type.
///
/// The query builders use [`columns`](Model::columns) to validate filter and
/// ordering fields before any SQL is assembled, so field names never reach
/// the database unchecked.
pub trait Model {
	/// Name of the table backing this model.
	fn table_name() -> &'static str;

	/// Column names in SELECT order.
	fn columns() -> &'static [&'static str];

	/// Whether `field` names a column of this model.
	fn has_column(field: &str) -> bool {
		Self::columns().contains(&field)
	}
}

/// A per-shop billing schedule: when (hour, timezone) a shop is billed and
/// whether billing is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BillingSchedule {
	/// Primary key, assigned by the store on insert.
	pub id: Option<i64>,
	/// Shop domain, unique per tenant.
	pub shop: String,
	/// Whether billing is active for this shop.
	pub active: bool,
	/// Local hour of day (0-23) at which billing runs.
	pub hour: i32,
	/// IANA timezone name the hour is interpreted in.
	pub timezone: String,
}

impl Model for BillingSchedule {
	fn table_name() -> &'static str {
		"billing_schedules"
	}

	fn columns() -> &'static [&'static str] {
		&["id", "shop", "active", "hour", "timezone"]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_has_column() {
		assert!(BillingSchedule::has_column("shop"));
		assert!(BillingSchedule::has_column("active"));
		assert!(!BillingSchedule::has_column("schedule"));
		assert!(!BillingSchedule::has_column(""));
	}

	#[rstest]
	fn test_table_name() {
		assert_eq!(BillingSchedule::table_name(), "billing_schedules");
	}
}
