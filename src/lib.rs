//! Offset-based pagination over filtered record stores.
//!
//! This crate walks a database table in fixed-size pages and hands each page
//! to a callback until the result set is exhausted. It is built around three
//! pieces:
//!
//! - [`PageQuery`]: a query descriptor (filters, ordering, page size)
//! - [`RecordStore`]: the seam to the persistence layer, with an
//!   [`SqliteStore`] implementation over `sqlx`
//! - [`paginate`]: the loop that re-issues filtered/ordered/offset queries
//!   and stops once a short page is observed
//!
//! A [`BillingScheduleFactory`](factory::BillingScheduleFactory) is included
//! for seeding test data with default-plus-override semantics.
//!
//! # Example
//!
//! ```ignore
//! use billing_pagination::prelude::*;
//!
//! let store: SqliteStore<BillingSchedule> = SqliteStore::new(pool);
//! let query = PageQuery::new(100)
//!     .filter(Filter::new("active", FilterOperator::Eq, FilterValue::Bool(true)))
//!     .order_by("shop");
//!
//! paginate(&store, &query, |page| {
//!     for schedule in &page {
//!         println!("{}", schedule.shop);
//!     }
//! })
//! .await?;
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod model;
pub mod paginate;
pub mod query;
pub mod store;

pub use error::{Error, Result};
pub use model::{BillingSchedule, Model};
pub use paginate::{PageQuery, paginate};
pub use query::{Filter, FilterOperator, FilterValue};
pub use store::{RecordStore, SqliteStore};

/// Convenience re-exports for consumers of this crate.
pub mod prelude {
	pub use crate::error::{Error, Result};
	pub use crate::factory::BillingScheduleFactory;
	pub use crate::model::{BillingSchedule, Model};
	pub use crate::paginate::{PageQuery, paginate};
	pub use crate::query::{Filter, FilterOperator, FilterValue};
	pub use crate::store::{RecordStore, SqliteStore};
}
