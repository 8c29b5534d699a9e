//! Filter and ordering types, and the SQL fragments compiled from them.
//!
//! Filters combine with AND. Ordering uses Django-style field lists where a
//! leading `-` sorts descending (`"shop"` ascending, `"-hour"` descending).
//! Every referenced field is validated against [`Model::columns`] before any
//! SQL is assembled; values are always passed as bind parameters.

use crate::error::{Error, Result};
use crate::model::Model;
use serde::{Deserialize, Serialize};

/// Comparison operators usable in a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
	/// Equal (`=`)
	Eq,
	/// Not equal (`<>`)
	Ne,
	/// Greater than (`>`)
	Gt,
	/// Greater than or equal (`>=`)
	Gte,
	/// Less than (`<`)
	Lt,
	/// Less than or equal (`<=`)
	Lte,
	/// String prefix match (`LIKE 'value%'`)
	StartsWith,
	/// String suffix match (`LIKE '%value'`)
	EndsWith,
	/// Substring match (`LIKE '%value%'`)
	Contains,
}

/// A value bound into a filter comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
	/// Text value
	Text(String),
	/// Integer value
	Int(i64),
	/// Boolean value
	Bool(bool),
}

impl FilterValue {
	/// Textual rendering used when the operator needs a LIKE pattern.
	fn pattern_text(&self) -> String {
		match self {
			Self::Text(s) => s.clone(),
			Self::Int(i) => i.to_string(),
			Self::Bool(b) => b.to_string(),
		}
	}
}

/// A single field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
	/// Column to compare.
	pub field: String,
	/// Comparison operator.
	pub operator: FilterOperator,
	/// Value to compare against.
	pub value: FilterValue,
}

impl Filter {
	/// Create a new filter.
	///
	/// # Examples
	///
	/// ```
	/// use billing_pagination::{Filter, FilterOperator, FilterValue};
	///
	/// let filter = Filter::new("active", FilterOperator::Eq, FilterValue::Bool(true));
	/// assert_eq!(filter.field, "active");
	/// ```
	pub fn new(field: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
		Self {
			field: field.into(),
			operator,
			value,
		}
	}
}

/// Escape LIKE metacharacters so user values match literally.
fn escape_like(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		if matches!(c, '\\' | '%' | '_') {
			out.push('\\');
		}
		out.push(c);
	}
	out
}

/// Compile filters into a `WHERE` fragment plus bind values.
///
/// Returns an empty fragment when there are no filters. The fragment starts
/// with a leading space so it can be appended directly after the table name.
pub(crate) fn build_where<M: Model>(filters: &[Filter]) -> Result<(String, Vec<FilterValue>)> {
	if filters.is_empty() {
		return Ok((String::new(), Vec::new()));
	}

	let mut clauses = Vec::with_capacity(filters.len());
	let mut binds = Vec::with_capacity(filters.len());
	for filter in filters {
		if !M::has_column(&filter.field) {
			return Err(Error::UnknownField(filter.field.clone()));
		}
		match filter.operator {
			FilterOperator::Eq => clauses.push(format!("{} = ?", filter.field)),
			FilterOperator::Ne => clauses.push(format!("{} <> ?", filter.field)),
			FilterOperator::Gt => clauses.push(format!("{} > ?", filter.field)),
			FilterOperator::Gte => clauses.push(format!("{} >= ?", filter.field)),
			FilterOperator::Lt => clauses.push(format!("{} < ?", filter.field)),
			FilterOperator::Lte => clauses.push(format!("{} <= ?", filter.field)),
			FilterOperator::StartsWith | FilterOperator::EndsWith | FilterOperator::Contains => {
				clauses.push(format!("{} LIKE ? ESCAPE '\\'", filter.field));
			}
		}
		let bind = match filter.operator {
			FilterOperator::StartsWith => {
				FilterValue::Text(format!("{}%", escape_like(&filter.value.pattern_text())))
			}
			FilterOperator::EndsWith => {
				FilterValue::Text(format!("%{}", escape_like(&filter.value.pattern_text())))
			}
			FilterOperator::Contains => {
				FilterValue::Text(format!("%{}%", escape_like(&filter.value.pattern_text())))
			}
			_ => filter.value.clone(),
		};
		binds.push(bind);
	}

	Ok((format!(" WHERE {}", clauses.join(" AND ")), binds))
}

/// Compile order-by fields into an `ORDER BY` fragment.
///
/// A leading `-` on a field sorts descending. Returns an empty fragment when
/// no ordering is requested.
pub(crate) fn build_order_by<M: Model>(order_by: &[String]) -> Result<String> {
	if order_by.is_empty() {
		return Ok(String::new());
	}

	let mut terms = Vec::with_capacity(order_by.len());
	for field in order_by {
		let (name, direction) = match field.strip_prefix('-') {
			Some(name) => (name, "DESC"),
			None => (field.as_str(), "ASC"),
		};
		if !M::has_column(name) {
			return Err(Error::UnknownField(name.to_string()));
		}
		terms.push(format!("{name} {direction}"));
	}

	Ok(format!(" ORDER BY {}", terms.join(", ")))
}
