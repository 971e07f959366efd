//! Query-parameter filters attached to list and read operations.
//!
//! Filters accumulate optional parameters into an ordered mapping. Shape
//! validation stays client-side (page number and page size always travel
//! together); semantic validation of values remains the server's concern.
//! Resource-specific filters compose the shared [`BaseFilter`] instead of
//! subclassing it.

// self
use crate::_prelude::*;

/// Ordered query-parameter mapping with last-write-wins keys.
///
/// Setting an already-present key replaces its value in place, so the key keeps
/// its original position in the mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterMap(Vec<(Cow<'static, str>, String)>);
impl FilterMap {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a parameter, replacing the value in place when the key already exists.
	pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();

		if let Some(entry) = self.0.iter_mut().find(|(existing, _)| *existing == key) {
			entry.1 = value;
		} else {
			self.0.push((key, value));
		}
	}

	/// Returns the accumulated pairs in insertion order.
	pub fn as_pairs(&self) -> &[(Cow<'static, str>, String)] {
		&self.0
	}

	/// Returns true when no parameters have been set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of accumulated parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

/// Shared paging, totals, field-selection, and free-form parameters accepted by
/// most endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseFilter {
	params: FilterMap,
}
impl BaseFilter {
	/// Creates an empty filter producing no query parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Requests one result page; `page` and `per_page` always travel together.
	pub fn with_page(mut self, page_number: u32, amount_per_page: u32) -> Self {
		self.params.set("page", page_number.to_string());
		self.params.set("per_page", amount_per_page.to_string());

		self
	}

	/// Asks the server to wrap results in a totals envelope.
	pub fn with_totals(mut self, include_totals: bool) -> Self {
		self.params.set("include_totals", include_totals.to_string());

		self
	}

	/// Selects the fields to include in (or exclude from) the response.
	pub fn with_fields(mut self, fields: &str, include_fields: bool) -> Self {
		self.params.set("fields", fields);
		self.params.set("include_fields", include_fields.to_string());

		self
	}

	/// Adds a free-form criterion passed through verbatim as a query value.
	pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: &str) -> Self {
		self.params.set(key, value);

		self
	}

	/// Returns the accumulated pairs in insertion order.
	pub fn as_pairs(&self) -> &[(Cow<'static, str>, String)] {
		self.params.as_pairs()
	}

	/// Returns true when the filter produces no query parameters.
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

/// Filter for the client-grants collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientGrantsFilter {
	base: BaseFilter,
}
impl ClientGrantsFilter {
	/// Creates an empty filter producing no query parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Requests one result page; `page` and `per_page` always travel together.
	pub fn with_page(mut self, page_number: u32, amount_per_page: u32) -> Self {
		self.base = self.base.with_page(page_number, amount_per_page);

		self
	}

	/// Asks the server to wrap results in a totals envelope.
	pub fn with_totals(mut self, include_totals: bool) -> Self {
		self.base = self.base.with_totals(include_totals);

		self
	}

	/// Restricts results to grants targeting the given API audience.
	pub fn with_audience(mut self, audience: &str) -> Self {
		self.base = self.base.with_param("audience", audience);

		self
	}

	/// Restricts results to grants belonging to the given client.
	pub fn with_client_id(mut self, client_id: &str) -> Self {
		self.base = self.base.with_param("client_id", client_id);

		self
	}

	/// Returns the accumulated pairs in insertion order.
	pub fn as_pairs(&self) -> &[(Cow<'static, str>, String)] {
		self.base.as_pairs()
	}

	/// Returns true when the filter produces no query parameters.
	pub fn is_empty(&self) -> bool {
		self.base.is_empty()
	}
}

/// Filter narrowing the fields returned for single-object reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldsFilter {
	base: BaseFilter,
}
impl FieldsFilter {
	/// Creates an empty filter producing no query parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Selects the fields to include in (or exclude from) the response.
	pub fn with_fields(mut self, fields: &str, include_fields: bool) -> Self {
		self.base = self.base.with_fields(fields, include_fields);

		self
	}

	/// Returns the accumulated pairs in insertion order.
	pub fn as_pairs(&self) -> &[(Cow<'static, str>, String)] {
		self.base.as_pairs()
	}

	/// Returns true when the filter produces no query parameters.
	pub fn is_empty(&self) -> bool {
		self.base.is_empty()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn pairs(filter: &ClientGrantsFilter) -> Vec<(&str, &str)> {
		filter.as_pairs().iter().map(|(key, value)| (key.as_ref(), value.as_str())).collect()
	}

	#[test]
	fn empty_filter_yields_no_parameters() {
		assert!(ClientGrantsFilter::new().is_empty());
		assert!(ClientGrantsFilter::new().as_pairs().is_empty());
	}

	#[test]
	fn page_sets_both_page_and_per_page() {
		let filter = ClientGrantsFilter::new().with_page(23, 5);

		assert_eq!(pairs(&filter), vec![("page", "23"), ("per_page", "5")]);
	}

	#[test]
	fn totals_set_include_totals() {
		let filter = ClientGrantsFilter::new().with_totals(true);

		assert_eq!(pairs(&filter), vec![("include_totals", "true")]);
	}

	#[test]
	fn resource_parameters_pass_through_verbatim() {
		let filter = ClientGrantsFilter::new()
			.with_audience("https://myapi.example.com")
			.with_client_id("u9e3hh3e9j2fj9092ked");

		assert_eq!(
			pairs(&filter),
			vec![("audience", "https://myapi.example.com"), ("client_id", "u9e3hh3e9j2fj9092ked")],
		);
	}

	#[test]
	fn repeated_keys_keep_position_and_take_last_value() {
		let filter = ClientGrantsFilter::new().with_page(1, 10).with_totals(false).with_page(2, 10);

		assert_eq!(
			pairs(&filter),
			vec![("page", "2"), ("per_page", "10"), ("include_totals", "false")],
		);
	}

	#[test]
	fn fields_filter_sets_selection_pair() {
		let filter = FieldsFilter::new().with_fields("friendly_name,support_email", true);
		let pairs: Vec<_> =
			filter.as_pairs().iter().map(|(key, value)| (key.as_ref(), value.as_str())).collect();

		assert_eq!(
			pairs,
			vec![("fields", "friendly_name,support_email"), ("include_fields", "true")],
		);
	}
}
