//! Tenant settings bag and hosted-page customizations.

// std
use std::collections::BTreeMap;
// self
use crate::_prelude::*;

/// Customization for one hosted page (change password, guardian MFA, error).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCustomization {
	/// Whether the customized page is enabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,
	/// Replacement HTML served for the page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html: Option<String>,
	/// Whether the page shows a link to the tenant log.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_log_link: Option<bool>,
	/// URL the page redirects to instead of rendering HTML.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}
impl PageCustomization {
	/// Creates an empty customization.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the enabled flag.
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = Some(enabled);

		self
	}

	/// Sets the replacement HTML.
	pub fn with_html(mut self, html: impl Into<String>) -> Self {
		self.html = Some(html.into());

		self
	}

	/// Sets the show-log-link flag.
	pub fn with_show_log_link(mut self, show_log_link: bool) -> Self {
		self.show_log_link = Some(show_log_link);

		self
	}

	/// Sets the redirect URL.
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());

		self
	}
}

/// Tenant-wide settings bag.
///
/// Every field is optional; `None` means "leave unchanged" on update and "not
/// returned" on reads narrowed by a fields filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
	/// Change-password page customization.
	#[serde(rename = "change_password", skip_serializing_if = "Option::is_none")]
	pub change_password_page: Option<PageCustomization>,
	/// Guardian multi-factor page customization.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub guardian_mfa_page: Option<PageCustomization>,
	/// Audience used when authorization requests carry none.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_audience: Option<String>,
	/// Connection used when authentication requests name none.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_directory: Option<String>,
	/// Error page customization.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_page: Option<PageCustomization>,
	/// Feature flags keyed by name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub flags: Option<BTreeMap<String, bool>>,
	/// Human-friendly tenant name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub friendly_name: Option<String>,
	/// Logo URL shown on hosted pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<String>,
	/// Support email surfaced to end users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub support_email: Option<String>,
	/// Support URL surfaced to end users.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub support_url: Option<String>,
	/// URLs the tenant allows redirecting to after logout, order preserved.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allowed_logout_urls: Option<Vec<String>>,
}
impl Tenant {
	/// Creates an empty settings bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the change-password page customization.
	pub fn with_change_password_page(mut self, page: PageCustomization) -> Self {
		self.change_password_page = Some(page);

		self
	}

	/// Sets the guardian multi-factor page customization.
	pub fn with_guardian_mfa_page(mut self, page: PageCustomization) -> Self {
		self.guardian_mfa_page = Some(page);

		self
	}

	/// Sets the default audience.
	pub fn with_default_audience(mut self, audience: impl Into<String>) -> Self {
		self.default_audience = Some(audience.into());

		self
	}

	/// Sets the default directory.
	pub fn with_default_directory(mut self, directory: impl Into<String>) -> Self {
		self.default_directory = Some(directory.into());

		self
	}

	/// Sets the error page customization.
	pub fn with_error_page(mut self, page: PageCustomization) -> Self {
		self.error_page = Some(page);

		self
	}

	/// Sets the feature flags map.
	pub fn with_flags(mut self, flags: BTreeMap<String, bool>) -> Self {
		self.flags = Some(flags);

		self
	}

	/// Sets the friendly name.
	pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
		self.friendly_name = Some(name.into());

		self
	}

	/// Sets the picture URL.
	pub fn with_picture_url(mut self, url: impl Into<String>) -> Self {
		self.picture_url = Some(url.into());

		self
	}

	/// Sets the support email.
	pub fn with_support_email(mut self, email: impl Into<String>) -> Self {
		self.support_email = Some(email.into());

		self
	}

	/// Sets the support URL.
	pub fn with_support_url(mut self, url: impl Into<String>) -> Self {
		self.support_url = Some(url.into());

		self
	}

	/// Sets the allowed logout URLs, order preserved.
	pub fn with_allowed_logout_urls<I, S>(mut self, urls: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.allowed_logout_urls = Some(urls.into_iter().map(Into::into).collect());

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const TENANT_JSON: &str = r#"{"change_password":{},"guardian_mfa_page":{},"default_audience":"https://domain.example.com/myapi","default_directory":"Username-Password-Authentication","error_page":{},"flags":{},"friendly_name":"My-Tenant","picture_url":"https://pic.to/123","support_email":"support@example.com","support_url":"https://support.example.com","allowed_logout_urls":["https://domain.example.com/logout"]}"#;

	fn full_tenant() -> Tenant {
		Tenant::new()
			.with_change_password_page(PageCustomization::new())
			.with_guardian_mfa_page(PageCustomization::new())
			.with_default_audience("https://domain.example.com/myapi")
			.with_default_directory("Username-Password-Authentication")
			.with_error_page(PageCustomization::new())
			.with_flags(BTreeMap::new())
			.with_friendly_name("My-Tenant")
			.with_picture_url("https://pic.to/123")
			.with_support_email("support@example.com")
			.with_support_url("https://support.example.com")
			.with_allowed_logout_urls(["https://domain.example.com/logout"])
	}

	#[test]
	fn tenants_serialize_with_stable_field_order() {
		let serialized =
			serde_json::to_string(&full_tenant()).expect("Tenant should serialize successfully.");

		assert_eq!(serialized, TENANT_JSON);
	}

	#[test]
	fn tenants_round_trip_field_for_field() {
		let tenant: Tenant =
			serde_json::from_str(TENANT_JSON).expect("Tenant should deserialize successfully.");

		assert_eq!(tenant, full_tenant());

		let serialized =
			serde_json::to_string(&tenant).expect("Tenant should reserialize successfully.");

		assert_eq!(serialized, TENANT_JSON);
	}

	#[test]
	fn unset_tenant_fields_are_omitted() {
		let tenant = Tenant::new().with_friendly_name("Sparse");
		let serialized =
			serde_json::to_string(&tenant).expect("Tenant should serialize successfully.");

		assert_eq!(serialized, r#"{"friendly_name":"Sparse"}"#);
		assert!(!serialized.contains("null"));
	}

	#[test]
	fn page_customizations_round_trip() {
		let json = r#"{"enabled":true,"html":"thewebpage","show_log_link":true,"url":"https://page.example.com/main"}"#;
		let page: PageCustomization = serde_json::from_str(json)
			.expect("Page customization should deserialize successfully.");

		assert_eq!(page.enabled, Some(true));
		assert_eq!(page.html.as_deref(), Some("thewebpage"));
		assert_eq!(page.show_log_link, Some(true));
		assert_eq!(page.url.as_deref(), Some("https://page.example.com/main"));

		let serialized =
			serde_json::to_string(&page).expect("Page customization should serialize successfully.");

		assert_eq!(serialized, json);
	}

	#[test]
	fn tenants_tolerate_unknown_fields() {
		let tenant: Tenant =
			serde_json::from_str(r#"{"friendly_name":"My-Tenant","session_lifetime":720}"#)
				.expect("Unknown fields should be ignored.");

		assert_eq!(tenant.friendly_name.as_deref(), Some("My-Tenant"));
		assert!(tenant.flags.is_none());
	}
}
