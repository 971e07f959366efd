//! Tenant-settings endpoint: read and update the tenant configuration bag.

// self
use crate::{
	_prelude::*,
	filter::FieldsFilter,
	http::Method,
	mgmt::{ManagementClient, require},
	model::Tenant,
	request::MgmtRequest,
};

const RESOURCE: &str = "tenants";
const SETTINGS: [&str; 4] = ["api", "v2", "tenants", "settings"];

/// Typed operations for the `/api/v2/tenants/settings` resource family.
pub struct TenantsEndpoint<'a> {
	client: &'a ManagementClient,
}
impl ManagementClient {
	/// Tenant-settings endpoint accessor.
	pub fn tenants(&self) -> TenantsEndpoint<'_> {
		TenantsEndpoint { client: self }
	}
}
impl TenantsEndpoint<'_> {
	/// Builds a GET request for the tenant settings, optionally narrowing the returned fields.
	pub fn get(&self, filter: Option<&FieldsFilter>) -> Result<MgmtRequest<Tenant>> {
		let mut request = self.client.request(RESOURCE, "get", Method::Get, &SETTINGS)?;

		if let Some(filter) = filter {
			request = request.with_query_pairs(filter.as_pairs());
		}

		Ok(request)
	}

	/// Builds a PATCH request applying the set fields of `tenant`.
	///
	/// Unset fields are omitted from the payload entirely, so the server leaves
	/// them untouched instead of clearing them.
	pub fn update(&self, tenant: Option<&Tenant>) -> Result<MgmtRequest<Tenant>> {
		let tenant = require(tenant, "tenant")?;

		self.client.request(RESOURCE, "update", Method::Patch, &SETTINGS)?.with_body(tenant)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::StaticTokenProvider,
		http::{HttpRequest, HttpTransport, TransportFuture},
	};

	struct NullTransport;
	impl HttpTransport for NullTransport {
		fn call(&self, _: HttpRequest) -> TransportFuture<'_> {
			Box::pin(async { Ok(Default::default()) })
		}
	}

	#[test]
	fn update_requires_a_tenant_value() {
		let client = ManagementClient::with_transport(
			Url::parse("https://tenant.example.com")
				.expect("Base URL fixture should parse successfully."),
			Arc::new(NullTransport),
			Arc::new(StaticTokenProvider::new("token")),
		);
		let err =
			client.tenants().update(None).expect_err("Missing tenant should be rejected.");

		assert_eq!(err.to_string(), "'tenant' cannot be null!");
	}
}
